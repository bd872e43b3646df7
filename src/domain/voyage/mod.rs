pub mod model;

pub use model::{Passenger, Voyage};
