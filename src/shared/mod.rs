pub mod errors;
pub mod utils;

pub use errors::*;
pub use utils::*;
