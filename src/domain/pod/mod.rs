//! Pod aggregate
//!
//! Pod value object, availability status and the pod code factory.

pub mod code;
pub mod model;

pub use code::make_pod_code;
pub use model::{Pod, PodStatus};
