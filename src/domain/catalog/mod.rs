//! Catalog of fixed, process-wide enumerations read by the pod engine.

pub mod package_type;
pub mod pod_type;

pub use package_type::PackageType;
pub use pod_type::PodType;
