//! Shuttle aggregate
//!
//! Shuttle model, deterministic layout generation and the layout query surface.

pub mod layout;
pub mod layout_factory;
pub mod model;

pub use layout::ShuttleLayout;
pub use layout_factory::LayoutFactory;
pub use model::SpaceShuttleModel;
