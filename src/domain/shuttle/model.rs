//! Space shuttle model

use serde::{Deserialize, Serialize};

use super::{LayoutFactory, ShuttleLayout};

/// The shuttle model a voyage flies with. Only `max_capacity` feeds the pod
/// engine; the layout is derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceShuttleModel {
    pub id: String,
    pub name: String,
    pub max_capacity: u32,
    pub max_speed: u64,
}

impl SpaceShuttleModel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_capacity: u32, max_speed: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_capacity,
            max_speed,
        }
    }

    pub fn layout(&self) -> ShuttleLayout {
        LayoutFactory::generate_layout(self.max_capacity)
    }
}
