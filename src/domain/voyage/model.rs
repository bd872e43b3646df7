//! Voyage and passenger views consumed by the pod engine
//!
//! Voyages and passengers are owned by the booking layer; the engine only
//! needs a voyage's id and shuttle model, and a passenger's id and package.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PackageType;
use crate::domain::shuttle::{ShuttleLayout, SpaceShuttleModel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    pub id: String,
    pub shuttle_model: SpaceShuttleModel,
}

impl Voyage {
    pub fn new(id: impl Into<String>, shuttle_model: SpaceShuttleModel) -> Self {
        Self {
            id: id.into(),
            shuttle_model,
        }
    }

    /// Layout of the shuttle flying this voyage, regenerated on each call.
    pub fn layout(&self) -> ShuttleLayout {
        self.shuttle_model.layout()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: String,
    pub package_type: PackageType,
}

impl Passenger {
    pub fn new(id: impl Into<String>, package_type: PackageType) -> Self {
        Self {
            id: id.into(),
            package_type,
        }
    }
}
