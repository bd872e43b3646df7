//! Pod value object

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PodType;

/// Pod availability, annotated per query from reservation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "unavailable")]
    Unavailable,
}

impl PodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    pub fn label(&self) -> String {
        format!("podStatus.{}", self.as_str())
    }
}

impl std::fmt::Display for PodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single passenger slot on a shuttle.
///
/// `deck`, `row` and `column` are 1-based. The code is derived from the type
/// prefix, the deck and the pod's sequence on the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pod {
    pub code: String,
    #[serde(rename = "type")]
    pub pod_type: PodType,
    pub deck: u32,
    pub row: u32,
    pub column: u32,
    pub status: PodStatus,
}

impl Pod {
    pub fn new(
        code: impl Into<String>,
        pod_type: PodType,
        deck: u32,
        row: u32,
        column: u32,
    ) -> Self {
        debug_assert!(deck > 0 && row > 0 && column > 0);
        Self {
            code: code.into(),
            pod_type,
            deck,
            row,
            column,
            status: PodStatus::Available,
        }
    }

    /// Copy of this pod carrying the given status.
    pub fn with_status(&self, status: PodStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == PodStatus::Available
    }
}
