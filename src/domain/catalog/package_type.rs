//! Fare tiers a passenger can book

use serde::{Deserialize, Serialize};

/// Package type purchased by a passenger.
///
/// Declaration order is the canonical rank: `Economy < Business < FirstClass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackageType {
    #[serde(rename = "economy")]
    Economy,
    #[serde(rename = "business")]
    Business,
    #[serde(rename = "firstClass")]
    FirstClass,
}

impl PackageType {
    pub const ALL: [PackageType; 3] = [Self::Economy, Self::Business, Self::FirstClass];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::FirstClass => "firstClass",
        }
    }

    pub fn label(&self) -> String {
        format!("packageType.{}", self.key())
    }

    pub fn find_by_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_declaration_order() {
        assert!(PackageType::Economy < PackageType::Business);
        assert!(PackageType::Business < PackageType::FirstClass);
    }

    #[test]
    fn find_by_key() {
        assert_eq!(
            PackageType::find_by_key("firstClass"),
            Some(PackageType::FirstClass)
        );
        assert_eq!(PackageType::find_by_key("FIRST_CLASS"), None);
    }

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&PackageType::FirstClass).unwrap();
        assert_eq!(json, "\"firstClass\"");
        assert_eq!(PackageType::Business.label(), "packageType.business");
    }
}
