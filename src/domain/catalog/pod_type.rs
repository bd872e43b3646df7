//! Physical pod types and their fixed layout constants

use serde::{Deserialize, Serialize};

use super::PackageType;

/// Pod type of a shuttle pod.
///
/// Every type carries fixed catalog data: the pod-code prefix, the share of
/// total capacity it receives, its per-deck limits and the package type it is
/// booked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodType {
    #[serde(rename = "standardPod")]
    Standard,
    #[serde(rename = "enhancedPod")]
    Enhanced,
    #[serde(rename = "privateSuitePod")]
    PrivateSuite,
}

impl PodType {
    /// Generation order. Decks are numbered following this order.
    pub const ALL: [PodType; 3] = [Self::Standard, Self::Enhanced, Self::PrivateSuite];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Standard => "standardPod",
            Self::Enhanced => "enhancedPod",
            Self::PrivateSuite => "privateSuitePod",
        }
    }

    pub fn label(&self) -> String {
        format!("podType.{}", self.key())
    }

    pub fn find_by_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn code_prefix(&self) -> &'static str {
        match self {
            Self::Standard => "S",
            Self::Enhanced => "E",
            Self::PrivateSuite => "P",
        }
    }

    /// Fraction of the shuttle capacity allotted to this type. Sums to 1.0.
    pub fn distribution_ratio(&self) -> f64 {
        match self {
            Self::Standard => 0.70,
            Self::Enhanced => 0.27,
            Self::PrivateSuite => 0.03,
        }
    }

    pub fn max_pods_per_deck(&self) -> u32 {
        match self {
            Self::Standard => 30,
            Self::Enhanced => 20,
            Self::PrivateSuite => 10,
        }
    }

    /// Width of a deck row grid; used as the column modulus.
    pub fn max_rows_per_deck(&self) -> u32 {
        match self {
            Self::Standard => 3,
            Self::Enhanced => 2,
            Self::PrivateSuite => 1,
        }
    }

    /// Package type this pod type is booked with.
    ///
    /// Not monotonic in the package rank: enhanced pods go to first class,
    /// private suites to business.
    pub fn available_from(&self) -> PackageType {
        match self {
            Self::Standard => PackageType::Economy,
            Self::Enhanced => PackageType::FirstClass,
            Self::PrivateSuite => PackageType::Business,
        }
    }

    /// A passenger may book this pod type only with the exact package listed
    /// in [`PodType::available_from`].
    pub fn is_bookable_with(&self, package_type: PackageType) -> bool {
        self.available_from() == package_type
    }

    /// The pod type a package is entitled to.
    pub fn find_by_package_type(package_type: PackageType) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.available_from() == package_type)
    }
}

impl std::fmt::Display for PodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
