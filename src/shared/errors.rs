use thiserror::Error;

use crate::domain::catalog::PackageType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Invalid pod code input: {0}")]
    InvalidCodeInput(String),

    #[error("Pod {pod_code} is already reserved on voyage {voyage_id}")]
    PodAlreadyReserved { voyage_id: String, pod_code: String },

    #[error("Pod {pod_code} is not available for the {package_type} package")]
    PodNotEligibleForPackage {
        pod_code: String,
        package_type: PackageType,
    },

    #[error("Voyage {voyage_id} has no pod left for this passenger")]
    ShuttleFullyBooked { voyage_id: String },

    #[error("Passenger {passenger_id} already holds a pod reservation")]
    PassengerAlreadySeated { passenger_id: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }

    /// Stable machine-readable key, used as a metrics label.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidCodeInput(_) => "invalidCodeInput",
            Self::PodAlreadyReserved { .. } => "reserved",
            Self::PodNotEligibleForPackage { .. } => "mismatchedPackageType",
            Self::ShuttleFullyBooked { .. } => "fullyBooked",
            Self::PassengerAlreadySeated { .. } => "passengerAlreadySeated",
            Self::Storage(_) => "storage",
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Infra(InfraError::Database(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_storage_errors_are_transient() {
        assert!(DomainError::Storage("connection reset".into()).is_transient());
        assert!(!DomainError::ShuttleFullyBooked {
            voyage_id: "V1".into()
        }
        .is_transient());
        assert!(!DomainError::PodAlreadyReserved {
            voyage_id: "V1".into(),
            pod_code: "S100001".into(),
        }
        .is_transient());
    }

    #[test]
    fn metric_keys_are_distinct() {
        let errors = [
            DomainError::Validation("blank".into()),
            DomainError::InvalidCodeInput("prefix".into()),
            DomainError::PodAlreadyReserved {
                voyage_id: "V1".into(),
                pod_code: "S100001".into(),
            },
            DomainError::PodNotEligibleForPackage {
                pod_code: "E400001".into(),
                package_type: PackageType::Economy,
            },
            DomainError::ShuttleFullyBooked {
                voyage_id: "V1".into(),
            },
            DomainError::PassengerAlreadySeated {
                passenger_id: "P1".into(),
            },
            DomainError::Storage("locked".into()),
        ];
        let keys: std::collections::HashSet<_> = errors.iter().map(DomainError::key).collect();
        assert_eq!(keys.len(), errors.len());
        assert_eq!(errors[2].key(), "reserved");
    }

    #[test]
    fn display_names_the_package() {
        let err = DomainError::PodNotEligibleForPackage {
            pod_code: "E400001".into(),
            package_type: PackageType::Economy,
        };
        assert_eq!(
            err.to_string(),
            "Pod E400001 is not available for the economy package"
        );
    }
}
