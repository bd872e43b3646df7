//! Pod allocation decision procedure
//!
//! Stateless: every call decides from its inputs alone. The reservation list
//! must be the full list for the voyage; persisting the result safely against
//! concurrent writers is the storage layer's job.

use crate::domain::shuttle::ShuttleLayout;
use crate::domain::voyage::{Passenger, Voyage};
use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

use super::model::{PodRequest, PodReservation};

pub struct ReservationAllocator;

impl ReservationAllocator {
    /// Validate the requested pod or pick the first eligible free one, and
    /// author the reservation for it.
    pub fn allocate(
        voyage: &Voyage,
        passenger: &Passenger,
        request: &PodRequest,
        existing: &[PodReservation],
    ) -> DomainResult<PodReservation> {
        Self::allocate_in(&voyage.layout(), voyage, passenger, request, existing)
    }

    /// Same as [`ReservationAllocator::allocate`] with an already generated
    /// layout of the voyage's shuttle.
    pub fn allocate_in(
        layout: &ShuttleLayout,
        voyage: &Voyage,
        passenger: &Passenger,
        request: &PodRequest,
        existing: &[PodReservation],
    ) -> DomainResult<PodReservation> {
        let pod_code = match request {
            PodRequest::Requested(code) => {
                if !layout.is_available(code, existing) {
                    return Err(DomainError::PodAlreadyReserved {
                        voyage_id: voyage.id.clone(),
                        pod_code: code.clone(),
                    });
                }
                if !layout.is_eligible(code, passenger.package_type) {
                    return Err(DomainError::PodNotEligibleForPackage {
                        pod_code: code.clone(),
                        package_type: passenger.package_type,
                    });
                }
                code.clone()
            }
            PodRequest::AutoAssign => layout
                .first_available_for(passenger.package_type, existing)
                .map(|pod| pod.code)
                .ok_or_else(|| DomainError::ShuttleFullyBooked {
                    voyage_id: voyage.id.clone(),
                })?,
        };

        PodReservation::create(pod_code, passenger.id.as_str(), voyage.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PackageType;
    use crate::domain::shuttle::SpaceShuttleModel;

    fn voyage(capacity: u32) -> Voyage {
        Voyage::new("V-1", SpaceShuttleModel::new("M-1", "Aurora", capacity, 28_000))
    }

    fn taken(code: &str) -> PodReservation {
        PodReservation::create(code, format!("other-{code}"), "V-1").unwrap()
    }

    #[test]
    fn explicit_request_is_honoured() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let r = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::Requested("S200005".into()),
            &[taken("S100001")],
        )
        .unwrap();

        assert_eq!(r.pod_code, "S200005");
        assert_eq!(r.passenger_id, "P-1");
        assert_eq!(r.voyage_id, "V-1");
    }

    #[test]
    fn explicit_request_already_taken() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let err = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::Requested("S100001".into()),
            &[taken("S100001")],
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::PodAlreadyReserved {
                voyage_id: "V-1".into(),
                pod_code: "S100001".into()
            }
        );
    }

    #[test]
    fn explicit_request_tier_mismatch() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let err = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::Requested("E400001".into()),
            &[],
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::PodNotEligibleForPackage {
                pod_code: "E400001".into(),
                package_type: PackageType::Economy
            }
        );
    }

    #[test]
    fn reserved_check_comes_before_eligibility() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let err = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::Requested("E400001".into()),
            &[taken("E400001")],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::PodAlreadyReserved { .. }));
    }

    #[test]
    fn explicit_request_outside_the_layout_is_unavailable() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let err = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::Requested("S900001".into()),
            &[],
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::PodAlreadyReserved {
                voyage_id: "V-1".into(),
                pod_code: "S900001".into()
            }
        );
    }

    #[test]
    fn auto_assign_takes_first_free_eligible_pod() {
        let passenger = Passenger::new("P-1", PackageType::Business);
        let r = ReservationAllocator::allocate(
            &voyage(100),
            &passenger,
            &PodRequest::AutoAssign,
            &[taken("P600001")],
        )
        .unwrap();
        assert_eq!(r.pod_code, "P600002");
    }

    #[test]
    fn fully_booked() {
        let v = voyage(100);
        let existing: Vec<_> = v
            .layout()
            .pods_for_package(PackageType::FirstClass)
            .iter()
            .map(|p| taken(&p.code))
            .collect();

        let first_class = Passenger::new("P-1", PackageType::FirstClass);
        let err = ReservationAllocator::allocate(&v, &first_class, &PodRequest::AutoAssign, &existing)
            .unwrap_err();
        assert_eq!(err, DomainError::ShuttleFullyBooked { voyage_id: "V-1".into() });

        // other packages still have room
        let economy = Passenger::new("P-2", PackageType::Economy);
        assert!(ReservationAllocator::allocate(&v, &economy, &PodRequest::AutoAssign, &existing).is_ok());
    }

    #[test]
    fn empty_shuttle_is_fully_booked() {
        let passenger = Passenger::new("P-1", PackageType::Economy);
        let err =
            ReservationAllocator::allocate(&voyage(0), &passenger, &PodRequest::AutoAssign, &[])
                .unwrap_err();
        assert!(matches!(err, DomainError::ShuttleFullyBooked { .. }));
    }
}
