//! Occupancy intervals recorded against a parking lot.
//!
//! Entry and exit timestamps are audit data: they are validated and stored
//! but never emitted by [`OccupancyStateView`].

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use utoipa::ToSchema;

use super::ports::{ParkingLotRepository, RepositoryError};
use super::validation::{FieldError, FieldErrorKind, FieldReader, InputPayload, ValidationFailure};
use super::{OccupancyStateId, ParkingLotId};

/// Validated occupancy fields that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyStateDraft {
    pub parking_lot_id: ParkingLotId,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}

/// Stored occupancy interval.
///
/// ## Invariants
/// - `exited_at`, when set, is not earlier than `entered_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyState {
    id: OccupancyStateId,
    parking_lot_id: ParkingLotId,
    entered_at: DateTime<Utc>,
    exited_at: Option<DateTime<Utc>>,
}

impl OccupancyState {
    /// Attach a persistence identifier to validated fields.
    #[must_use]
    pub fn new(id: OccupancyStateId, draft: OccupancyStateDraft) -> Self {
        Self {
            id,
            parking_lot_id: draft.parking_lot_id,
            entered_at: draft.entered_at,
            exited_at: draft.exited_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> OccupancyStateId {
        self.id
    }

    #[must_use]
    pub fn parking_lot_id(&self) -> ParkingLotId {
        self.parking_lot_id
    }

    #[must_use]
    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    #[must_use]
    pub fn exited_at(&self) -> Option<DateTime<Utc>> {
        self.exited_at
    }

    /// Whether the vehicle is still inside.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }
}

/// Public projection of an occupancy interval, without timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStateView {
    #[schema(value_type = i64, example = 1)]
    pub id: OccupancyStateId,
    #[schema(value_type = i64, example = 1)]
    pub parking_lot_id: ParkingLotId,
}

impl From<&OccupancyState> for OccupancyStateView {
    fn from(value: &OccupancyState) -> Self {
        Self {
            id: value.id,
            parking_lot_id: value.parking_lot_id,
        }
    }
}

/// Turns raw input into an [`OccupancyStateDraft`].
///
/// "Now" is read from the injected clock once per call.
pub struct OccupancyStateValidator<'r, L: ?Sized> {
    parking_lots: &'r L,
    clock: &'r dyn Clock,
}

impl<'r, L> OccupancyStateValidator<'r, L>
where
    L: ParkingLotRepository + ?Sized,
{
    pub fn new(parking_lots: &'r L, clock: &'r dyn Clock) -> Self {
        Self {
            parking_lots,
            clock,
        }
    }

    /// Validate `input` against `existing` and build the fields to persist.
    ///
    /// An absent `exitedAt` keeps the stored exit time; an explicit `null`
    /// clears it.
    pub async fn validate_and_build(
        &self,
        existing: Option<&OccupancyState>,
        input: &InputPayload,
        partial: bool,
    ) -> Result<OccupancyStateDraft, ValidationFailure<RepositoryError>> {
        let fallback = existing.filter(|_| partial);
        let mut reader = FieldReader::new(input, fallback.is_none());

        let parking_lot_id = reader.reference("parkingLotId").map(ParkingLotId::new);
        let entered_at = reader.timestamp("enteredAt");
        let exited_at = reader.nullable_timestamp("exitedAt");

        if let Some(id) = parking_lot_id {
            let found = self
                .parking_lots
                .find_by_id(id)
                .await
                .map_err(ValidationFailure::Repository)?;
            if found.is_none() {
                reader.reject(
                    "parkingLotId",
                    FieldError::new(
                        FieldErrorKind::ReferenceNotFound,
                        "does_not_exist",
                        format!("Invalid pk \"{id}\" - object does not exist."),
                    ),
                );
            }
        }

        let entered_at = entered_at.filter(|entered| {
            let in_past = *entered <= self.clock.utc();
            if !in_past {
                reader.reject(
                    "enteredAt",
                    FieldError::new(
                        FieldErrorKind::ValueInvalid,
                        "future_datetime",
                        "Entry time cannot be in the future.",
                    ),
                );
            }
            in_past
        });

        let exited_at = match exited_at {
            Some(supplied) => Some(supplied),
            None if reader.has_failed("exitedAt") => None,
            None => Some(existing.and_then(OccupancyState::exited_at)),
        };
        let effective_entry = if reader.has_failed("enteredAt") {
            None
        } else {
            entered_at.or(fallback.map(OccupancyState::entered_at))
        };
        let exits_early = matches!(
            (effective_entry, exited_at),
            (Some(entry), Some(Some(exit))) if exit < entry
        );
        if exits_early {
            reader.reject(
                "exitedAt",
                FieldError::new(
                    FieldErrorKind::ValueInvalid,
                    "exit_before_entry",
                    "Exit time cannot be earlier than entry time.",
                ),
            );
        }

        let errors = reader.finish();
        let parking_lot_id = parking_lot_id.or(fallback.map(OccupancyState::parking_lot_id));
        let draft = match (parking_lot_id, effective_entry, exited_at) {
            (Some(parking_lot_id), Some(entered_at), Some(exited_at)) => Some(OccupancyStateDraft {
                parking_lot_id,
                entered_at,
                exited_at,
            }),
            _ => None,
        };

        match draft {
            Some(draft) if errors.is_empty() => Ok(draft),
            _ => Err(ValidationFailure::Invalid(errors)),
        }
    }
}
