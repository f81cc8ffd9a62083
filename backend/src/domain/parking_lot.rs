//! Parking lot data model and its input validator.

use serde::Serialize;
use utoipa::ToSchema;

use super::ports::{CompanyRepository, ParkingLotRepository, ParkingLotUniqueField, RepositoryError};
use super::validation::{
    FieldError, FieldErrorKind, FieldReader, InputPayload, Rule, ValidationFailure,
};
use super::{CompanyId, ParkingLotId};

/// Maximum location label length, counted in characters.
pub const LOCATION_MAX: usize = 255;

/// Validated parking lot fields that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLotDraft {
    pub company_id: CompanyId,
    pub location: String,
    pub active: bool,
}

/// Stored parking lot owned by a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLot {
    id: ParkingLotId,
    company_id: CompanyId,
    location: String,
    active: bool,
}

impl ParkingLot {
    /// Attach a persistence identifier to validated fields.
    #[must_use]
    pub fn new(id: ParkingLotId, draft: ParkingLotDraft) -> Self {
        Self {
            id,
            company_id: draft.company_id,
            location: draft.location,
            active: draft.active,
        }
    }

    #[must_use]
    pub fn id(&self) -> ParkingLotId {
        self.id
    }

    /// Owning company. Write-only on the public surface.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }
}

/// Public projection of a parking lot. The owning company is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLotView {
    #[schema(value_type = i64, example = 1)]
    pub id: ParkingLotId,
    #[schema(example = "Av. Siempre Viva 742")]
    pub location: String,
    pub active: bool,
}

impl From<&ParkingLot> for ParkingLotView {
    fn from(value: &ParkingLot) -> Self {
        Self {
            id: value.id,
            location: value.location.clone(),
            active: value.active,
        }
    }
}

const LOCATION_RULES: [Rule<str>; 2] = [
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "blank",
        "This field may not be blank.",
        |value: &str| !value.is_empty(),
    ),
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "max_length",
        "Ensure this field has no more than 255 characters.",
        |value: &str| value.chars().count() <= LOCATION_MAX,
    ),
];

/// Turns raw input into a [`ParkingLotDraft`], resolving the owning company.
pub struct ParkingLotValidator<'r, C: ?Sized, L: ?Sized> {
    companies: &'r C,
    parking_lots: &'r L,
}

impl<'r, C, L> ParkingLotValidator<'r, C, L>
where
    C: CompanyRepository + ?Sized,
    L: ParkingLotRepository + ?Sized,
{
    pub fn new(companies: &'r C, parking_lots: &'r L) -> Self {
        Self {
            companies,
            parking_lots,
        }
    }

    /// Validate `input` against `existing` and build the fields to persist.
    ///
    /// `active` defaults to `true` on creation and keeps its stored value
    /// when an update omits it.
    pub async fn validate_and_build(
        &self,
        existing: Option<&ParkingLot>,
        input: &InputPayload,
        partial: bool,
    ) -> Result<ParkingLotDraft, ValidationFailure<RepositoryError>> {
        let fallback = existing.filter(|_| partial);
        let mut reader = FieldReader::new(input, fallback.is_none());

        let company_id = reader.reference("companyId").map(CompanyId::new);
        let location = reader.string("location", &LOCATION_RULES);
        let active = reader.boolean("active");

        if let Some(id) = company_id {
            let found = self
                .companies
                .find_by_id(id)
                .await
                .map_err(ValidationFailure::Repository)?;
            if found.is_none() {
                reader.reject(
                    "companyId",
                    FieldError::new(
                        FieldErrorKind::ReferenceNotFound,
                        "does_not_exist",
                        format!("Invalid pk \"{id}\" - object does not exist."),
                    ),
                );
            }
        }

        if let Some(location) = location.as_deref() {
            let taken = self
                .parking_lots
                .exists_by_unique(
                    ParkingLotUniqueField::Location,
                    location,
                    existing.map(ParkingLot::id),
                )
                .await
                .map_err(ValidationFailure::Repository)?;
            if taken {
                reader.reject(
                    "location",
                    FieldError::new(
                        FieldErrorKind::UniquenessConflict,
                        "unique",
                        "parking lot with this location already exists.",
                    ),
                );
            }
        }

        let errors = reader.finish();
        let active = active.or(existing.map(ParkingLot::active)).unwrap_or(true);
        let draft = match fallback {
            Some(stored) => Some(ParkingLotDraft {
                company_id: company_id.unwrap_or(stored.company_id),
                location: location.unwrap_or_else(|| stored.location.clone()),
                active,
            }),
            None => company_id.zip(location).map(|(company_id, location)| ParkingLotDraft {
                company_id,
                location,
                active,
            }),
        };

        match draft {
            Some(draft) if errors.is_empty() => Ok(draft),
            _ => Err(ValidationFailure::Invalid(errors)),
        }
    }
}
