//! OpenAPI schema definitions for error payloads and request bodies.
//!
//! Request bodies are validated field by field in the domain, so handlers
//! accept raw JSON objects. These wrappers document the expected shape
//! without constraining extraction.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request collides with a stored record.
    #[schema(rename = "conflict")]
    Conflict,
    /// A dependency such as the database is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures carry `details.fields`, a map from field name to a
/// list of `{kind, code, message}` entries.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Request validation failed")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// Company input. Every field is required on create and full update.
#[derive(ToSchema)]
#[schema(as = CompanyInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CompanyInputSchema {
    /// Between 3 and 255 characters once trimmed.
    #[schema(example = "Empresa 1")]
    name: String,
    /// Unique across companies.
    #[schema(format = "email", example = "empresa1@example.com")]
    email: String,
    /// Write-only credential, never returned.
    #[schema(format = "password")]
    secret: String,
    /// Number of places, from 0 to 2147483647.
    #[schema(example = 120)]
    capacity: i32,
}

/// Parking lot input.
#[derive(ToSchema)]
#[schema(as = ParkingLotInput, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ParkingLotInputSchema {
    /// Identifier of the owning company.
    #[schema(example = 1)]
    company_id: i64,
    /// Unique across parking lots.
    #[schema(example = "Av. Principal 123")]
    location: String,
    /// Defaults to `true` on create.
    active: Option<bool>,
}

/// Occupancy state input.
#[derive(ToSchema)]
#[schema(as = OccupancyStateInput, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OccupancyStateInputSchema {
    /// Identifier of the parking lot.
    #[schema(example = 1)]
    parking_lot_id: i64,
    /// Entry time, not in the future.
    #[schema(format = "date-time", example = "2026-03-01T08:00:00Z")]
    entered_at: String,
    /// Exit time, not before the entry. `null` clears a recorded exit.
    #[schema(format = "date-time")]
    exited_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn input_schemas_use_wire_names() {
        assert_eq!(
            property_names::<CompanyInputSchema>(),
            vec!["capacity", "email", "name", "secret"]
        );
        assert_eq!(
            property_names::<ParkingLotInputSchema>(),
            vec!["active", "companyId", "location"]
        );
        assert_eq!(
            property_names::<OccupancyStateInputSchema>(),
            vec!["enteredAt", "exitedAt", "parkingLotId"]
        );
    }

    #[rstest]
    fn error_schema_exposes_trace_id_in_camel_case() {
        assert!(property_names::<ErrorSchema>().contains(&"traceId".to_owned()));
    }
}
