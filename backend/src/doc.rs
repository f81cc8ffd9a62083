//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every company, parking lot, occupancy state and
//! health endpoint together with the projection, input and error schemas.
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{CompanyView, OccupancyStateView, ParkingLotView};
use crate::inbound::http::schemas::{
    CompanyInputSchema, ErrorCodeSchema, ErrorSchema, OccupancyStateInputSchema,
    ParkingLotInputSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartParking backend API",
        description = "Companies, their parking lots and the occupancy recorded against them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::get_company,
        crate::inbound::http::companies::replace_company,
        crate::inbound::http::companies::patch_company,
        crate::inbound::http::parking_lots::list_parking_lots,
        crate::inbound::http::parking_lots::create_parking_lot,
        crate::inbound::http::parking_lots::get_parking_lot,
        crate::inbound::http::parking_lots::replace_parking_lot,
        crate::inbound::http::parking_lots::patch_parking_lot,
        crate::inbound::http::parking_lots::list_parking_lot_states,
        crate::inbound::http::occupancy_states::record_state,
        crate::inbound::http::occupancy_states::get_state,
        crate::inbound::http::occupancy_states::replace_state,
        crate::inbound::http::occupancy_states::patch_state,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CompanyView,
        ParkingLotView,
        OccupancyStateView,
        CompanyInputSchema,
        ParkingLotInputSchema,
        OccupancyStateInputSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "companies", description = "Companies owning parking lots"),
        (name = "parking-lots", description = "Parking lots and their occupancy history"),
        (name = "occupancy-states", description = "Vehicle entry and exit records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    fn company_projection_omits_the_secret() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let company = schemas.get("CompanyView").expect("CompanyView schema");

        assert_object_schema_has_field(company, "capacity");
        match company {
            RefOr::T(Schema::Object(obj)) => assert!(!obj.properties.contains_key("secret")),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/companies")]
    #[case("/api/v1/companies/{id}")]
    #[case("/api/v1/parking-lots")]
    #[case("/api/v1/parking-lots/{id}")]
    #[case("/api/v1/parking-lots/{id}/states")]
    #[case("/api/v1/occupancy-states")]
    #[case("/api/v1/occupancy-states/{id}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }
}
