//! Company HTTP handlers.
//!
//! ```text
//! GET   /api/v1/companies
//! POST  /api/v1/companies {"name":"Empresa 1","email":"e1@example.com","secret":"pw","capacity":10}
//! GET   /api/v1/companies/{id}
//! PUT   /api/v1/companies/{id}
//! PATCH /api/v1/companies/{id} {"capacity":20}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, patch, post, put, web};
use serde_json::Value;
use tracing::info;

use crate::domain::{CompanyId, CompanyView, UpdateMode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::into_input;
use crate::inbound::http::schemas::{CompanyInputSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every company.
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    responses(
        (status = 200, description = "Companies", body = [CompanyView]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompanies"
)]
#[get("/companies")]
pub async fn list_companies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CompanyView>>> {
    let companies = state.companies_query.list_companies().await?;
    Ok(web::Json(companies.iter().map(CompanyView::from).collect()))
}

/// Register a company.
#[utoipa::path(
    post,
    path = "/api/v1/companies",
    request_body = CompanyInputSchema,
    responses(
        (status = 201, description = "Company created", body = CompanyView,
            headers(("Location" = String, description = "URL of the new company"))),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 409, description = "Storage constraint violated", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "createCompany"
)]
#[post("/companies")]
pub async fn create_company(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let input = into_input(body.into_inner())?;
    let company = state.companies.create_company(input).await?;
    info!(company_id = %company.id(), "company created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/companies/{}", company.id())))
        .json(CompanyView::from(&company)))
}

/// Fetch one company.
#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company", body = CompanyView),
        (status = 404, description = "Unknown company", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "getCompany"
)]
#[get("/companies/{id}")]
pub async fn get_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<CompanyView>> {
    let company = state
        .companies_query
        .get_company(CompanyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(CompanyView::from(&company)))
}

async fn update(
    state: &HttpState,
    id: i64,
    body: Value,
    mode: UpdateMode,
) -> ApiResult<web::Json<CompanyView>> {
    let input = into_input(body)?;
    let company = state
        .companies
        .update_company(CompanyId::new(id), input, mode)
        .await?;
    info!(company_id = %company.id(), ?mode, "company updated");
    Ok(web::Json(CompanyView::from(&company)))
}

/// Replace every field of a company.
#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    request_body = CompanyInputSchema,
    responses(
        (status = 200, description = "Company updated", body = CompanyView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown company", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "replaceCompany"
)]
#[put("/companies/{id}")]
pub async fn replace_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<CompanyView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Replace).await
}

/// Change only the supplied company fields.
#[utoipa::path(
    patch,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    request_body = CompanyInputSchema,
    responses(
        (status = 200, description = "Company updated", body = CompanyView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown company", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "patchCompany"
)]
#[patch("/companies/{id}")]
pub async fn patch_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<CompanyView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Partial).await
}

#[cfg(test)]
#[path = "companies_tests.rs"]
mod tests;
