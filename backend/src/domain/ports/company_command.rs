//! Driving port for company mutations.

use async_trait::async_trait;

use crate::domain::validation::{InputPayload, UpdateMode};
use crate::domain::{Company, CompanyId, Error};

/// Driving port for company write operations.
///
/// Inputs are raw payloads; validation failures come back as
/// [`crate::domain::ErrorCode::InvalidRequest`] with per-field details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyCommand: Send + Sync {
    /// Validate and persist a new company.
    async fn create_company(&self, input: InputPayload) -> Result<Company, Error>;

    /// Validate and apply changes to company `id`.
    async fn update_company(
        &self,
        id: CompanyId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<Company, Error>;
}
