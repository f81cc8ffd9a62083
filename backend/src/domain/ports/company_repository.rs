//! Port for company persistence.

use async_trait::async_trait;

use crate::domain::{Company, CompanyDraft, CompanyId};

use super::RepositoryError;

/// Company columns carrying a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyUniqueField {
    /// Contact email address.
    Email,
}

/// Port for storing and reading companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Whether a company other than `excluding` already holds `value` in `field`.
    async fn exists_by_unique(
        &self,
        field: CompanyUniqueField,
        value: &str,
        excluding: Option<CompanyId>,
    ) -> Result<bool, RepositoryError>;

    /// Fetch a company by identifier.
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError>;

    /// Every stored company, ordered by identifier.
    async fn list(&self) -> Result<Vec<Company>, RepositoryError>;

    /// Persist a new company and return it with its assigned identifier.
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, RepositoryError>;

    /// Overwrite the stored fields of company `id`.
    async fn update(&self, id: CompanyId, draft: &CompanyDraft)
    -> Result<Company, RepositoryError>;
}
