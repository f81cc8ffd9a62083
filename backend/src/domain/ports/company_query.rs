//! Driving port for company reads.

use async_trait::async_trait;

use crate::domain::{Company, CompanyId, Error};

/// Driving port for company read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// Fetch one company, failing with `not_found` when absent.
    async fn get_company(&self, id: CompanyId) -> Result<Company, Error>;

    /// Every company, ordered by identifier.
    async fn list_companies(&self) -> Result<Vec<Company>, Error>;
}
