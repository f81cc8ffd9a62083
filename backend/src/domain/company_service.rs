//! Company domain service.
//!
//! Implements the company driving ports: validate raw input, persist the
//! draft, and translate every failure into a domain [`Error`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CompanyCommand, CompanyQuery, CompanyRepository};
use crate::domain::service_support::{map_repository_error, map_validation_failure};
use crate::domain::{Company, CompanyId, CompanyValidator, Error, InputPayload, UpdateMode};

const ENTITY: &str = "company";

/// Company service implementing the command and query driving ports.
pub struct CompanyService<R: ?Sized> {
    company_repo: Arc<R>,
}

impl<R: ?Sized> CompanyService<R> {
    /// Create a new service over the company repository.
    pub fn new(company_repo: Arc<R>) -> Self {
        Self { company_repo }
    }
}

impl<R: ?Sized> Clone for CompanyService<R> {
    fn clone(&self) -> Self {
        Self {
            company_repo: Arc::clone(&self.company_repo),
        }
    }
}

impl<R> CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    async fn find(&self, id: CompanyId) -> Result<Company, Error> {
        self.company_repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))?
            .ok_or_else(|| Error::not_found(format!("company {id} not found")))
    }
}

#[async_trait]
impl<R> CompanyCommand for CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    async fn create_company(&self, input: InputPayload) -> Result<Company, Error> {
        let draft = CompanyValidator::new(self.company_repo.as_ref())
            .validate_and_build(None, &input, false)
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.company_repo
            .create(&draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }

    async fn update_company(
        &self,
        id: CompanyId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<Company, Error> {
        let existing = self.find(id).await?;
        let draft = CompanyValidator::new(self.company_repo.as_ref())
            .validate_and_build(Some(&existing), &input, mode.is_partial())
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.company_repo
            .update(id, &draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[async_trait]
impl<R> CompanyQuery for CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    async fn get_company(&self, id: CompanyId) -> Result<Company, Error> {
        self.find(id).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>, Error> {
        self.company_repo
            .list()
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[cfg(test)]
#[path = "company_service_tests.rs"]
mod tests;
