//! PostgreSQL-backed `CompanyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CompanyRepository, CompanyUniqueField, RepositoryError};
use crate::domain::{Company, CompanyDraft, CompanyId, Secret};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CompanyRow, CompanyWrite};
use super::pool::DbPool;
use super::schema::companies;

/// Diesel-backed implementation of the `CompanyRepository` port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_company(row: CompanyRow) -> Company {
    Company::new(
        CompanyId::new(row.id),
        CompanyDraft {
            name: row.name,
            email: row.email,
            secret: Secret::new(row.secret),
            capacity: row.capacity,
        },
    )
}

fn to_write(draft: &CompanyDraft) -> CompanyWrite<'_> {
    CompanyWrite {
        name: &draft.name,
        email: &draft.email,
        secret: draft.secret.expose(),
        capacity: draft.capacity,
    }
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn exists_by_unique(
        &self,
        field: CompanyUniqueField,
        value: &str,
        excluding: Option<CompanyId>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = companies::table.into_boxed();
        query = match field {
            CompanyUniqueField::Email => query.filter(companies::email.eq(value)),
        };
        if let Some(id) = excluding {
            query = query.filter(companies::id.ne(id.get()));
        }

        let matches: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(matches > 0)
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CompanyRow> = companies::table
            .find(id.get())
            .select(CompanyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_company))
    }

    async fn list(&self) -> Result<Vec<Company>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CompanyRow> = companies::table
            .order(companies::id.asc())
            .select(CompanyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_company).collect())
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CompanyRow = diesel::insert_into(companies::table)
            .values(&to_write(draft))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_company(row))
    }

    async fn update(
        &self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Company, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CompanyRow = diesel::update(companies::table.find(id.get()))
            .set(&to_write(draft))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_company(row))
    }
}
