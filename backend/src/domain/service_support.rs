//! Internal helpers shared by the entity services.

use crate::domain::ports::RepositoryError;
use crate::domain::{Error, ValidationFailure};

pub(crate) fn map_repository_error(entity: &str, error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("{entity} repository unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("{entity} repository error: {message}"))
        }
        RepositoryError::Conflict { message } => {
            Error::conflict(format!("{entity} conflicts with a stored record: {message}"))
        }
        RepositoryError::NotFound { message } => {
            Error::not_found(format!("{entity} not found: {message}"))
        }
    }
}

pub(crate) fn map_validation_failure(
    entity: &str,
    failure: ValidationFailure<RepositoryError>,
) -> Error {
    match failure {
        ValidationFailure::Invalid(errors) => Error::from(errors),
        ValidationFailure::Repository(error) => map_repository_error(entity, error),
    }
}
