//! Error type shared by every persistence port.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A storage-level uniqueness or reference constraint rejected a write.
        Conflict { message: String } => "repository constraint violated: {message}",
        /// The record addressed by a mutation no longer exists.
        NotFound { message: String } => "repository record missing: {message}",
    }
}
