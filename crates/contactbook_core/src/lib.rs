//! Core domain logic for the address book.
//! This crate is the single source of truth for contact invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::collection::ContactCollection;
pub use model::contact::{Contact, ContactField, ContactValidationError, FieldParseError};
pub use query::search::{search, SearchError, SearchResult};
pub use query::sort::{sort_by, SortToggle};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult};
pub use service::contact_service::{ContactForm, ContactService, SortOrder};
pub use store::{ContactStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
