//! Persistence adapters for the contact collection.
//!
//! # Responsibility
//! - Load and save the whole collection as one unit.
//! - Distinguish unreadable/unwritable media from unparsable content.
//!
//! # Invariants
//! - A missing backing store loads as an empty collection.
//! - Unparsable content is reported as `Corrupt`, never as empty.
//! - `save` always replaces the complete stored collection.

use crate::model::collection::ContactCollection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a [`ContactStore`].
#[derive(Debug)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing medium exists but does not hold a valid collection.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence { path, source } => {
                write!(f, "contact store `{}` is not accessible: {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "contact store `{}` is corrupt: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

/// Durable medium for the full contact collection.
pub trait ContactStore {
    /// Reads the stored collection, or an empty one when nothing is stored.
    fn load(&self) -> StoreResult<ContactCollection>;
    /// Replaces the stored collection with `collection`.
    fn save(&self, collection: &ContactCollection) -> StoreResult<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn load(&self) -> StoreResult<ContactCollection> {
        (**self).load()
    }

    fn save(&self, collection: &ContactCollection) -> StoreResult<()> {
        (**self).save(collection)
    }
}
