//! Write-through contact repository.
//!
//! # Responsibility
//! - Own the in-memory collection for the lifetime of the process.
//! - Validate writes at the core boundary.
//! - Flush every mutation through the store before returning.
//!
//! # Invariants
//! - Mutations are staged on a copy and committed only after `save` succeeds,
//!   so memory and disk agree after every call, including failed ones.
//! - Rejected writes (`Validation`, `NotFound`) never reach the store.
//! - Read paths hand out owned copies, never references into live state.

use crate::model::collection::ContactCollection;
use crate::model::contact::{Contact, ContactValidationError};
use crate::store::{ContactStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact mutations and store access.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    NotFound(String),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "contact not found: {name}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Single owner of the contact collection.
pub struct ContactRepository<S: ContactStore> {
    store: S,
    contacts: ContactCollection,
}

impl<S: ContactStore> ContactRepository<S> {
    /// Loads the collection from `store`.
    ///
    /// # Errors
    /// - Propagates `StoreError::Corrupt` and `StoreError::Persistence`
    ///   unchanged; corrupt data is never replaced by an empty book.
    pub fn open(store: S) -> RepoResult<Self> {
        let contacts = store.load()?;
        info!(
            "event=repo_open module=repo status=ok count={}",
            contacts.len()
        );
        Ok(Self { store, contacts })
    }

    /// Inserts a contact or replaces the fields of the contact with `name`.
    ///
    /// # Errors
    /// - `Validation` when any field is empty; nothing is stored.
    /// - `Store` when the flush fails; in-memory state is rolled back.
    pub fn upsert(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> RepoResult<Contact> {
        let contact = Contact::new(name, phone, email, location);
        if let Err(err) = contact.validate() {
            warn!("event=contact_upsert module=repo status=rejected error_code=validation");
            return Err(err.into());
        }

        let started_at = Instant::now();
        let mut staged = self.contacts.clone();
        let replaced = staged.upsert(contact.clone()).is_some();
        self.commit(staged, "contact_upsert", started_at)?;

        info!(
            "event=contact_upsert module=repo status=ok mode={} count={} duration_ms={}",
            if replaced { "update" } else { "insert" },
            self.contacts.len(),
            started_at.elapsed().as_millis()
        );
        Ok(contact)
    }

    /// Removes the contact with `name`.
    ///
    /// # Errors
    /// - `NotFound` when no such contact exists; nothing is stored.
    /// - `Store` when the flush fails; in-memory state is rolled back.
    pub fn delete(&mut self, name: &str) -> RepoResult<()> {
        if !self.contacts.contains(name) {
            warn!("event=contact_delete module=repo status=rejected error_code=not_found");
            return Err(RepoError::NotFound(name.to_string()));
        }

        let started_at = Instant::now();
        let mut staged = self.contacts.clone();
        staged.remove(name);
        self.commit(staged, "contact_delete", started_at)?;

        info!(
            "event=contact_delete module=repo status=ok count={} duration_ms={}",
            self.contacts.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Returns a copy of the contact with `name`, if present.
    pub fn get(&self, name: &str) -> Option<Contact> {
        self.contacts.get(name).cloned()
    }

    /// Returns a snapshot of every contact in insertion order.
    pub fn get_all(&self) -> Vec<Contact> {
        self.contacts.snapshot()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn commit(
        &mut self,
        staged: ContactCollection,
        event: &str,
        started_at: Instant,
    ) -> RepoResult<()> {
        if let Err(err) = self.store.save(&staged) {
            warn!(
                "event={} module=repo status=rolled_back error_code=store_save_failed duration_ms={}",
                event,
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
        self.contacts = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRepository, RepoError};
    use crate::model::collection::ContactCollection;
    use crate::model::contact::{Contact, ContactField};
    use crate::store::MemoryStore;

    #[test]
    fn open_loads_existing_contacts_in_stored_order() {
        let stored = [
            Contact::new("Zed", "1", "z@x", "Z"),
            Contact::new("Amy", "2", "a@x", "A"),
        ]
        .into_iter()
        .collect::<ContactCollection>();
        let repo = ContactRepository::open(MemoryStore::with_collection(stored)).unwrap();

        let names = repo.get_all().into_iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn upsert_then_get_returns_copy() {
        let mut repo = ContactRepository::open(MemoryStore::new()).unwrap();
        let created = repo.upsert("Amy Wu", "222", "a@x.com", "LA").unwrap();

        let mut fetched = repo.get("Amy Wu").unwrap();
        assert_eq!(fetched, created);

        fetched.phone = "changed".to_string();
        assert_eq!(repo.get("Amy Wu").unwrap().phone, "222");
    }

    #[test]
    fn rejected_writes_do_not_reach_the_store() {
        let store = MemoryStore::new();
        let mut repo = ContactRepository::open(&store).unwrap();

        let err = repo.upsert("", "1", "e", "l").unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ref inner) if inner.to_string().contains(ContactField::Name.as_str())
        ));
        let err = repo.delete("ghost").unwrap_err();
        assert!(matches!(err, RepoError::NotFound(ref name) if name == "ghost"));

        assert_eq!(store.save_count(), 0);
        assert!(repo.is_empty());
    }

    #[test]
    fn whitespace_values_are_stored_as_given() {
        let store = MemoryStore::new();
        let mut repo = ContactRepository::open(&store).unwrap();

        let saved = repo.upsert("Amy", " ", "a@x", "LA").unwrap();
        assert_eq!(saved.phone, " ");
        assert_eq!(repo.get("Amy").unwrap().phone, " ");
        assert_eq!(store.save_count(), 1);
    }
}
