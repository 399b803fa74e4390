//! Contact use-case service.
//!
//! # Responsibility
//! - Provide form-shaped entry points for front ends (CLI, GUI).
//! - Combine repository snapshots with search and ordering.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Form input is trimmed here; the repository stores values as given.

use crate::model::contact::{Contact, ContactField};
use crate::query::search::{search, SearchResult};
use crate::query::sort::sort_by;
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use crate::store::ContactStore;

/// Raw input captured by a contact entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl ContactForm {
    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            location: self.location.trim().to_string(),
        }
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            location: contact.location.clone(),
        }
    }
}

/// Requested column ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: ContactField,
    pub descending: bool,
}

/// Use-case service wrapper around a [`ContactRepository`].
pub struct ContactService<S: ContactStore> {
    repo: ContactRepository<S>,
}

impl<S: ContactStore> ContactService<S> {
    pub fn new(repo: ContactRepository<S>) -> Self {
        Self { repo }
    }

    /// Opens the repository on `store` and wraps it.
    pub fn open(store: S) -> RepoResult<Self> {
        ContactRepository::open(store).map(Self::new)
    }

    /// Adds or updates the contact described by `form` after trimming it.
    pub fn save_form(&mut self, form: &ContactForm) -> RepoResult<Contact> {
        let form = form.trimmed();
        self.repo
            .upsert(form.name, form.phone, form.email, form.location)
    }

    /// Deletes the contact named `name`.
    pub fn remove(&mut self, name: &str) -> RepoResult<()> {
        self.repo.delete(name)
    }

    /// Loads one contact into form shape for editing.
    pub fn edit_form(&self, name: &str) -> Option<ContactForm> {
        self.repo.get(name).as_ref().map(ContactForm::from)
    }

    /// Lists all contacts, optionally ordered.
    pub fn list(&self, order: Option<SortOrder>) -> Vec<Contact> {
        apply_order(self.repo.get_all(), order)
    }

    /// Searches all contacts, then applies the optional ordering to matches.
    pub fn search(&self, query: &str, order: Option<SortOrder>) -> SearchResult<Vec<Contact>> {
        let matches = search(&self.repo.get_all(), query)?;
        Ok(apply_order(matches, order))
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn apply_order(contacts: Vec<Contact>, order: Option<SortOrder>) -> Vec<Contact> {
    match order {
        Some(order) => sort_by(&contacts, order.field, order.descending),
        None => contacts,
    }
}
