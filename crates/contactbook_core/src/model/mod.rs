//! Domain model for the address book.
//!
//! # Responsibility
//! - Define the contact record and the ordered collection that owns records.
//! - Own the persisted wire shape of the collection.
//!
//! # Invariants
//! - Every contact is identified by its exact `name`.
//! - The collection never holds two entries with the same name.

pub mod collection;
pub mod contact;
