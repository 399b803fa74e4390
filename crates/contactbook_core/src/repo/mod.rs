//! Repository layer over the contact store.
//!
//! # Responsibility
//! - Own the in-memory contact collection and its mutation rules.
//! - Keep storage details behind the `ContactStore` seam.
//!
//! # Invariants
//! - Repository writes enforce `Contact::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to store errors.

pub mod contact_repo;
