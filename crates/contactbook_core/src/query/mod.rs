//! Read-only queries over contact snapshots.
//!
//! # Responsibility
//! - Filter and order snapshots handed out by the repository.
//!
//! # Invariants
//! - Every function takes a snapshot and returns a new `Vec`; nothing here
//!   holds state or mutates the repository.

pub mod search;
pub mod sort;
