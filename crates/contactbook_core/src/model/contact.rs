//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical four-field contact record.
//! - Name the columns a caller can search or order by.
//!
//! # Invariants
//! - `name` is the primary key and is compared exactly (case-sensitive).
//! - A contact accepted by the repository has all four fields non-empty.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One contact entry in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    /// Unique key of the entry.
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Contact {
    /// Creates a contact without validating field contents.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            location: location.into(),
        }
    }

    /// Validates that every field carries a value.
    ///
    /// Only zero-length values count as empty; whitespace is a value.
    ///
    /// # Errors
    /// - Returns [`ContactValidationError::EmptyFields`] listing every empty
    ///   field in column order.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let empty = ContactField::ALL
            .into_iter()
            .filter(|field| field.value(self).is_empty())
            .collect::<Vec<_>>();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(ContactValidationError::EmptyFields(empty))
        }
    }
}

/// Column of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Location,
}

impl ContactField {
    /// All columns in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Location,
    ];

    /// Returns the stable lowercase identifier of this column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Location => "location",
        }
    }

    /// Returns the human-facing column heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Location => "Location",
        }
    }

    /// Projects this column's value out of `contact`.
    pub fn value(self, contact: &Contact) -> &str {
        match self {
            Self::Name => contact.name.as_str(),
            Self::Phone => contact.phone.as_str(),
            Self::Email => contact.email.as_str(),
            Self::Location => contact.location.as_str(),
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Phone => 1,
            Self::Email => 2,
            Self::Location => 3,
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = FieldParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "location" => Ok(Self::Location),
            _ => Err(FieldParseError(value.to_string())),
        }
    }
}

/// Unknown column identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError(pub String);

impl Display for FieldParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown contact field `{}`; expected name|phone|email|location",
            self.0
        )
    }
}

impl Error for FieldParseError {}

/// Contact write rejected before reaching the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// One or more required fields were empty.
    EmptyFields(Vec<ContactField>),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFields(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "all fields are required; empty: {names}")
            }
        }
    }
}

impl Error for ContactValidationError {}
