//! Insertion-ordered contact collection and its persisted shape.
//!
//! # Invariants
//! - Names are unique; `upsert` on an existing name replaces in place.
//! - Iteration order is insertion order; removals keep the rest in order.
//! - Serialized form is one object `{ name: { Phone, Email, Location } }`.

use crate::model::contact::Contact;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// Keyed set of contacts, ordered by first insertion.
///
/// Meant to stay small: lookups scan linearly and the repository clones
/// the whole set per mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCollection {
    entries: Vec<Contact>,
}

impl ContactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|index| &self.entries[index])
    }

    /// Inserts `contact` or replaces the entry with the same name.
    ///
    /// Returns the replaced entry, if any. A replaced entry keeps its slot.
    pub fn upsert(&mut self, contact: Contact) -> Option<Contact> {
        match self.position(&contact.name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], contact)),
            None => {
                self.entries.push(contact);
                None
            }
        }
    }

    /// Removes the entry named `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|index| self.entries.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.entries.iter()
    }

    /// Returns an owned copy of all entries in insertion order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.entries.clone()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|contact| contact.name == name)
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Contact> for ContactCollection {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut collection = Self::new();
        for contact in iter {
            collection.upsert(contact);
        }
        collection
    }
}

/// Value half of one persisted entry. Keys match the legacy file layout.
#[derive(Serialize)]
struct StoredDetailsRef<'a> {
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Location")]
    location: &'a str,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredDetails {
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Location")]
    location: String,
}

impl Serialize for ContactCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for contact in &self.entries {
            map.serialize_entry(
                contact.name.as_str(),
                &StoredDetailsRef {
                    phone: &contact.phone,
                    email: &contact.email,
                    location: &contact.location,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContactCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ContactCollection;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of contact name to {Phone, Email, Location}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut collection = ContactCollection::new();
        // Duplicate keys resolve like an upsert: last value wins, first slot kept.
        while let Some((name, details)) = access.next_entry::<String, StoredDetails>()? {
            collection.upsert(Contact {
                name,
                phone: details.phone,
                email: details.email,
                location: details.location,
            });
        }
        Ok(collection)
    }
}
