//! ContactBook model: the name-keyed collection persisted to disk.

use super::contact::Contact;
use crate::domain::ContactName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full set of contacts, keyed by name.
///
/// Serializes transparently as the top-level JSON object
/// `{ name: { "phone": ..., "email": ... }, ... }`. Inserting goes through
/// a validated [`ContactName`], so no in-process mutation can create an
/// empty key; deserialization accepts keys as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    /// Create an empty contact book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True if the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// True if a contact with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Look up a contact by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Look up a contact by exact name for in-place mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Insert a contact under a validated name, returning the previous entry
    /// if one existed.
    pub fn insert(&mut self, name: ContactName, contact: Contact) -> Option<Contact> {
        self.contacts.insert(name.into_inner(), contact)
    }

    /// Remove a contact by exact name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    /// Iterate over (name, contact) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts
            .iter()
            .map(|(name, contact)| (name.as_str(), contact))
    }
}
