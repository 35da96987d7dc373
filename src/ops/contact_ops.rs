//! Add, search, update, and delete flows for the contact book.

use crate::console::Console;
use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::models::{Contact, ContactBook};
use crate::ops::Flow;
use crate::storage::ContactStore;
use std::io;
use std::sync::Arc;

/// Interactive operations over the contact book.
///
/// Holds the store used to persist the book after each successful mutation.
/// The book itself is passed in by the caller and mutated in place.
pub struct ContactOps {
    store: Arc<dyn ContactStore>,
}

impl ContactOps {
    /// Create new contact operations.
    ///
    /// # Arguments
    /// * `store` - ContactStore used to persist the book after mutations
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Add a new contact.
    ///
    /// Checks run in order: the name must be non-empty and must not collide
    /// with an existing entry before phone and email are even prompted for.
    /// The first failure prints an error and stops the whole flow.
    pub async fn add(
        &self,
        console: &mut dyn Console,
        contacts: &mut ContactBook,
    ) -> io::Result<Flow> {
        let input = match console.prompt("Enter contact name: ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let name = match ContactName::new(input) {
            Ok(name) => name,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };
        if contacts.contains(name.as_str()) {
            console.print(&format!("Error: A contact named '{}' already exists.", name));
            return Ok(Flow::Continue);
        }

        let input = match console.prompt("Enter contact phone number (10 digits): ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let phone = match PhoneNumber::new(input) {
            Ok(phone) => phone,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };

        let input = match console.prompt("Enter contact email: ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let email = match EmailAddress::new(input) {
            Ok(email) => email,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };

        contacts.insert(name.clone(), Contact::new(phone, email));
        self.persist(console, contacts).await;
        console.print(&format!("Contact {} added successfully.", name));
        tracing::info!("Added contact '{}'", name);

        Ok(Flow::Continue)
    }

    /// Look up a contact by exact name and display it.
    pub async fn search(
        &self,
        console: &mut dyn Console,
        contacts: &ContactBook,
    ) -> io::Result<Flow> {
        let input = match console.prompt("Enter the name of the contact to search: ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let name = match ContactName::new(input) {
            Ok(name) => name,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };

        match contacts.get(name.as_str()) {
            Some(contact) => {
                console.print(&format!("Name: {}", name));
                console.print(&format!("Phone: {}", contact.phone));
                console.print(&format!("Email: {}", contact.email));
            }
            None => {
                console.print(&format!("Error: No contact found with the name '{}'.", name));
            }
        }

        Ok(Flow::Continue)
    }

    /// Update an existing contact's phone and/or email.
    ///
    /// Empty input keeps the current value. A non-empty value that fails
    /// validation aborts the whole update with nothing applied or saved; an
    /// invalid phone aborts before the email is prompted for.
    pub async fn update(
        &self,
        console: &mut dyn Console,
        contacts: &mut ContactBook,
    ) -> io::Result<Flow> {
        let input = match console.prompt("Enter the name of the contact to update: ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let name = match ContactName::new(input) {
            Ok(name) => name,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };

        let current = match contacts.get(name.as_str()) {
            Some(contact) => contact.clone(),
            None => {
                console.print(&format!("Error: No contact found with the name '{}'.", name));
                return Ok(Flow::Continue);
            }
        };

        let input = match console
            .prompt(&format!("Enter new phone number (current: {}): ", current.phone))
            .await?
        {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let new_phone = if input.is_empty() {
            None
        } else {
            match PhoneNumber::new(input) {
                Ok(phone) => Some(phone),
                Err(err) => {
                    console.print(&format!("Error: {}", err));
                    return Ok(Flow::Continue);
                }
            }
        };

        let input = match console
            .prompt(&format!("Enter new email (current: {}): ", current.email))
            .await?
        {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let new_email = if input.is_empty() {
            None
        } else {
            match EmailAddress::new(input) {
                Ok(email) => Some(email),
                Err(err) => {
                    console.print(&format!("Error: {}", err));
                    return Ok(Flow::Continue);
                }
            }
        };

        if let Some(contact) = contacts.get_mut(name.as_str()) {
            if let Some(phone) = new_phone {
                contact.phone = phone.into_inner();
            }
            if let Some(email) = new_email {
                contact.email = email.into_inner();
            }
        }

        self.persist(console, contacts).await;
        console.print(&format!("Contact {} updated successfully.", name));
        tracing::info!("Updated contact '{}'", name);

        Ok(Flow::Continue)
    }

    /// Delete a contact by exact name.
    pub async fn delete(
        &self,
        console: &mut dyn Console,
        contacts: &mut ContactBook,
    ) -> io::Result<Flow> {
        let input = match console.prompt("Enter the name of the contact to delete: ").await? {
            Some(input) => input,
            None => return Ok(Flow::Quit),
        };
        let name = match ContactName::new(input) {
            Ok(name) => name,
            Err(err) => {
                console.print(&format!("Error: {}", err));
                return Ok(Flow::Continue);
            }
        };

        match contacts.remove(name.as_str()) {
            Some(_) => {
                self.persist(console, contacts).await;
                console.print(&format!("Contact {} deleted successfully.", name));
                tracing::info!("Deleted contact '{}'", name);
            }
            None => {
                console.print(&format!("Error: No contact found with the name '{}'.", name));
            }
        }

        Ok(Flow::Continue)
    }

    /// Write the book through the store, reporting failures to the user.
    ///
    /// A failed save is not rolled back: the in-memory book keeps the
    /// mutation and stays ahead of the file until the next successful save.
    async fn persist(&self, console: &mut dyn Console, contacts: &ContactBook) {
        if let Err(err) = self.store.save(contacts).await {
            console.print(&format!("Error: {}", err));
            tracing::warn!("Could not persist contact book: {}", err);
        }
    }
}
