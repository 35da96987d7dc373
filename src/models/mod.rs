//! Data models for the persisted contact book.
//!
//! This module contains the stored form of the data: the plain-string
//! `Contact` record and the name-keyed `ContactBook` that wraps the full
//! collection. Validation lives in `crate::domain`; these types only carry
//! data that already passed it (or came straight off disk).

pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::Contact;
