//! Contact model: the stored phone/email record for one name.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A single entry in the contact book.
///
/// Fields are plain strings in the stored form: formats are enforced when a
/// contact is created or updated, and stored data is trusted as-is on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Phone number, exactly ten digits at the time of write
    pub phone: String,

    /// Email address, matching the address pattern at the time of write
    pub email: String,
}

impl Contact {
    /// Create a Contact from validated value objects.
    pub fn new(phone: PhoneNumber, email: EmailAddress) -> Self {
        Self {
            phone: phone.into_inner(),
            email: email.into_inner(),
        }
    }
}
