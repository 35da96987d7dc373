//! Interactive contact operations.
//!
//! Each operation prompts through the `Console` seam, validates input with
//! the domain types, mutates the in-memory `ContactBook`, and persists
//! through the `ContactStore` on success. Error paths print a message and
//! leave both the book and the file untouched.

mod contact_ops;

pub use contact_ops::ContactOps;

/// Control flow signal returned by interactive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping.
    Continue,

    /// Input is closed; leave the loop cleanly.
    Quit,
}
