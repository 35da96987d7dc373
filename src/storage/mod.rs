//! Persistence of the contact book.
//!
//! The `ContactStore` trait abstracts where the book lives, enabling
//! different implementations (JSON file, mock). The file-backed store keeps
//! its blocking I/O off the async runtime via `tokio::task::spawn_blocking`.

mod json_file;
mod traits;

pub use json_file::JsonFileStore;
pub use traits::ContactStore;
