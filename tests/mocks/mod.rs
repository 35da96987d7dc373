//! Shared test doubles for the contact book test suites.

pub mod mock_contact_store;
pub mod scripted_console;

pub use mock_contact_store::MockContactStore;
pub use scripted_console::ScriptedConsole;
