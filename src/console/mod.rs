//! Interactive console seam.
//!
//! Operations talk to the user through the `Console` trait so tests can
//! script input and capture output. `StdioConsole` is the terminal-backed
//! implementation used by the binary.

mod stdio;

pub use stdio::StdioConsole;

use async_trait::async_trait;
use std::io;

/// Prompt-and-print surface for the interactive loop.
#[async_trait]
pub trait Console: Send {
    /// Print `message` without a trailing newline, then read one line.
    ///
    /// Returns `Ok(None)` when input is closed. Returned lines are trimmed
    /// of surrounding whitespace.
    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Print one line of user-facing output.
    fn print(&mut self, line: &str);
}
