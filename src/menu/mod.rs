//! Interactive menu loop.
//!
//! Presents the numbered menu, dispatches to contact operations, and owns
//! the session lifetime: the loop ends on the Exit choice or when input
//! closes.

use crate::console::Console;
use crate::models::ContactBook;
use crate::ops::{ContactOps, Flow};
use crate::storage::ContactStore;
use std::io;
use std::sync::Arc;

/// The interactive dispatch loop.
pub struct MenuLoop {
    ops: ContactOps,
}

impl MenuLoop {
    /// Create a menu loop persisting through the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            ops: ContactOps::new(store),
        }
    }

    /// Run the loop until the user exits or input closes.
    ///
    /// The book is mutated in place by the operations; the caller keeps
    /// ownership and can inspect the final state after the loop ends.
    pub async fn run(
        &self,
        console: &mut dyn Console,
        contacts: &mut ContactBook,
    ) -> io::Result<()> {
        loop {
            console.print("");
            console.print("1. Add Contact");
            console.print("2. Search Contact");
            console.print("3. Update Contact");
            console.print("4. Delete Contact");
            console.print("5. Exit");

            let choice = match console.prompt("Choose an option: ").await? {
                Some(choice) => choice,
                None => break,
            };

            tracing::debug!("Menu choice: {:?}", choice);

            let flow = match choice.as_str() {
                "1" => self.ops.add(console, contacts).await?,
                "2" => self.ops.search(console, contacts).await?,
                "3" => self.ops.update(console, contacts).await?,
                "4" => self.ops.delete(console, contacts).await?,
                "5" => {
                    console.print("Exiting contact book.");
                    Flow::Quit
                }
                _ => {
                    console.print("Error: Invalid choice. Please try again.");
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }
}
