//! Terminal console backed by stdin/stdout.

use super::Console;
use async_trait::async_trait;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Console over the process stdin/stdout.
///
/// Prompts go to stdout without a trailing newline and are flushed, so input
/// is typed on the same line. Reads await `tokio::io::stdin`, which keeps the
/// runtime free while the user thinks.
pub struct StdioConsole {
    reader: BufReader<Stdin>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn print(&mut self, line: &str) {
        println!("{}", line);
    }
}
