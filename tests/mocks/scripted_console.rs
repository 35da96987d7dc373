use async_trait::async_trait;
use contact_book::console::Console;
use std::collections::VecDeque;
use std::io;

/// Console double that replays scripted input and captures output.
///
/// Prompt messages are recorded alongside printed lines so tests can assert
/// the whole conversation. When the script runs out, prompts report closed
/// input, which operations treat as end-of-session.
#[allow(dead_code)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    /// Create a console that replays the given lines in order.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// All prompt messages issued so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// All lines printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True if some printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of printed lines equal to `line`.
    pub fn count_printed(&self, line: &str) -> usize {
        self.output.iter().filter(|out| *out == line).count()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.to_string());
        // Same contract as the terminal console: lines come back trimmed
        Ok(self.input.pop_front().map(|line| line.trim().to_string()))
    }

    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
