//! Input/output abstractions
//!
//! The interactive shell talks to the player only through these traits, so
//! a whole session can be driven from a script in tests.

use std::io::{self, BufRead, Write};

/// Trait for reading player input
pub trait InputReader {
    /// Show a prompt and read one line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing output to the player
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
#[derive(Debug, Default)]
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

pub mod test_utils {
    //! Scripted input and captured output for driving the shell in tests.

    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of input lines, then reports end of input.
    #[derive(Debug, Default)]
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.responses.pop_front())
        }
    }

    /// Collects everything written, one entry per call.
    #[derive(Debug, Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything written so far as one string.
        pub fn text(&self) -> String {
            self.messages.concat()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.messages.iter().any(|m| m.contains(needle))
        }
    }

    impl OutputWriter for MockOutput {
        fn write(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }
}
