//! Console input/output boundary.
//!
//! The interpreter never touches stdin/stdout itself; it goes through these
//! two traits so embedders and tests can supply their own ends.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait OutputProvider {
    fn write(&mut self, text: &str);
}

pub trait InputProvider {
    /// Returns the next line of input, or `None` when there is none.
    fn read_input(&mut self, prompt: &str) -> Option<String>;
}

/// Writes straight to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl OutputProvider for ConsoleOutput {
    fn write(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::warn!(error = %e, "failed to write to stdout");
        }
    }
}

/// Reads one line per call from stdin, without the line terminator.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl InputProvider for ConsoleInput {
    fn read_input(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }
}

/// Collects everything written to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferedOutput {
    pub text: String,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

impl OutputProvider for BufferedOutput {
    fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Hands out prepared answers in order and remembers the prompts it saw.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl QueuedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueuedInput {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

impl InputProvider for QueuedInput {
    fn read_input(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front()
    }
}
