use serde::Serialize;
use std::collections::VecDeque;

/// How a log line should be presented. Styling is left to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub text: String,
}

/// Append-only captain's log.
///
/// Unbounded unless a capacity is given, in which case the oldest entries
/// are dropped. `written` counts every entry ever appended, so a reader can
/// pick up exactly the entries added since it last looked.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
    #[serde(skip)]
    capacity: Option<usize>,
    written: u64,
}

impl MessageLog {
    pub fn new(capacity: Option<usize>) -> Self {
        MessageLog {
            entries: VecDeque::new(),
            capacity,
            written: 0,
        }
    }

    pub fn push(&mut self, severity: Severity, text: impl Into<String>) {
        self.entries.push_back(LogEntry {
            severity,
            text: text.into(),
        });
        self.written += 1;
        if let Some(cap) = self.capacity {
            while self.entries.len() > cap {
                self.entries.pop_front();
            }
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Severity::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Severity::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(Severity::Warning, text);
    }

    pub fn danger(&mut self, text: impl Into<String>) {
        self.push(Severity::Danger, text);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries ever appended, including dropped ones.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Entries appended after the reader's mark (a previous `written()` value)
    /// that are still retained.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &LogEntry> {
        let new = self.written.saturating_sub(mark) as usize;
        let skip = self.entries.len().saturating_sub(new);
        self.entries.iter().skip(skip)
    }

    /// Whether any retained entry contains the given text.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }
}
