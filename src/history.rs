// history.rs

use std::collections::VecDeque;

/// Fixed capacity of the operation log. Not configurable.
pub const MAX_HISTORY_SIZE: usize = 1000;

/// Sink for formatted operation records. The calculator only knows this
/// capability, so tests can substitute their own recorder.
pub trait History {
    /// Appends a record, evicting the oldest one first when the log is full.
    /// Always succeeds.
    fn add_entry(&mut self, operation: String);

    /// Returns the most recent `min(count, len)` records in chronological
    /// (oldest to newest) order. Never mutates the log.
    fn get_last_operations(&self, count: usize) -> Vec<String>;
}

pub struct InMemoryHistory {
    entries: VecDeque<String>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for InMemoryHistory {
    fn add_entry(&mut self, operation: String) {
        if self.entries.len() >= MAX_HISTORY_SIZE {
            self.entries.pop_front();
        }
        self.entries.push_back(operation);
    }

    fn get_last_operations(&self, count: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).cloned().collect()
    }
}
