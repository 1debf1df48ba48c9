//! LogState - Status Messages with Ring Buffer
//!
//! Backs the log panel, the user-visible status region where fetch failures
//! and selection changes are reported.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Debug => gpui::rgba(0x6b7280ff), // Gray
            LogLevel::Info => gpui::rgba(0x22c55eff),  // Green
            LogLevel::Warn => gpui::rgba(0xf59e0bff),  // Amber
            LogLevel::Error => gpui::rgba(0xef4444ff), // Red
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for status messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
    /// Hide entries below `Warn`
    pub problems_only: bool,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
            problems_only: false,
        }
    }

    /// Push a new log entry, evicting the oldest at capacity
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Push a log entry with current timestamp
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    /// Entries honoring the `problems_only` filter, newest first
    pub fn visible(&self, limit: usize) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.problems_only || e.level >= LogLevel::Warn)
            .take(limit)
            .collect()
    }

    /// Number of warnings and errors currently buffered
    pub fn problem_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level >= LogLevel::Warn)
            .count()
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

    pub fn toggle_problems_only(&mut self) {
        self.problems_only = !self.problems_only;
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_eviction() {
        let mut logs = LogState::new(3);
        for i in 0..5 {
            logs.push_now(LogLevel::Info, format!("m{i}"));
        }
        assert_eq!(logs.len(), 3);
        let newest: Vec<_> = logs.visible(10).iter().map(|e| e.message.clone()).collect();
        assert_eq!(newest, vec!["m4", "m3", "m2"]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut logs = LogState::new(0);
        logs.push_now(LogLevel::Error, "dropped");
        assert!(logs.is_empty());
    }

    #[test]
    fn test_problems_only_filter() {
        let mut logs = LogState::new(10);
        logs.push_now(LogLevel::Info, "page 1 loaded");
        logs.push_now(LogLevel::Error, "page 2 failed");
        logs.push_now(LogLevel::Debug, "stale page 3");
        assert_eq!(logs.problem_count(), 1);

        logs.toggle_problems_only();
        let visible = logs.visible(10);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "page 2 failed");
    }
}
