//! Append-only match log with change notification.

use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the broadcast channel behind [`MatchLog::subscribe`].
/// Slow subscribers past this many unread lines observe a lag error.
const LOG_CHANNEL_CAPACITY: usize = 64;

/// Ordered, append-only record of human-readable match events.
///
/// The engine appends; readers take snapshots or subscribe for new
/// lines. Subscribers cannot mutate the log, and the sequence only
/// grows within a match (reconfiguring starts a fresh log).
#[derive(Debug, Clone)]
pub struct MatchLog {
    lines: Vec<String>,
    tx: broadcast::Sender<String>,
}

impl MatchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(LOG_CHANNEL_CAPACITY);
        Self {
            lines: Vec::new(),
            tx,
        }
    }

    pub(crate) fn append(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!(line = %line, "Log append");
        // Send fails only when nobody is subscribed.
        let _ = self.tx.send(line.clone());
        self.lines.push(line);
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }

    /// Snapshot of all lines appended so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full log as one newline-joined string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Subscribes to lines appended after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for MatchLog {
    fn default() -> Self {
        Self::new()
    }
}
