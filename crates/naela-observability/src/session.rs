//! Session correlation for log output.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::Span;

/// Identifier tying together every log line of one storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier (16 hex digits).
    pub fn generate() -> Self {
        Self(format!("{:016x}", next_id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Span that tags enclosed events with this session.
    pub fn span(&self) -> Span {
        tracing::info_span!("session", id = %self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Not cryptographically secure; only needs to be distinct per process run.
fn next_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let count = COUNTER.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
    time ^ count.wrapping_mul(0x517cc1b727220a95)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 16);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionId::new("abc").to_string(), "abc");
    }
}
