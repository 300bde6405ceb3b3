use super::Storage;
use crate::error::{FixError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail, to exercise write-error paths.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(FixError::Store(format!("Write to {} rejected", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{FixPayload, FixResult};

    pub fn payload(tag: &str) -> FixPayload {
        FixPayload {
            insight: format!("Insight for {}", tag),
            plan: format!("Plan for {}", tag),
            actions: vec![
                format!("{} step 1", tag),
                format!("{} step 2", tag),
                format!("{} step 3", tag),
            ],
        }
    }

    pub fn fix(tag: &str) -> FixResult {
        FixResult::new(tag, payload(tag))
    }
}
