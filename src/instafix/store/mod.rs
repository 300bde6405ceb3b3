//! # Storage Layer
//!
//! Persisted state is a handful of independent, keyed string entries, the same
//! model a browser's local storage offers. The [`Storage`] trait is that model;
//! everything above it (saved fixes, theme) serializes its own values.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production storage
//!   - One file per key: `{key}.json` inside the data directory
//!   - Writes replace the whole file
//!
//! - [`memory::InMemoryStorage`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/instafix/
//! ├── instantFixSaved.json   # Saved fixes (JSON array, newest first)
//! ├── theme.json             # "light" or "dark"
//! └── config.json            # Model and endpoint configuration
//! ```
//!
//! There is no versioning and no cross-process locking: the last writer wins.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the saved fixes are kept.
pub const SAVED_FIXES_KEY: &str = "instantFixSaved";

/// Key under which the theme preference is kept.
pub const THEME_KEY: &str = "theme";

/// Abstract keyed string storage.
///
/// Reads and writes are synchronous and replace the whole value for a key.
pub trait Storage {
    /// Read the raw value for `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
