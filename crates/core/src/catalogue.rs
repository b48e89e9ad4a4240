//! The error catalogue: one immutable table mapping status codes to page content.
//!
//! Every producer (component pages, standalone files, the emission driver and
//! the HTTP server) reads from the same [`Catalogue`]. A lookup miss is never an
//! error: it resolves to the default `404` entry.

use serde::Serialize;

use crate::entries::BUILTIN_ENTRIES;
use crate::error::{CoreError, Result};

/// Code whose entry is served when a lookup misses.
pub const DEFAULT_CODE: &str = "404";

/// Display content for a single error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Three-digit HTTP status code, unique within a catalogue.
    pub code: &'static str,
    /// Short human-readable label.
    pub title: &'static str,
    /// One-sentence explanation of the condition.
    pub description: &'static str,
    /// Remediation steps, read top to bottom.
    pub troubleshooting: &'static [&'static str],
}

impl ErrorEntry {
    /// Numeric HTTP status for this entry.
    ///
    /// Codes are validated as three ASCII digits, so this only falls back to
    /// 404 for hand-built entries that bypassed [`Catalogue::new`].
    pub fn status(&self) -> u16 {
        self.code.parse().unwrap_or(404)
    }
}

/// Immutable, ordered error table.
#[derive(Debug, Clone, Copy)]
pub struct Catalogue {
    entries: &'static [ErrorEntry],
    default_index: usize,
}

static BUILTIN: Catalogue = Catalogue {
    entries: &BUILTIN_ENTRIES,
    default_index: 2,
};

impl Catalogue {
    /// The built-in gateway catalogue (401, 403, 404, 405, 500, 502, 503).
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Build a catalogue from a custom table.
    ///
    /// Entries must use three-digit codes in strictly ascending order and
    /// must include the default `404` entry.
    pub fn new(entries: &'static [ErrorEntry]) -> Result<Self> {
        for entry in entries {
            if !is_status_code(entry.code) {
                return Err(CoreError::InvalidCode(entry.code.to_string()));
            }
        }

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0].code, pair[1].code);
            if prev == next {
                return Err(CoreError::DuplicateCode(next.to_string()));
            }
            if prev > next {
                return Err(CoreError::Unordered {
                    previous: prev.to_string(),
                    code: next.to_string(),
                });
            }
        }

        let default_index = entries
            .iter()
            .position(|entry| entry.code == DEFAULT_CODE)
            .ok_or(CoreError::MissingDefault)?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// Resolve a code to its entry, falling back to the `404` entry.
    pub fn lookup(&self, code: &str) -> &'static ErrorEntry {
        self.get(code).unwrap_or_else(|| self.default_entry())
    }

    /// Exact lookup without fallback.
    pub fn get(&self, code: &str) -> Option<&'static ErrorEntry> {
        self.entries
            .binary_search_by(|entry| entry.code.cmp(code))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Whether `code` has its own entry.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The fallback entry.
    pub fn default_entry(&self) -> &'static ErrorEntry {
        &self.entries[self.default_index]
    }

    /// Every supported code in ascending order.
    pub fn all_codes(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    /// Every entry in ascending code order.
    pub fn entries(&self) -> &'static [ErrorEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up a code in the built-in catalogue.
pub fn lookup(code: &str) -> &'static ErrorEntry {
    Catalogue::builtin().lookup(code)
}

/// Supported codes of the built-in catalogue, ascending.
pub fn all_codes() -> Vec<&'static str> {
    Catalogue::builtin().all_codes().collect()
}

fn is_status_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit())
}
