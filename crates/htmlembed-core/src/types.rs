//! Core type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// `extern <type> <name> = <literal>;` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Declared type (e.g. `String`)
    pub type_name: String,
    /// Variable name
    pub name: String,
    /// Quoted, escaped and null-terminated literal
    pub literal: String,
}

impl Declaration {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            literal: literal.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "extern {} {} = {};",
            self.type_name, self.name, self.literal
        )
    }
}

/// Size report for a single compaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompactionStats {
    /// Input length in bytes
    pub original_len: usize,
    /// Output length in bytes
    pub compacted_len: usize,
}

impl CompactionStats {
    pub fn new(original_len: usize, compacted_len: usize) -> Self {
        Self {
            original_len,
            compacted_len,
        }
    }

    /// Percentage of bytes removed (0 for empty input)
    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        let removed = self.original_len.saturating_sub(self.compacted_len);
        removed as f64 / self.original_len as f64 * 100.0
    }
}

/// Check that `name` is a C identifier: `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
