//! Formatter Configuration
//!
//! Configurable options for SQL formatting: indentation width and keyword
//! casing.
//!
//! # Example
//!
//! ```
//! use sqlbench_format::FormatterConfig;
//!
//! let config = FormatterConfig::default()
//!     .with_indent_size(4)
//!     .with_uppercase_keywords(true);
//!
//! assert_eq!(config.indent_size(), 4);
//! assert!(config.uppercase_keywords());
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for SQL formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Number of spaces for each indentation level
    indent_size: usize,
    /// Whether to rewrite matched SQL keywords to uppercase (SELECT vs select)
    uppercase_keywords: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            // Keyword case is preserved by default; the line breaker only
            // inserts whitespace unless this is switched on.
            uppercase_keywords: false,
        }
    }
}

impl FormatterConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces)
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Sets whether to uppercase SQL keywords
    pub fn with_uppercase_keywords(mut self, uppercase: bool) -> Self {
        self.uppercase_keywords = uppercase;
        self
    }

    /// Returns the indentation size
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Returns whether keywords should be uppercased
    pub fn uppercase_keywords(&self) -> bool {
        self.uppercase_keywords
    }
}
