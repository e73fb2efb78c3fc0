//! SQL Formatter - Core Formatting Logic
//!
//! Ties the pipeline together: protect placeholders, break lines, restore
//! placeholders. The formatter is total — every string input produces a
//! string output, and empty or whitespace-only input is returned unchanged.
//!
//! # Example
//!
//! ```
//! use sqlbench_format::{SqlFormatter, FormatterConfig};
//!
//! let formatter = SqlFormatter::new(FormatterConfig::default());
//! let formatted = formatter.format("select * from users where id={ID[]}");
//! assert!(formatted.contains("{ID[]}"));
//! ```

use crate::config::FormatterConfig;
use crate::linebreak;
use crate::placeholder;
use tracing::trace;

/// SQL Formatter with configurable options
#[derive(Debug, Clone, Default)]
pub struct SqlFormatter {
    config: FormatterConfig,
}

impl SqlFormatter {
    /// Creates a new formatter with the given configuration
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Creates a formatter with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns the current configuration
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats the given SQL string.
    ///
    /// Every parameter placeholder in the input reappears byte-identical in
    /// the output; the line breaker only ever sees tokenized text. The token
    /// table and its counter live on this call's stack, so concurrent calls
    /// need no coordination.
    ///
    /// Empty and whitespace-only input is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlbench_format::SqlFormatter;
    ///
    /// let formatter = SqlFormatter::with_defaults();
    /// let formatted = formatter.format("SELECT a, b FROM t WHERE x={1[1,0]}");
    /// assert!(formatted.contains("{1[1,0]}"));
    /// assert!(formatted.contains("\nFROM t"));
    /// ```
    pub fn format(&self, sql: &str) -> String {
        if sql.trim().is_empty() {
            return sql.to_string();
        }

        let (masked, tokens) = placeholder::protect(sql);
        trace!(placeholders = tokens.len(), "masked parameter placeholders");

        let broken = linebreak::break_lines(&masked, &self.config);
        placeholder::restore(&broken, &tokens)
    }
}

/// Formats SQL with default settings (convenience function)
///
/// # Example
///
/// ```
/// use sqlbench_format::format_sql;
///
/// let formatted = format_sql("select * from users");
/// assert!(formatted.contains("\nfrom users"));
/// ```
pub fn format_sql(sql: &str) -> String {
    SqlFormatter::with_defaults().format(sql)
}

/// Formats SQL with custom configuration (convenience function)
pub fn format_sql_with_config(sql: &str, config: FormatterConfig) -> String {
    SqlFormatter::new(config).format(sql)
}
