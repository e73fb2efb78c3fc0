//! SQL Formatting with Parameter Placeholder Protection
//!
//! This crate formats SQL text for readability while guaranteeing that
//! parameter placeholders of the form `{NAME[options]}` pass through
//! byte-identical, even though the underlying line breaker knows nothing
//! about them.
//!
//! # Quick Start
//!
//! ```
//! use sqlbench_format::{format_sql, SqlFormatter, FormatterConfig};
//!
//! // Simple formatting with defaults
//! let formatted = format_sql("select * from users where id={ID[]}");
//! assert!(formatted.contains("{ID[]}"));
//!
//! // Custom configuration
//! let config = FormatterConfig::default()
//!     .with_indent_size(4)
//!     .with_uppercase_keywords(true);
//! let formatter = SqlFormatter::new(config);
//! let formatted = formatter.format("select * from users");
//! assert!(formatted.contains("SELECT"));
//! ```

mod config;
mod format;
mod linebreak;
mod placeholder;


pub use config::FormatterConfig;
pub use format::{SqlFormatter, format_sql, format_sql_with_config};
pub use placeholder::{TokenTable, protect, restore};
