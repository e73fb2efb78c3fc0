//! Keyword-Based Line Breaking
//!
//! The naive half of the formatter: collapse whitespace, break before clause
//! keywords (and after `SELECT`, so each select-list item gets its own line),
//! split after commas, tighten parentheses, normalize comparison operators,
//! then re-indent line by line.
//!
//! This is a heuristic, not a SQL parse. A keyword inside a string literal
//! still triggers a break; callers accept that in exchange for a formatter
//! that never fails. Placeholder safety is handled upstream by tokenization,
//! so nothing here needs to know about `{NAME[...]}` spans.

use crate::config::FormatterConfig;
use regex::Regex;
use std::sync::LazyLock;

static HSPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

// Multi-word phrases first so `ORDER BY` wins over `OR` and `LEFT JOIN` over
// `JOIN` (the regex crate picks the leftmost alternative that matches).
static BREAK_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(left[ \t]+join|right[ \t]+join|inner[ \t]+join|outer[ \t]+join|order[ \t]+by|group[ \t]+by|select|from|where|having|join|union|except|intersect|and|or)\b",
    )
    .expect("valid regex")
});

static SELECT_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(select)\b[ \t]*").expect("valid regex"));

static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",[ \t]*").expect("valid regex"));

static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").expect("valid regex"));

static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").expect("valid regex"));

// Horizontal whitespace only: an operator must never swallow a newline that
// an earlier pass inserted.
static SYMBOL_OP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*(<>|!=|<=|>=|=|<|>)[ \t]*").expect("valid regex"));

static WORD_OP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[ \t]*\b(not[ \t]+in|is[ \t]+not|between|like|in|is)\b[ \t]*")
        .expect("valid regex")
});

// Lines starting with one of these are clause heads and stay unindented;
// `AND`/`OR` lines and continuation lines get one indent level.
const CLAUSE_STARTERS: &[&str] = &[
    "select", "with", "from", "where", "having", "union", "except", "intersect", "order by",
    "group by", "left join", "right join", "inner join", "outer join", "join",
];

/// Breaks `sql` into clause-per-line form and re-indents it.
///
/// Expects placeholder-tokenized input; returns text with no leading or
/// trailing whitespace and no empty lines.
pub(crate) fn break_lines(sql: &str, config: &FormatterConfig) -> String {
    let keyword_case = |kw: &str| {
        if config.uppercase_keywords() {
            kw.to_ascii_uppercase()
        } else {
            kw.to_string()
        }
    };

    let collapsed = HSPACE_RUN.replace_all(sql, " ");
    let text = collapsed.trim();

    let text = BREAK_KEYWORD
        .replace_all(text, |caps: &regex::Captures| {
            format!("\n{}", keyword_case(&caps[1]))
        })
        .into_owned();
    let text = SELECT_LIST
        .replace_all(&text, |caps: &regex::Captures| {
            format!("{}\n", keyword_case(&caps[1]))
        })
        .into_owned();
    let text = COMMA.replace_all(&text, ",\n").into_owned();
    let text = OPEN_PAREN.replace_all(&text, "(").into_owned();
    let text = CLOSE_PAREN.replace_all(&text, ")").into_owned();
    let text = SYMBOL_OP.replace_all(&text, " $1 ").into_owned();
    let text = WORD_OP
        .replace_all(&text, |caps: &regex::Captures| {
            format!(" {} ", keyword_case(&caps[1]))
        })
        .into_owned();

    let indent = " ".repeat(config.indent_size());
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // The first line begins the statement and is never indented.
        if lines.is_empty() || is_clause_start(line) {
            lines.push(line.to_string());
        } else {
            lines.push(format!("{indent}{line}"));
        }
    }
    lines.join("\n")
}

fn is_clause_start(line: &str) -> bool {
    CLAUSE_STARTERS
        .iter()
        .any(|kw| starts_with_keyword(line, kw))
}

/// Case-insensitive prefix match on a whole keyword or phrase: the character
/// after the match must not continue an identifier.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    let Some(head) = line.get(..keyword.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(keyword) {
        return false;
    }
    match line[keyword.len()..].chars().next() {
        None => true,
        Some(c) => !(c.is_alphanumeric() || c == '_'),
    }
}
