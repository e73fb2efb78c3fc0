//! Parameter Placeholder Protection
//!
//! sqlbench queries carry parameter placeholders of the form `{NAME}` or
//! `{NAME[options]}` — a brace-delimited span with at most one bracketed
//! sub-span and no nested braces. The line breaker would happily split a
//! placeholder like `{1[1,0]}` at its inner comma, so before formatting each
//! placeholder is swapped for a synthetic token, and after formatting every
//! token is swapped back verbatim.
//!
//! Unbalanced or nested braces simply fail to match the grammar and flow
//! through the formatter as ordinary text.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered token -> original placeholder text mapping for one format call.
///
/// Built by [`protect`] and fully consumed by [`restore`]; never outlives a
/// single formatting operation.
pub type TokenTable = Vec<(String, String)>;

// Brace-delimited span, optionally containing one bracket-delimited sub-span.
// Matches `{ID}`, `{SELECT[]}`, `{1[1,0]}`, `{STA['']}`; rejects nested braces
// and second bracket spans, which are then treated as plain text.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[^{}\[\]]*(?:\[[^\[\]]*\])?[^{}\[\]]*\}").expect("valid regex")
});

/// Replaces every placeholder in `sql` with a synthetic token.
///
/// Tokens have the form `__PARAM_TOKEN_<i>__` with `i` counting up from zero
/// per call. The token alphabet cannot arise from the placeholder grammar or
/// from SQL keywords, so a token never re-matches during formatting.
///
/// Returns the masked text together with the token table needed by
/// [`restore`].
///
/// # Example
///
/// ```
/// use sqlbench_format::protect;
///
/// let (masked, table) = protect("WHERE id = {ID[0]}");
/// assert_eq!(masked, "WHERE id = __PARAM_TOKEN_0__");
/// assert_eq!(table[0].0, "__PARAM_TOKEN_0__");
/// assert_eq!(table[0].1, "{ID[0]}");
/// ```
pub fn protect(sql: &str) -> (String, TokenTable) {
    let mut table = TokenTable::new();
    let mut counter = 0usize;

    let masked = PLACEHOLDER_REGEX
        .replace_all(sql, |caps: &regex::Captures| {
            let token = format!("__PARAM_TOKEN_{counter}__");
            counter += 1;
            table.push((token.clone(), caps[0].to_string()));
            token
        })
        .into_owned();

    (masked, table)
}

/// Replaces each token in `formatted` with its original placeholder text.
///
/// Every token is unique within a call and occurs exactly once, so each entry
/// is substituted once and the table is fully consumed.
pub fn restore(formatted: &str, table: &TokenTable) -> String {
    let mut result = formatted.to_string();
    for (token, original) in table {
        result = result.replacen(token.as_str(), original, 1);
    }
    result
}
