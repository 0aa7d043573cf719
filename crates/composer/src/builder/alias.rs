//! Short table aliases derived from pascal-case table names.

use crate::ast::join::TableJoin;

const TOKEN_PREFIX_LEN: usize = 3;

/// Splits a table name into pascal-case tokens.
///
/// A token ends at a lowercase to uppercase transition, before the last
/// capital of an acronym that is followed by lowercase (`HTTPServer` gives
/// `HTTP`, `Server`), and at any non-letter character. Non-letters are
/// dropped.
pub fn pascal_case_tokens(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if !ch.is_alphabetic() {
            if let Some(s) = start.take() {
                tokens.push(&name[s..pos]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(pos);
            continue;
        };

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);
        let lower_to_upper = prev.is_lowercase() && ch.is_uppercase();
        let acronym_end = prev.is_uppercase()
            && ch.is_uppercase()
            && next.is_some_and(|n| n.is_lowercase());

        if lower_to_upper || acronym_end {
            tokens.push(&name[s..pos]);
            start = Some(pos);
        }
    }

    if let Some(s) = start {
        tokens.push(&name[s..]);
    }
    tokens
}

/// Concatenates the first three characters of every pascal-case token.
pub fn abbreviate(name: &str) -> Option<String> {
    let tokens = pascal_case_tokens(name);
    if tokens.is_empty() {
        return None;
    }
    Some(
        tokens
            .iter()
            .flat_map(|t| t.chars().take(TOKEN_PREFIX_LEN))
            .collect(),
    )
}

/// Allocates an alias for a new join to `right_table`.
///
/// The suffix is one more than the number of joins already made to the same
/// right table, so repeated joins to `RightTable` become `RigTab1`,
/// `RigTab2`, ... If a different table abbreviates to an alias already in
/// use, the suffix keeps counting until it is free.
pub fn allocate_alias(right_table: &str, existing: &[TableJoin]) -> Option<String> {
    let abbrev = abbreviate(right_table)?;
    let mut n = existing
        .iter()
        .filter(|j| j.right_table == right_table)
        .count()
        + 1;

    loop {
        let candidate = format!("{abbrev}{n}");
        if !existing.iter().any(|j| j.alias == candidate) {
            return Some(candidate);
        }
        n += 1;
    }
}
