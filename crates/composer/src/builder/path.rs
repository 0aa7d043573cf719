//! Grammar of join paths.
//!
//! A path is `segment ("." segment)*`. A join segment is
//! `[RightTable:RightColumn:LeftColumn]`; any other segment is a column name.

use crate::ast::join::JoinSpec;

pub const SEGMENT_SEPARATOR: char = '.';
const TOKEN_SEPARATOR: char = ':';

/// Splits a join path into its segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEGMENT_SEPARATOR).collect()
}

/// True when the segment is bracketed and holds exactly two `:` separators.
pub fn is_join_segment(segment: &str) -> bool {
    bracket_body(segment)
        .map(|body| body.matches(TOKEN_SEPARATOR).count() == 2)
        .unwrap_or(false)
}

/// Parses a join segment into its positional tokens.
///
/// Returns `None` when the segment does not match the join grammar or when
/// one of its tokens is blank.
pub fn parse_join_segment(segment: &str) -> Option<JoinSpec> {
    if !is_join_segment(segment) {
        return None;
    }
    let body = bracket_body(segment)?;
    let mut tokens = body.split(TOKEN_SEPARATOR).map(str::trim);

    let right_table = tokens.next().filter(|t| is_identifier(t))?;
    let right_column = tokens.next().filter(|t| is_identifier(t))?;
    let left_column = tokens.next().filter(|t| is_identifier(t))?;

    Some(JoinSpec {
        right_table: right_table.to_string(),
        right_column: right_column.to_string(),
        left_column: left_column.to_string(),
        segment: segment.to_string(),
    })
}

fn bracket_body(segment: &str) -> Option<&str> {
    segment.strip_prefix('[')?.strip_suffix(']')
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty() && !token.contains(['[', ']'])
}
