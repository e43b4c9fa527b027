//! Tokenizer for command argument parsing.
//!
//! Arguments are whitespace separated. A double-quoted run is a single
//! argument with the quotes stripped, which lets a multi-word realm name be
//! passed while the other arguments stay bare.

use crate::error::{BotError, Result};

/// Splits a command argument string into tokens.
///
/// Handles:
/// - Whitespace-separated words: `asmongold us` → `asmongold`, `us`
/// - Double-quoted strings: `"area 52"` → `area 52`
/// - Quotes end a bare word: `a"b c"` → `a`, `b c`
/// - An unmatched `"` is skipped and scanning continues after it
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        // Skip whitespace
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '"' {
            let after_quote = &rest[1..];
            match after_quote.find('"') {
                Some(end) => {
                    tokens.push(after_quote[..end].to_string());
                    rest = &after_quote[end + 1..];
                }
                None => rest = after_quote,
            }
            continue;
        }

        let end = rest
            .find(|ch: char| ch.is_whitespace() || ch == '"')
            .unwrap_or(rest.len());
        tokens.push(rest[..end].to_string());
        rest = &rest[end..];
    }

    tokens
}

/// Extracts exactly `expected_count` positional arguments from `raw_line`.
///
/// The first occurrence of `prefix_to_strip` is removed before tokenizing.
/// Fails with [`BotError::Parse`] when no tokens are found or the count differs.
pub fn parse_arguments(
    raw_line: &str,
    prefix_to_strip: &str,
    expected_count: usize,
) -> Result<Vec<String>> {
    let args = raw_line.replacen(prefix_to_strip, "", 1);
    let tokens = tokenize(&args);

    if tokens.is_empty() || tokens.len() != expected_count {
        return Err(BotError::Parse);
    }

    Ok(tokens)
}

/// Converts a realm name into the slug form the profile API expects.
///
/// Enclosing double quotes are stripped, spaces become hyphens and
/// apostrophes are dropped. Case is not passed through: the result is always
/// lowercased, so the slug is the same whether or not the caller lowercased
/// the line first. Every other character, including non-ASCII, is left alone.
pub fn normalize_realm_slug(raw: &str) -> String {
    raw.trim_matches('"')
        .replace(' ', "-")
        .replace('\'', "")
        .to_lowercase()
}
