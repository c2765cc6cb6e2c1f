//! Character pool construction.

use super::charset;
use crate::error::{Error, Result};
use crate::options::Options;

/// Build the pool of characters eligible for random fill positions.
///
/// Digits and symbols accumulate when enabled; a single-case restriction
/// replaces whatever accumulated and wins outright. Similar characters
/// and `exclude_chars` are filtered off the finished pool, in that order.
pub(crate) fn build(opts: &Options) -> Result<Vec<char>> {
    let mut pool = String::new();

    if opts.use_numbers {
        pool.push_str(charset::DIGITS);
    }
    if opts.use_symbols {
        pool.push_str(charset::SYMBOLS);
    }

    if opts.lowercase_only {
        pool = charset::LOWERCASE.to_string();
    } else if opts.uppercase_only {
        pool = charset::UPPERCASE.to_string();
    } else {
        pool.push_str(charset::LOWERCASE);
        pool.push_str(charset::UPPERCASE);
    }

    let mut chars: Vec<char> = pool.chars().collect();

    if opts.exclude_similar_characters {
        chars.retain(|&c| !charset::is_similar(c));
    }
    if !opts.exclude_chars.is_empty() {
        chars.retain(|c| !opts.exclude_chars.contains(c));
    }

    if chars.is_empty() {
        return Err(Error::EmptyPool);
    }
    Ok(chars)
}
