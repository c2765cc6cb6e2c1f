//! Option validation and resolution.

use crate::error::{Error, Result};
use crate::options::Options;

/// Validated options with the effective length filled in.
///
/// Produced once per call; the caller's `Options` is left untouched.
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub opts: Options,
    /// Combined size of must_have, starts_with, and ends_with.
    pub required_len: usize,
}

/// Check an option set for conflicts and produce the resolved form.
///
/// A pattern supplied without an explicit length resolves the length to
/// the pattern's length.
pub(crate) fn resolve(opts: &Options) -> Result<Resolved> {
    let must_have_conflict = opts
        .must_have
        .iter()
        .any(|entry| hits_excluded(entry, &opts.exclude_chars));
    if must_have_conflict {
        return Err(Error::MustHaveConflict);
    }

    if hits_excluded(&opts.starts_with, &opts.exclude_chars)
        || hits_excluded(&opts.ends_with, &opts.exclude_chars)
    {
        return Err(Error::AffixConflict);
    }

    if opts.lowercase_only && opts.uppercase_only {
        return Err(Error::CaseConflict);
    }

    let mut opts = opts.clone();
    if !opts.pattern.is_empty() {
        let pattern = opts.pattern.chars().count();
        match opts.length {
            Some(length) if length < pattern => {
                return Err(Error::PatternTooShort { length, pattern });
            }
            Some(_) => {}
            None => opts.length = Some(pattern),
        }
    }

    let required_len = opts
        .must_have
        .iter()
        .map(|entry| entry.chars().count())
        .sum::<usize>()
        + opts.starts_with.chars().count()
        + opts.ends_with.chars().count();

    Ok(Resolved { opts, required_len })
}

fn hits_excluded(s: &str, excluded: &[char]) -> bool {
    s.chars().any(|c| excluded.contains(&c))
}
