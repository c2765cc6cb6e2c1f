//! Error types for password generation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can make a generation call fail.
///
/// All variants are raised synchronously to the caller; there is never a
/// partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "conflict between must_have and exclude_chars: can't both include and exclude the same characters"
    )]
    MustHaveConflict,

    #[error(
        "conflict between starts_with/ends_with and exclude_chars: can't both include and exclude the same characters"
    )]
    AffixConflict,

    #[error("conflict: `lowercase_only` and `uppercase_only` cannot both be true")]
    CaseConflict,

    #[error("password length ({length}) is smaller than the pattern length ({pattern})")]
    PatternTooShort { length: usize, pattern: usize },

    #[error("character pool is empty after applying exclusions")]
    EmptyPool,

    #[error(
        "length {length} cannot fit all required characters (must_have, starts_with, ends_with); minimum required length is {required}"
    )]
    InsufficientLength { length: usize, required: usize },

    #[error("no password free of exclude_words after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
}
