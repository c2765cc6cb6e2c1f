//! Character set constants for password generation.

pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?/~";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters that look alike across fonts and cases. Used only as a
/// filter, never as a pool of its own.
pub const SIMILAR: &str = "oO0iIl1|";

/// Whether `c` belongs to the similar-characters set.
pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}
