//! Generation options.

/// Configuration for one generation call.
///
/// Options are plain read-only input: generation never mutates the value
/// you pass in, and no state is shared between calls. Unset length fields
/// fall back to the documented defaults at resolution time.
#[derive(Debug, Clone)]
pub struct Options {
    /// Exact target length. When unset, the length falls back to the
    /// greater of 10 and the combined size of `must_have`, `starts_with`,
    /// and `ends_with`.
    pub length: Option<usize>,
    /// Draw the length at random per password instead of using `length`.
    pub random_length: bool,
    /// Inclusive lower bound for `random_length`; defaults to 8 when
    /// either bound is set. Must not exceed the upper bound.
    pub min_length: Option<usize>,
    /// Inclusive upper bound for `random_length`; defaults to 16 when
    /// either bound is set.
    pub max_length: Option<usize>,
    /// Inclusive `[low, high]` bounds for `random_length`. Takes
    /// precedence over `min_length`/`max_length`.
    pub length_range: Option<(usize, usize)>,
    /// Include digits in the pool.
    pub use_numbers: bool,
    /// Include symbols in the pool.
    pub use_symbols: bool,
    /// Replace the pool with lowercase letters only.
    pub lowercase_only: bool,
    /// Replace the pool with uppercase letters only. Mutually exclusive
    /// with `lowercase_only`.
    pub uppercase_only: bool,
    /// Strip visually similar characters (`oO0iIl1|`) from the pool.
    pub exclude_similar_characters: bool,
    /// Substrings the output must not contain, compared case-insensitively.
    pub exclude_words: Vec<String>,
    /// Characters removed from the pool after everything else.
    pub exclude_chars: Vec<char>,
    /// Characters guaranteed present in the output, capacity permitting.
    /// Each entry may hold one character or a whole group; order among
    /// must-have characters is not meaningful.
    pub must_have: Vec<String>,
    /// Literal prefix of the output.
    pub starts_with: String,
    /// Literal suffix of the output.
    pub ends_with: String,
    /// Positional template of `U`/`D`/`L` tokens plus literal passthrough
    /// characters. When non-empty it overrides pool-based assembly.
    pub pattern: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: None,
            random_length: false,
            min_length: None,
            max_length: None,
            length_range: None,
            use_numbers: true,
            use_symbols: true,
            lowercase_only: false,
            uppercase_only: false,
            exclude_similar_characters: false,
            exclude_words: Vec::new(),
            exclude_chars: Vec::new(),
            must_have: Vec::new(),
            starts_with: String::new(),
            ends_with: String::new(),
            pattern: String::new(),
        }
    }
}
