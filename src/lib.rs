//! Constraint-driven password generation.
//!
//! Builds randomized passwords from a composable option set: exact or
//! randomized length, character-class toggles, required characters,
//! literal affixes, character and substring exclusions, and positional
//! `U`/`D`/`L` patterns. Conflicting constraints fail fast with a typed
//! error; every random draw comes from the operating system CSPRNG.
//!
//! # Examples
//!
//! ```
//! use passweave::{Options, generate, generate_batch};
//!
//! let opts = Options {
//!     length: Some(12),
//!     must_have: vec!["!".into()],
//!     ..Default::default()
//! };
//!
//! let pass = generate(&opts).unwrap();
//! assert_eq!(pass.chars().count(), 12);
//! assert!(pass.contains('!'));
//!
//! let batch = generate_batch(3, &opts).unwrap();
//! assert_eq!(batch.len(), 3);
//! ```

pub mod error;
mod options;
pub mod pass;
mod validate;

pub use error::{Error, Result};
pub use options::Options;
pub use pass::charset;
pub use pass::{generate, generate_batch};
