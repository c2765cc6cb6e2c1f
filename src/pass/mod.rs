//! Password generation core.

pub mod charset;
mod generate;
mod pattern;
mod pool;

pub use generate::generate;
pub use generate::generate_batch;
