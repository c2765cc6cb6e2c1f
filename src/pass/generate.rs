//! Password assembly: length resolution, must-have placement, pool fill,
//! and the exclude-words retry loop.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::{pattern, pool};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::validate::{self, Resolved};

/// Cap on the exclude-words retry loop. Exhausting it means the
/// constraints leave (almost) no compliant candidate.
const MAX_ATTEMPTS: usize = 100;

/// Generate a single password.
///
/// Must-have characters beyond what fits after the affixes reserve their
/// slots are silently dropped; presence is guaranteed only capacity
/// permitting.
pub fn generate(opts: &Options) -> Result<String> {
    let resolved = validate::resolve(opts)?;
    let chars = pool::build(&resolved.opts)?;
    generate_one(&resolved, &chars)
}

/// Generate `count` passwords, each drawn independently.
///
/// Validation and pool construction happen once; length resolution and
/// assembly run per element. No uniqueness guarantee across the batch.
pub fn generate_batch(count: usize, opts: &Options) -> Result<Vec<String>> {
    let resolved = validate::resolve(opts)?;
    let chars = pool::build(&resolved.opts)?;
    (0..count).map(|_| generate_one(&resolved, &chars)).collect()
}

fn generate_one(resolved: &Resolved, chars: &[char]) -> Result<String> {
    let opts = &resolved.opts;

    for _ in 0..MAX_ATTEMPTS {
        let length = resolve_length(resolved)?;

        if !opts.pattern.is_empty() {
            // Pattern output is positional; exclude_words does not apply.
            return Ok(pattern::expand(&opts.pattern));
        }

        let mut candidate = assemble(opts, chars, length);
        if contains_excluded_word(&candidate, &opts.exclude_words) {
            candidate.zeroize();
            continue;
        }
        return Ok(candidate);
    }

    Err(Error::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Pick the target length for one password instance.
fn resolve_length(resolved: &Resolved) -> Result<usize> {
    let opts = &resolved.opts;
    let mut rng = OsRng;

    let length = if opts.random_length {
        if let Some((low, high)) = opts.length_range {
            rng.gen_range(low..=high)
        } else if opts.min_length.is_some() || opts.max_length.is_some() {
            rng.gen_range(opts.min_length.unwrap_or(8)..=opts.max_length.unwrap_or(16))
        } else {
            10
        }
    } else {
        match opts.length {
            Some(length) => length,
            None => resolved.required_len.max(10),
        }
    };

    if length < resolved.required_len {
        return Err(Error::InsufficientLength {
            length,
            required: resolved.required_len,
        });
    }
    Ok(length)
}

/// Assemble one candidate: prefix, shuffled must-have characters, random
/// pool fill, suffix.
fn assemble(opts: &Options, pool: &[char], length: usize) -> String {
    let mut rng = OsRng;
    let mut out = String::with_capacity(length);
    out.push_str(&opts.starts_with);

    // length >= required_len was checked during length resolution.
    let mut remaining =
        length - opts.starts_with.chars().count() - opts.ends_with.chars().count();

    let mut must: Vec<char> = opts.must_have.iter().flat_map(|e| e.chars()).collect();
    must.shuffle(&mut rng);
    for c in must {
        if remaining == 0 {
            break; // overflow past capacity is dropped
        }
        out.push(c);
        remaining -= 1;
    }

    for _ in 0..remaining {
        out.push(pool[rng.gen_range(0..pool.len())]);
    }

    out.push_str(&opts.ends_with);
    out
}

fn contains_excluded_word(candidate: &str, words: &[String]) -> bool {
    if words.is_empty() {
        return false;
    }
    let mut lower = candidate.to_lowercase();
    let hit = words.iter().any(|w| lower.contains(&w.to_lowercase()));
    lower.zeroize();
    hit
}
