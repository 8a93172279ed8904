//! Noise stripping for detection.
//!
//! Phrases are often obfuscated by splitting them with separator characters, such as "b|a d" for
//! "bad". Detection sees through this by deleting every match of a configurable noise pattern
//! before consulting the dictionary. The default pattern removes pipes, ampersands, percent and
//! dollar signs, at signs, asterisks, and whitespace.

use regex::Regex;
use thiserror::Error;

/// The noise pattern in effect when none is configured.
pub const DEFAULT_NOISE_PATTERN: &str = r"[\|\s&%$@*]+";

/// An error returned when a noise pattern is rejected.
///
/// Pattern replacement is atomic: when compilation fails, the pattern previously in effect keeps
/// being used.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// The supplied pattern is not a valid regular expression.
    #[error("invalid noise pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The rejected pattern, verbatim.
        pattern: String,
        /// The compilation failure reported by the regex engine.
        source: regex::Error,
    },
}

/// A compiled noise-stripping transform.
#[derive(Clone, Debug)]
pub struct Noise {
    pattern: Regex,
}

impl Noise {
    /// Compiles the transform for `pattern`.
    pub fn new(pattern: &str) -> Result<Self, NoiseError> {
        let compiled = Regex::new(pattern).map_err(|source| NoiseError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { pattern: compiled })
    }

    /// Deletes every noise match from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_PATTERN).expect("default noise pattern failed to compile")
    }
}
