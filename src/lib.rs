//! A phrase filter for screening text against a mutable blocklist.
//!
//! `phrase_filter` detects, strips, and masks blocklisted phrases in arbitrary Unicode text. The
//! dictionary is a trie that can be mutated at any time: phrases are inserted on the fly and
//! soft-deleted without disturbing other phrases sharing their prefix. Matching is greedy and
//! performed on raw code points, with no case folding or other normalization.
//!
//! Detection operations strip noise first, so phrases split by separator characters ("b a d",
//! "b|a|d") are still caught, while the text-transforming operations work on the literal text to
//! preserve its formatting.
//!
//! # Usage
//! ```
//! use phrase_filter::PhraseFilter;
//!
//! let mut filter = PhraseFilter::new();
//! filter.insert("bad");
//!
//! assert!(filter.check("b a d"));
//! assert_eq!(filter.filter("this is badword"), "this is word");
//! assert_eq!(filter.replace("this is badword", '*'), "this is ***word");
//! ```
//!
//! Filters can also be assembled with [`PhraseFilterBuilder`], or driven at the dictionary level
//! through [`Trie`] when no noise handling is wanted.
//!
//! The dictionary is not synchronized: matching borrows the filter shared and mutation borrows it
//! exclusively, so concurrent use requires external locking or cloned snapshots.

mod builder;
mod node;
mod noise;
mod trie;

pub use builder::PhraseFilterBuilder;
pub use noise::{NoiseError, DEFAULT_NOISE_PATTERN};
pub use trie::Trie;

use noise::Noise;

/// A phrase filter with noise-aware detection.
///
/// Composes a [`Trie`] dictionary with a noise-stripping transform. Detection
/// ([`check`](Self::check), [`find_in`](Self::find_in), [`validate`](Self::validate) and the
/// slice variants) strips noise from the text first; [`filter`](Self::filter) and
/// [`replace`](Self::replace) see the literal text.
#[derive(Clone, Debug)]
pub struct PhraseFilter {
    pub(crate) trie: Trie,
    pub(crate) noise: Noise,
}

impl PhraseFilter {
    /// Creates a filter with an empty dictionary and the default noise pattern.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            noise: Noise::default(),
        }
    }

    /// Inserts a phrase into the dictionary.
    #[inline]
    pub fn insert(&mut self, phrase: &str) {
        self.trie.insert(phrase);
    }

    /// Inserts every phrase in `phrases` into the dictionary.
    pub fn insert_all<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for phrase in phrases {
            self.trie.insert(phrase.as_ref());
            count += 1;
        }
        tracing::debug!(count, "Inserted phrases");
    }

    /// Soft-deletes a phrase from the dictionary.
    ///
    /// Deleting a phrase that is not present is a no-op.
    #[inline]
    pub fn remove(&mut self, phrase: &str) {
        self.trie.remove(phrase);
    }

    /// Soft-deletes every phrase in `phrases` from the dictionary.
    pub fn remove_all<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for phrase in phrases {
            self.trie.remove(phrase.as_ref());
            count += 1;
        }
        tracing::debug!(count, "Removed phrases");
    }

    /// Checks whether `text` contains any dictionary phrase.
    ///
    /// Noise is stripped before matching.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// assert!(filter.check("this text is b|a|d"));
    /// assert!(!filter.check("this text is fine"));
    /// ```
    pub fn check(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }

    /// Returns the first dictionary phrase found in `text`, if any.
    ///
    /// Noise is stripped before matching, so the returned phrase may not occur contiguously in
    /// the original text.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// assert_eq!(filter.find_in("b a d"), Some("bad".to_owned()));
    /// ```
    pub fn find_in(&self, text: &str) -> Option<String> {
        self.trie.find_in(&self.noise.strip(text))
    }

    /// Validates that `text` contains no dictionary phrase.
    ///
    /// Noise is stripped before matching. On failure the error carries the first phrase found.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// assert_eq!(filter.validate("a b a d sign"), Err("bad".to_owned()));
    /// assert_eq!(filter.validate("all clear"), Ok(()));
    /// ```
    pub fn validate(&self, text: &str) -> Result<(), String> {
        self.trie.validate(&self.noise.strip(text))
    }

    /// Returns every distinct dictionary phrase found in `text`, in first-seen order.
    ///
    /// Unlike [`find_in`](Self::find_in) and [`validate`](Self::validate), noise is *not*
    /// stripped here: matching sees the literal text, so obfuscated phrases go undetected. The
    /// slice variant [`find_all_in_slice`](Self::find_all_in_slice) does strip noise.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.trie.find_all(text)
    }

    /// Returns `text` with every matched phrase deleted.
    ///
    /// Noise is *not* stripped: matching sees the literal text, and unmatched characters keep
    /// their original order and spacing.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// assert_eq!(filter.filter("a badword b"), "a word b");
    /// assert_eq!(filter.filter("b|a d"), "b|a d");
    /// ```
    pub fn filter(&self, text: &str) -> String {
        self.trie.filter(text)
    }

    /// Returns `text` with every matched phrase's characters overwritten by `mask`.
    ///
    /// Noise is *not* stripped. The output always has exactly as many characters as the input.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// assert_eq!(filter.replace("badword", '*'), "***word");
    /// ```
    pub fn replace(&self, text: &str, mask: char) -> String {
        self.trie.replace(text, mask)
    }

    /// Deletes every noise match from `text`.
    ///
    /// This is the same transform the detection operations apply before matching.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let filter = PhraseFilter::new();
    ///
    /// assert_eq!(filter.remove_noise("b|a d"), "bad");
    /// ```
    pub fn remove_noise(&self, text: &str) -> String {
        self.noise.strip(text)
    }

    /// Replaces the noise pattern stripped before detection.
    ///
    /// Replacement is atomic: if `pattern` is not a valid regular expression, an error is
    /// returned and the pattern previously in effect keeps being used.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilter;
    ///
    /// let mut filter = PhraseFilter::new();
    /// filter.insert("bad");
    ///
    /// filter.set_noise_pattern("-+").unwrap();
    ///
    /// assert!(filter.check("b-a-d"));
    /// assert!(filter.set_noise_pattern("[").is_err());
    /// assert!(filter.check("b-a-d"));
    /// ```
    pub fn set_noise_pattern(&mut self, pattern: &str) -> Result<(), NoiseError> {
        let noise = Noise::new(pattern)?;
        tracing::debug!(pattern = %pattern, "Replaced noise pattern");
        self.noise = noise;
        Ok(())
    }

    /// Validates every text in `texts`, stopping at the first failure.
    ///
    /// Noise is stripped from each text before matching. On failure the error carries the first
    /// phrase found in the offending text.
    pub fn validate_slice<S>(&self, texts: &[S]) -> Result<(), String>
    where
        S: AsRef<str>,
    {
        for text in texts {
            self.validate(text.as_ref())?;
        }
        Ok(())
    }

    /// Returns the first dictionary phrase found across `texts`, if any.
    ///
    /// Noise is stripped from each text before matching; the search stops at the first text
    /// containing a phrase.
    pub fn find_in_slice<S>(&self, texts: &[S]) -> Option<String>
    where
        S: AsRef<str>,
    {
        texts.iter().find_map(|text| self.find_in(text.as_ref()))
    }

    /// Returns every dictionary phrase found across `texts`, concatenated per text.
    ///
    /// Noise is stripped from each text before matching, unlike [`find_all`](Self::find_all) on
    /// a single text. Matches are deduplicated within each text but not across texts.
    pub fn find_all_in_slice<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        texts
            .iter()
            .flat_map(|text| self.trie.find_all(&self.noise.strip(text.as_ref())))
            .collect()
    }
}

impl Default for PhraseFilter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::PhraseFilter;

    #[test]
    fn find_in_strips_noise() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert_eq!(filter.find_in("b|a d"), Some("bad".to_owned()));
    }

    #[test]
    fn validate_strips_noise() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert_eq!(filter.validate("b&a%d"), Err("bad".to_owned()));
    }

    #[test]
    fn filter_does_not_strip_noise() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert_eq!(filter.filter("b|a d"), "b|a d");
        assert_eq!(filter.filter("badword"), "word");
    }

    #[test]
    fn replace_does_not_strip_noise() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert_eq!(filter.replace("b|a d", '*'), "b|a d");
        assert_eq!(filter.replace("badword", '*'), "***word");
    }

    #[test]
    fn find_all_does_not_strip_noise() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert!(filter.find_all("b|a d").is_empty());
        assert_eq!(filter.find_all("bad"), vec!["bad"]);
    }

    #[test]
    fn check() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert!(filter.check("bad"));
        assert!(filter.check("b a d"));
        assert!(!filter.check("good"));
    }

    #[test]
    fn remove_noise_applies_the_detection_transform() {
        let filter = PhraseFilter::new();

        assert_eq!(filter.remove_noise("b|a d&c%e$f@g*h"), "badcefgh");
    }

    #[test]
    fn set_noise_pattern_swaps_the_transform() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        filter.set_noise_pattern("-+").unwrap();

        assert!(filter.check("b-a-d"));
        assert!(!filter.check("b|a d"));
    }

    #[test]
    fn rejected_noise_pattern_keeps_the_previous_one() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert!(filter.set_noise_pattern("[").is_err());
        assert!(filter.check("b|a d"));
    }

    #[test]
    fn insert_and_remove_pass_through() {
        let mut filter = PhraseFilter::new();

        filter.insert_all(&["bad", "word"]);
        assert!(filter.check("bad"));
        assert!(filter.check("word"));

        filter.remove("bad");
        assert!(!filter.check("bad"));
        assert!(filter.check("word"));

        filter.remove_all(&["word"]);
        assert!(!filter.check("word"));
    }

    #[test]
    fn validate_slice_short_circuits_on_first_failure() {
        let mut filter = PhraseFilter::new();
        filter.insert_all(&["bad", "worse"]);

        assert_eq!(filter.validate_slice(&["clean", "also clean"]), Ok(()));
        assert_eq!(
            filter.validate_slice(&["clean", "b a d", "worse"]),
            Err("bad".to_owned())
        );
    }

    #[test]
    fn find_in_slice_returns_first_match() {
        let mut filter = PhraseFilter::new();
        filter.insert_all(&["bad", "worse"]);

        assert_eq!(
            filter.find_in_slice(&["clean", "worse", "b a d"]),
            Some("worse".to_owned())
        );
        assert_eq!(filter.find_in_slice(&["clean", "spotless"]), None);
    }

    #[test]
    fn find_all_in_slice_strips_noise_per_text() {
        let mut filter = PhraseFilter::new();
        filter.insert("bad");

        assert_eq!(
            filter.find_all_in_slice(&["bad", "b a d"]),
            vec!["bad", "bad"]
        );
    }

    #[test]
    fn find_all_in_slice_concatenates_without_cross_text_dedup() {
        let mut filter = PhraseFilter::new();
        filter.insert_all(&["bad", "word", "badword"]);

        assert_eq!(
            filter.find_all_in_slice(&["badword", "bad"]),
            vec!["bad", "badword", "word", "bad"]
        );
    }
}
