//! Builder for constructing a [`PhraseFilter`].
//!
//! The builder collects dictionary phrases and an optional noise pattern up front, so a filter
//! can be declared in one expression. Filters can also be built empty and populated later through
//! [`PhraseFilter::insert_all`].
//!
//! [`PhraseFilter`]: crate::PhraseFilter
//! [`PhraseFilter::insert_all`]: crate::PhraseFilter::insert_all

use crate::{
    noise::{Noise, NoiseError},
    trie::Trie,
    PhraseFilter,
};

/// A builder for a [`PhraseFilter`].
///
/// # Example
/// ```
/// use phrase_filter::PhraseFilterBuilder;
///
/// let filter = PhraseFilterBuilder::new()
///     .phrases(&["bad", "badword"])
///     .build()
///     .unwrap();
///
/// assert!(filter.check("this is bad"));
/// ```
///
/// [`PhraseFilter`]: crate::PhraseFilter
#[derive(Clone, Debug, Default)]
pub struct PhraseFilterBuilder {
    phrases: Vec<String>,
    noise_pattern: Option<String>,
}

impl PhraseFilterBuilder {
    /// Creates a new `PhraseFilterBuilder`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single phrase to the dictionary.
    #[inline]
    pub fn phrase<S>(&mut self, phrase: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.phrases.push(phrase.to_string());
        self
    }

    /// Adds multiple phrases to the dictionary.
    #[inline]
    pub fn phrases<I, S>(&mut self, phrases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.phrases
            .extend(phrases.into_iter().map(|s| s.to_string()));
        self
    }

    /// Sets the noise pattern stripped before detection.
    ///
    /// When this is never called, [`DEFAULT_NOISE_PATTERN`] is used.
    ///
    /// [`DEFAULT_NOISE_PATTERN`]: crate::DEFAULT_NOISE_PATTERN
    #[inline]
    pub fn noise_pattern<S>(&mut self, pattern: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.noise_pattern = Some(pattern.to_string());
        self
    }

    /// Builds the configured [`PhraseFilter`].
    ///
    /// Fails if the configured noise pattern is not a valid regular expression.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseFilterBuilder;
    ///
    /// let filter = PhraseFilterBuilder::new()
    ///     .phrase("bad")
    ///     .noise_pattern(r"[-_]+")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(filter.find_in("b-a_d"), Some("bad".to_owned()));
    /// ```
    ///
    /// [`PhraseFilter`]: crate::PhraseFilter
    pub fn build(&self) -> Result<PhraseFilter, NoiseError> {
        let noise = match &self.noise_pattern {
            Some(pattern) => Noise::new(pattern)?,
            None => Noise::default(),
        };
        let mut trie = Trie::new();
        trie.insert_all(&self.phrases);
        tracing::debug!(phrases = self.phrases.len(), "Built phrase filter");
        Ok(PhraseFilter { trie, noise })
    }
}

#[cfg(test)]
mod tests {
    use crate::PhraseFilterBuilder;

    #[test]
    fn build_empty() {
        let filter = PhraseFilterBuilder::new().build().unwrap();

        assert!(!filter.check("anything"));
        assert_eq!(filter.filter("anything"), "anything");
    }

    #[test]
    fn phrases_seed_the_dictionary() {
        let filter = PhraseFilterBuilder::new()
            .phrase("bad")
            .phrases(&["word", "badword"])
            .build()
            .unwrap();

        assert!(filter.check("bad"));
        assert!(filter.check("word"));
        assert!(filter.check("badword"));
    }

    #[test]
    fn default_noise_pattern_applies() {
        let filter = PhraseFilterBuilder::new().phrase("bad").build().unwrap();

        assert!(filter.check("b|a d"));
    }

    #[test]
    fn custom_noise_pattern_applies() {
        let filter = PhraseFilterBuilder::new()
            .phrase("bad")
            .noise_pattern("-+")
            .build()
            .unwrap();

        assert!(filter.check("b-a-d"));
        assert!(!filter.check("b|a|d"));
    }

    #[test]
    fn invalid_noise_pattern_fails_build() {
        assert!(PhraseFilterBuilder::new()
            .phrase("bad")
            .noise_pattern("[")
            .build()
            .is_err());
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = PhraseFilterBuilder::new();
        builder.phrase("bad");

        let first = builder.build().unwrap();
        builder.phrase("word");
        let second = builder.build().unwrap();

        assert!(!first.check("word"));
        assert!(second.check("word"));
    }
}
