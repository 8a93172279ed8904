//! Phrase dictionary and matching automaton.
//!
//! The [`Trie`] owns the dictionary as a tree of [`Node`]s and scans text with a greedy,
//! restarting discipline rather than a failure-link automaton. Two cursors track the scan: `left`
//! marks the start of the candidate window and only ever moves right, while `position` walks the
//! window and falls back to `left` whenever the window is abandoned. A window is abandoned when no
//! edge exists for the current character, or when an edge lands on a non-phrase-end node with no
//! text left to extend into; scanning then resumes from the root one character past `left`.
//!
//! Rescanning makes the worst case O(text length × longest phrase length) on adversarial input,
//! such as a long run of a character that always extends a prefix but never completes a phrase.
//! The trade is deliberate: the scan needs no precomputed failure links, so the dictionary can be
//! mutated freely between calls.
//!
//! What happens when a window lands on a phrase end is the only point where the four matching
//! operations differ; see each method for its policy.

use crate::node::Node;
use hashbrown::HashSet;

/// A phrase dictionary with greedy matching.
///
/// Phrases are inserted and soft-deleted at will; matching never mutates the dictionary. The trie
/// only ever grows: deletion clears a flag and leaves nodes in place, which keeps shared prefixes
/// of other live phrases intact.
///
/// # Example
/// ```
/// use phrase_filter::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("bad");
///
/// assert_eq!(trie.validate("this is bad"), Err("bad".to_owned()));
/// assert_eq!(trie.filter("this is bad"), "this is ");
/// ```
#[derive(Clone, Debug)]
pub struct Trie {
    root: Node,
}

impl Trie {
    /// Creates an empty dictionary.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new_root(),
        }
    }

    /// Inserts a phrase into the dictionary.
    ///
    /// Missing nodes are created along the phrase's path and the final node is marked as a phrase
    /// end. Re-inserting an existing phrase is a no-op, as is inserting the empty string.
    pub fn insert(&mut self, phrase: &str) {
        if phrase.is_empty() {
            return;
        }
        phrase
            .chars()
            .fold(&mut self.root, |node, value| node.child_or_insert(value))
            .mark_phrase_end();
    }

    /// Inserts every phrase in `phrases`.
    ///
    /// Each phrase is processed independently; empty strings among them are skipped without
    /// affecting the rest.
    pub fn insert_all<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            self.insert(phrase.as_ref());
        }
    }

    /// Soft-deletes a phrase from the dictionary.
    ///
    /// Walks the exact path of the phrase and clears the phrase-end mark on its final node. Nodes
    /// and edges are never removed, so phrases sharing the prefix stay live and re-insertion is
    /// cheap. Deleting a phrase that was never inserted is a no-op.
    pub fn remove(&mut self, phrase: &str) {
        if phrase.is_empty() {
            return;
        }
        let mut current = &mut self.root;
        for value in phrase.chars() {
            match current.child_mut(value) {
                Some(node) => current = node,
                None => return,
            }
        }
        current.unmark_phrase_end();
    }

    /// Soft-deletes every phrase in `phrases`.
    pub fn remove_all<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            self.remove(phrase.as_ref());
        }
    }

    /// Scans `text` and fails on the first dictionary phrase found.
    ///
    /// The error value is the matched substring. The first phrase end reached while extending a
    /// window wins, so a shorter phrase beats a longer one sharing its prefix.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_all(&["bad", "badword"]);
    ///
    /// assert_eq!(trie.validate("a badword"), Err("bad".to_owned()));
    /// assert_eq!(trie.validate("all clear"), Ok(()));
    /// ```
    pub fn validate(&self, text: &str) -> Result<(), String> {
        let chars: Vec<char> = text.chars().collect();
        let mut parent = &self.root;
        let mut left = 0;
        let mut position = left;
        while position < chars.len() {
            match parent.child(chars[position]) {
                Some(node) if node.is_phrase_end() => {
                    return Err(chars[left..=position].iter().collect());
                }
                // The prefix is still open and there is text left to complete it.
                Some(node) if position + 1 < chars.len() => {
                    parent = node;
                    position += 1;
                }
                _ => {
                    parent = &self.root;
                    left += 1;
                    position = left;
                }
            }
        }
        Ok(())
    }

    /// Returns the first dictionary phrase found in `text`, if any.
    ///
    /// This is the negation of [`validate`](Self::validate), carrying the same first match.
    pub fn find_in(&self, text: &str) -> Option<String> {
        self.validate(text).err()
    }

    /// Returns every distinct dictionary phrase found in `text`, in first-seen order.
    ///
    /// Unlike [`filter`](Self::filter), a recognized phrase does not close its window: the scan
    /// keeps extending from the matched node, so a longer phrase sharing the prefix is also
    /// reported from the same starting point. Duplicates are removed by exact string equality,
    /// keeping the first occurrence's position in the result.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_all(&["bad", "badword"]);
    ///
    /// assert_eq!(trie.find_all("badword"), vec!["bad", "badword"]);
    /// ```
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches: Vec<String> = Vec::new();
        let mut parent = &self.root;
        let mut left = 0;
        let mut position = left;
        while position < chars.len() {
            match parent.child(chars[position]) {
                Some(node) => {
                    if node.is_phrase_end() {
                        matches.push(chars[left..=position].iter().collect());
                    }
                    // The window stays open past a match, but nothing can extend past the end of
                    // the text.
                    if position + 1 < chars.len() {
                        parent = node;
                        position += 1;
                    } else {
                        parent = &self.root;
                        left += 1;
                        position = left;
                    }
                }
                None => {
                    parent = &self.root;
                    left += 1;
                    position = left;
                }
            }
        }

        let mut seen = HashSet::with_capacity(matches.len());
        matches.retain(|phrase| seen.insert(phrase.clone()));
        matches
    }

    /// Returns `text` with every matched phrase deleted.
    ///
    /// The scan commits to the first phrase end it reaches: the matched window is dropped from
    /// the output and scanning resumes from the root immediately after it, without trying to
    /// extend to a longer phrase. On an abandoned window only the single character at `left` is
    /// settled, so the rest of the window is still eligible to start a later match. Unmatched
    /// text is preserved in its original order and spacing.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("bad");
    ///
    /// assert_eq!(trie.filter("a badword b"), "a word b");
    /// ```
    pub fn filter(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut parent = &self.root;
        let mut left = 0;
        let mut position = left;
        while position < chars.len() {
            match parent.child(chars[position]) {
                Some(node) if node.is_phrase_end() => {
                    parent = &self.root;
                    left = position + 1;
                    position = left;
                }
                Some(node) if position + 1 < chars.len() => {
                    parent = node;
                    position += 1;
                }
                _ => {
                    output.push(chars[left]);
                    parent = &self.root;
                    left += 1;
                    position = left;
                }
            }
        }
        output.extend(&chars[left..]);
        output
    }

    /// Returns `text` with every matched phrase's characters overwritten by `mask`.
    ///
    /// Matching decisions are identical to [`filter`](Self::filter): same commit-early policy on
    /// a phrase end, same restart rule on an abandoned window. Instead of dropping the matched
    /// window, each of its characters is overwritten in place with `mask`, so the output always
    /// has exactly as many characters as the input and unmatched characters are untouched.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("bad");
    ///
    /// assert_eq!(trie.replace("badword", '*'), "***word");
    /// ```
    pub fn replace(&self, text: &str, mask: char) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let mut parent = &self.root;
        let mut left = 0;
        let mut position = left;
        while position < chars.len() {
            match parent.child(chars[position]) {
                Some(node) if node.is_phrase_end() => {
                    for value in &mut chars[left..=position] {
                        *value = mask;
                    }
                    parent = &self.root;
                    left = position + 1;
                    position = left;
                }
                Some(node) if position + 1 < chars.len() => {
                    parent = node;
                    position += 1;
                }
                _ => {
                    parent = &self.root;
                    left += 1;
                    position = left;
                }
            }
        }
        chars.into_iter().collect()
    }
}

impl Default for Trie {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
