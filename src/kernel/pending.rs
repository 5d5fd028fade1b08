use serde::{Deserialize, Serialize};

/// Why a word was not staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordRejection {
    Empty,
    Duplicate,
}

/// Words typed during the current pause, not yet committed.
/// Ordered by entry, distinct under exact (case-sensitive) comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingWords {
    words: Vec<String>,
}

impl PendingWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims the raw entry and checks it without staging. Returns the word that would be staged.
    pub fn check(&self, raw: &str) -> Result<String, WordRejection> {
        let word = raw.trim();
        if word.is_empty() {
            return Err(WordRejection::Empty);
        }
        if self.contains(word) {
            return Err(WordRejection::Duplicate);
        }
        Ok(word.to_string())
    }

    pub fn stage(&mut self, raw: &str) -> Result<(), WordRejection> {
        let word = self.check(raw)?;
        self.words.push(word);
        Ok(())
    }

    /// Appends a word that already passed `check`.
    pub(crate) fn push(&mut self, word: String) {
        debug_assert!(!self.contains(&word));
        self.words.push(word);
    }

    /// Removes the entry equal to `word`. Returns false if it was not staged.
    pub fn remove(&mut self, word: &str) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Empties the set, yielding words in entry order.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.words)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
