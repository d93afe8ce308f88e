// Case-insensitive set of known words

use std::io::BufReader;
use std::path::Path;

use hashbrown::HashSet;

use crate::error::{Result, open_source};
use crate::tokenizer::{TokenScanner, is_word};

/// Immutable, case-insensitive collection of correctly spelled words.
///
/// Only valid words (letters and apostrophes) are stored, always in lower
/// case. Queries are answered from memory; the source the dictionary was
/// built from is never consulted again.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a token source, consuming it completely.
    ///
    /// Every token that is a valid word is stored in lower case; all other
    /// tokens (whitespace, digits, punctuation) are discarded. The first
    /// error produced by the source aborts construction.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut words = HashSet::new();
        for token in tokens {
            let token = token?;
            if is_word(&token) {
                words.insert(token.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Build a dictionary from already separated words.
    ///
    /// Entries that are not valid words are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter(|w| is_word(w.as_ref()))
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Load a dictionary from a text file.
    ///
    /// The file is read as a token stream, so any layout works: one word
    /// per line, running prose, comma separated lists. The file is closed
    /// before this function returns, whether or not loading succeeded.
    ///
    /// # Errors
    ///
    /// - [`SpellError::FileNotFound`](crate::SpellError::FileNotFound) if
    ///   `path` does not exist.
    /// - [`SpellError::Io`](crate::SpellError::Io) on read failures and
    ///   malformed UTF-8.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = open_source(path)?;
        let dictionary = Self::from_tokens(TokenScanner::from_reader(BufReader::new(file))?)?;
        log::debug!(
            "loaded {} words from dictionary {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Number of distinct words. Case variants count once.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `candidate` is a known word, ignoring case.
    ///
    /// Strings that are not valid words (empty, containing spaces or
    /// punctuation) are never in the dictionary.
    pub fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_lowercase())
    }
}
