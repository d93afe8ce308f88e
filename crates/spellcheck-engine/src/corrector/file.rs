// Corrections looked up in a static misspelling table

use std::collections::BTreeSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;

use super::{Corrector, case_matched, ensure_word};
use crate::error::{Result, SpellError, open_source};
use crate::tokenizer::is_word;

/// A corrector whose suggestions come from a text table.
///
/// Each non-blank line of the table has the form `misspelling,correction`.
/// Whitespace around either side is ignored, and both sides are matched
/// case-insensitively. A misspelling may appear on several lines to offer
/// several corrections:
///
/// ```text
/// aligatur,alligator
/// baloon,balloon
/// inspite,in spite
/// ther,their
/// ther,there
/// ```
///
/// The misspelling must be a single word. The correction may be several
/// words separated by whitespace (`in spite`).
#[derive(Debug, Clone, Default)]
pub struct FileCorrector {
    table: HashMap<String, BTreeSet<String>>,
}

impl FileCorrector {
    /// Build a corrector by reading a table line by line.
    ///
    /// Construction is all-or-nothing: the first malformed line aborts it.
    ///
    /// # Errors
    ///
    /// - [`SpellError::Format`] for a line without exactly one comma, or
    ///   whose sides are not valid words.
    /// - [`SpellError::Io`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let Some((misspelling, correction)) = parse_line(&line, index + 1)? else {
                continue;
            };
            table.entry(misspelling).or_default().insert(correction);
        }

        Ok(Self { table })
    }

    /// Load a corrector from a table file.
    ///
    /// The file is closed before this function returns, including when the
    /// table turns out to be malformed.
    ///
    /// # Errors
    ///
    /// [`SpellError::FileNotFound`] if `path` does not exist, otherwise as
    /// [`from_reader`](Self::from_reader).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = open_source(path)?;
        let corrector = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} misspellings from correction table {}",
            corrector.len(),
            path.display()
        );
        Ok(corrector)
    }

    /// Number of distinct misspellings in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Corrector for FileCorrector {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        ensure_word(word)?;
        Ok(match self.table.get(&word.to_lowercase()) {
            Some(stored) => case_matched(word, stored),
            None => BTreeSet::new(),
        })
    }
}

/// Parse one table line into a lower-cased `(misspelling, correction)` pair.
///
/// Blank lines yield `None`.
fn parse_line(line: &str, line_no: usize) -> Result<Option<(String, String)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let format_error = |message: String| SpellError::Format {
        line: line_no,
        message,
    };

    let (left, right) = line
        .split_once(',')
        .ok_or_else(|| format_error(format!("missing comma in {line:?}")))?;
    if right.contains(',') {
        return Err(format_error(format!("more than one comma in {line:?}")));
    }

    let misspelling = left.trim();
    let correction = right.trim();
    if !is_word(misspelling) {
        return Err(format_error(format!(
            "misspelling {misspelling:?} is not a word"
        )));
    }
    if !is_phrase(correction) {
        return Err(format_error(format!(
            "correction {correction:?} is not a word or phrase"
        )));
    }

    Ok(Some((misspelling.to_lowercase(), correction.to_lowercase())))
}

/// A non-empty sequence of words separated by whitespace.
fn is_phrase(s: &str) -> bool {
    let mut words = s.split_whitespace().peekable();
    words.peek().is_some() && words.all(is_word)
}
