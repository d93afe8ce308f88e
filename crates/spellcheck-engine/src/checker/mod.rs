// Interactive document checker
//
// Streams a document through the tokenizer, looks each word up in the
// dictionary and asks the user what to do with every misspelling. All
// other content is copied to the output untouched.

pub mod input;

use std::io::{BufRead, Write};

use crate::corrector::Corrector;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::tokenizer::{TokenScanner, is_word};

pub use input::{ConsoleInput, DecisionInput};

/// Counters describing one document pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Tokens read from the document.
    pub tokens: usize,
    /// Tokens that were valid words.
    pub words: usize,
    /// Words missing from the dictionary.
    pub misspellings: usize,
    /// Misspellings the user chose to replace.
    pub replacements: usize,
}

/// Checks documents against a dictionary, proposing corrections from a
/// [`Corrector`].
pub struct SpellChecker<'a> {
    corrector: &'a dyn Corrector,
    dictionary: &'a Dictionary,
}

impl<'a> SpellChecker<'a> {
    pub fn new(corrector: &'a dyn Corrector, dictionary: &'a Dictionary) -> Self {
        Self {
            corrector,
            dictionary,
        }
    }

    /// Spell check `document` in a single forward pass, writing the result
    /// to `output`.
    ///
    /// Non-words and dictionary words are written verbatim. For each
    /// misspelled word the corrections are sorted and shown through
    /// `input`, and the user's choice decides what is written. Invalid
    /// choices are rejected and asked for again, as many times as needed.
    ///
    /// # Errors
    ///
    /// Read and write failures, and [`SpellError::Exhausted`] if `input`
    /// runs out while a decision is pending.
    ///
    /// [`SpellError::Exhausted`]: crate::SpellError::Exhausted
    pub fn check_document<R, D, W>(
        &self,
        document: R,
        input: &mut D,
        output: &mut W,
    ) -> Result<CheckSummary>
    where
        R: BufRead,
        D: DecisionInput + ?Sized,
        W: Write + ?Sized,
    {
        let mut summary = CheckSummary::default();

        for token in TokenScanner::from_reader(document)? {
            let token = token?;
            summary.tokens += 1;

            let mut replacement = None;
            if is_word(&token) {
                summary.words += 1;
                if !self.dictionary.is_word(&token) {
                    summary.misspellings += 1;
                    replacement = self.decide(&token, input)?;
                }
            }

            match replacement {
                Some(text) => {
                    summary.replacements += 1;
                    output.write_all(text.as_bytes())?;
                }
                None => output.write_all(token.as_bytes())?,
            }
        }

        output.flush()?;
        log::debug!(
            "checked {} tokens: {} words, {} misspelled, {} replaced",
            summary.tokens,
            summary.words,
            summary.misspellings,
            summary.replacements
        );
        Ok(summary)
    }

    /// Ask the user what to do with a misspelled word.
    ///
    /// Returns `None` to keep the word as written.
    fn decide<D>(&self, word: &str, input: &mut D) -> Result<Option<String>>
    where
        D: DecisionInput + ?Sized,
    {
        // BTreeSet iteration is already in lexicographic order.
        let candidates: Vec<String> = self.corrector.corrections(word)?.into_iter().collect();
        input.present(word, &candidates)?;

        let choice = read_choice(input, candidates.len() + 1)?;
        let decision = match choice {
            0 => None,
            1 => Some(input.replacement()?),
            n => candidates.into_iter().nth(n - 2),
        };

        log::debug!("misspelled {word:?} -> {decision:?}");
        Ok(decision)
    }
}

/// Read menu choices until one in `0..=max` arrives.
fn read_choice<D>(input: &mut D, max: usize) -> Result<usize>
where
    D: DecisionInput + ?Sized,
{
    loop {
        let token = input.next_token()?;
        match token.parse::<usize>() {
            Ok(choice) if choice <= max => return Ok(choice),
            _ => input.reject(&token)?,
        }
    }
}
