// Correction strategies
//
// A `Corrector` proposes replacements for a misspelled word. Two
// strategies are provided:
//   - `file`: static misspelling -> correction table read from a text file
//   - `swap`: dictionary words one adjacent-letter swap away from the input
//
// Both strategies validate their input and re-case their output through
// the helpers in this module, so callers see identical behavior whichever
// strategy is plugged in.

pub mod file;
pub mod swap;

use std::collections::BTreeSet;

use spellcheck_core::case::match_case;

use crate::error::{Result, SpellError};
use crate::tokenizer::is_word;

pub use file::FileCorrector;
pub use swap::SwapCorrector;

/// Trait for correction strategies.
pub trait Corrector {
    /// Propose corrections for a misspelled word.
    ///
    /// The returned candidates follow the case of `word`: an all-uppercase
    /// word gets uppercase candidates, a capitalized word gets capitalized
    /// candidates, anything else gets the candidates in lower case. The set
    /// is empty when the strategy has nothing to offer.
    ///
    /// # Errors
    ///
    /// [`SpellError::InvalidArgument`] if `word` is not a valid word.
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>>;
}

impl<C: Corrector + ?Sized> Corrector for &C {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        (**self).corrections(word)
    }
}

impl<C: Corrector + ?Sized> Corrector for Box<C> {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        (**self).corrections(word)
    }
}

/// Reject inputs that are not valid words.
pub(crate) fn ensure_word(word: &str) -> Result<()> {
    if is_word(word) {
        Ok(())
    } else {
        Err(SpellError::InvalidArgument(format!("not a word: {word:?}")))
    }
}

/// Re-case every stored candidate to follow the casing of `word`.
pub(crate) fn case_matched<I, S>(word: &str, candidates: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .map(|candidate| match_case(word, candidate.as_ref()))
        .collect()
}
