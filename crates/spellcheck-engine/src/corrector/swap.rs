// Corrections for swapped adjacent letters

use std::collections::BTreeSet;

use super::{Corrector, case_matched, ensure_word};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// A corrector for "swapped letter" typos such as `wiht` for `with`.
///
/// Suggests every dictionary word that is exactly one exchange of two
/// adjacent characters away from the input. The dictionary is borrowed,
/// not copied.
#[derive(Debug, Clone, Copy)]
pub struct SwapCorrector<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> SwapCorrector<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary candidates are checked against.
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}

impl Corrector for SwapCorrector<'_> {
    /// Suggest dictionary words one adjacent swap away from `word`.
    ///
    /// Swaps are made between the characters as typed; lower-casing only
    /// happens on the candidates, so a letter whose lower case is longer
    /// than one character (`İ`) still moves as a unit.
    ///
    /// A word that is already correct is not special-cased: its result is
    /// whatever swap variants also happen to be dictionary words.
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        ensure_word(word)?;

        let mut buffer: Vec<char> = word.chars().collect();
        let mut found = BTreeSet::new();

        for i in 1..buffer.len() {
            buffer.swap(i - 1, i);
            let candidate: String = buffer.iter().collect();
            if self.dictionary.is_word(&candidate) {
                found.insert(candidate.to_lowercase());
            }
            buffer.swap(i - 1, i);
        }

        Ok(case_matched(word, found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn finds_all_single_swaps() {
        let dict = Dictionary::from_words(["heat", "hate"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(swap.corrections("haet").unwrap(), set(&["hate", "heat"]));
    }

    #[test]
    fn includes_swap_of_first_pair() {
        let dict = Dictionary::from_words(["heat", "hate", "ahet"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(
            swap.corrections("haet").unwrap(),
            set(&["ahet", "hate", "heat"])
        );
    }

    #[test]
    fn follows_input_case() {
        let dict = Dictionary::from_words(["cay"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(swap.corrections("CYA").unwrap(), set(&["CAY"]));
        assert_eq!(swap.corrections("Cya").unwrap(), set(&["Cay"]));
        assert_eq!(swap.corrections("cya").unwrap(), set(&["cay"]));
        assert_eq!(swap.corrections("CyA").unwrap(), set(&["cay"]));
    }

    #[test]
    fn correct_word_without_swap_variants_is_empty() {
        let dict = Dictionary::from_words(["cay"]);
        let swap = SwapCorrector::new(&dict);
        assert!(swap.corrections("cay").unwrap().is_empty());
    }

    #[test]
    fn correct_word_is_not_special_cased() {
        // Swapping the double "o" reproduces the word itself.
        let dict = Dictionary::from_words(["moon"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(swap.corrections("moon").unwrap(), set(&["moon"]));
    }

    #[test]
    fn single_character_has_no_swaps() {
        let dict = Dictionary::from_words(["a", "i"]);
        let swap = SwapCorrector::new(&dict);
        assert!(swap.corrections("x").unwrap().is_empty());
    }

    #[test]
    fn apostrophes_take_part_in_swaps() {
        let dict = Dictionary::from_words(["don't"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(swap.corrections("do'nt").unwrap(), set(&["don't"]));
    }

    #[test]
    fn multi_char_lower_case_letters_swap_as_one() {
        // "İ" lower-cases to "i" plus a combining dot.
        let dict = Dictionary::from_words(["\u{130}zmir"]);
        let swap = SwapCorrector::new(&dict);
        assert_eq!(
            swap.corrections("z\u{130}mir").unwrap(),
            set(&["i\u{307}zmir"])
        );
    }

    #[test]
    fn no_match_is_empty() {
        let dict = Dictionary::from_words(["heat"]);
        let swap = SwapCorrector::new(&dict);
        assert!(swap.corrections("zzzz").unwrap().is_empty());
    }

    #[test]
    fn non_word_input_is_invalid() {
        let dict = Dictionary::from_words(["heat"]);
        let swap = SwapCorrector::new(&dict);
        for input in ["", "!@#@#", "ha3t", "he at"] {
            assert!(
                matches!(swap.corrections(input), Err(SpellError::InvalidArgument(_))),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn borrows_the_dictionary() {
        let dict = Dictionary::from_words(["heat"]);
        let swap = SwapCorrector::new(&dict);
        assert!(std::ptr::eq(swap.dictionary(), &dict));
    }
}
