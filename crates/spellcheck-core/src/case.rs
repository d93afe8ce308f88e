// Case type detection and case matching of suggestions

use crate::character::{is_lower, is_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only apostrophes, digits, etc.).
    NoLetters,
    /// All letters are lowercase: "balloon".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Balloon".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "baLLoon".
    Complex,
    /// All letters are uppercase: "BALLOON".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (apostrophes, digits, punctuation) are ignored
/// when determining the case pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(word[0]) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(word[0]) {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Re-case a stored (lower-case) candidate so that it mirrors the casing of
/// the word the user typed.
///
/// An all-uppercase `typed` word upper-cases the candidate, a capitalized
/// one capitalizes it, and any other pattern leaves the candidate as stored.
/// Every corrector goes through this routine so that suggestions are cased
/// identically whatever strategy produced them.
pub fn match_case(typed: &str, candidate: &str) -> String {
    let pattern: Vec<char> = typed.chars().collect();
    match detect_case(&pattern) {
        CaseType::AllUpper => candidate.to_uppercase(),
        CaseType::FirstUpper => capitalize(candidate),
        CaseType::AllLower | CaseType::Complex | CaseType::NoLetters => candidate.to_string(),
    }
}

/// Upper-case the first character with its full mapping (`ß` -> `SS`).
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- detect_case tests --

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(&[]), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case(&chars("'")), CaseType::NoLetters);
        assert_eq!(detect_case(&chars("...")), CaseType::NoLetters);
    }

    #[test]
    fn detect_all_lower() {
        assert_eq!(detect_case(&chars("baloon")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("a")), CaseType::AllLower);
    }

    #[test]
    fn detect_first_upper() {
        assert_eq!(detect_case(&chars("Baloon")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("Who'ev")), CaseType::FirstUpper);
    }

    #[test]
    fn detect_all_upper() {
        assert_eq!(detect_case(&chars("BALOON")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("A")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("DON'T")), CaseType::AllUpper);
    }

    #[test]
    fn detect_complex() {
        assert_eq!(detect_case(&chars("baLoon")), CaseType::Complex);
        assert_eq!(detect_case(&chars("McDonalds")), CaseType::Complex);
        assert_eq!(detect_case(&chars("CyA")), CaseType::Complex);
    }

    #[test]
    fn detect_non_ascii() {
        assert_eq!(detect_case(&chars("k\u{00E4}vel\u{00F6}")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("\u{00C4}iti")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("\u{00C4}\u{00D6}")), CaseType::AllUpper);
    }

    // -- match_case tests --

    #[test]
    fn match_case_all_upper() {
        assert_eq!(match_case("BALOON", "balloon"), "BALLOON");
    }

    #[test]
    fn match_case_first_upper() {
        assert_eq!(match_case("Baloon", "balloon"), "Balloon");
    }

    #[test]
    fn match_case_lower_and_complex_keep_stored_case() {
        assert_eq!(match_case("baloon", "balloon"), "balloon");
        assert_eq!(match_case("BaLoon", "balloon"), "balloon");
    }

    #[test]
    fn match_case_multi_word_candidate() {
        assert_eq!(match_case("INSPITE", "in spite"), "IN SPITE");
        assert_eq!(match_case("Inspite", "in spite"), "In spite");
    }

    #[test]
    fn match_case_keeps_apostrophes() {
        assert_eq!(match_case("WHO'EV", "who've"), "WHO'VE");
        assert_eq!(match_case("Who'ev", "who've"), "Who've");
    }

    #[test]
    fn match_case_uses_full_upper_case_mapping() {
        assert_eq!(match_case("STRASE", "stra\u{00DF}e"), "STRASSE");
        assert_eq!(match_case("Sase", "\u{00DF}ase"), "SSase");
        assert_eq!(match_case("Strase", "stra\u{00DF}e"), "Stra\u{00DF}e");
    }

    #[test]
    fn match_case_empty_candidate() {
        assert_eq!(match_case("ABC", ""), "");
        assert_eq!(match_case("Abc", ""), "");
    }
}
