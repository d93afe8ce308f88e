// Character classification and simple case conversion

/// The only non-letter character allowed inside a word.
pub const APOSTROPHE: char = '\'';

// ---------------------------------------------------------------------------
// Word classification
// ---------------------------------------------------------------------------

/// Check whether a character may appear inside a word.
///
/// Word characters are letters (per `char::is_alphabetic`) and the
/// apostrophe. Everything else (whitespace, digits, punctuation) separates
/// words.
pub fn is_word_character(c: char) -> bool {
    c.is_alphabetic() || c == APOSTROPHE
}

/// Check whether a string is a valid word.
///
/// A valid word is non-empty and made only of word characters.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_character)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// `to_lowercase` / `to_uppercase` produce iterators because some characters
// map to several characters. Case detection only needs the one-to-one
// mapping, so we keep the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}
