// Token classification

use crate::character::is_word_character;

/// The two classes of characters a token can be made of.
///
/// Tokens are maximal runs of characters of the same kind, so the kind of
/// a token is the kind of any of its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters and apostrophes.
    Word,
    /// Everything else: whitespace, digits, punctuation, symbols.
    Separator,
}

impl TokenKind {
    /// Classify a single character.
    pub fn of(c: char) -> Self {
        if is_word_character(c) {
            TokenKind::Word
        } else {
            TokenKind::Separator
        }
    }

    /// Classify a token by its first character.
    ///
    /// Returns `None` for the empty string, which is never a token.
    pub fn of_token(token: &str) -> Option<Self> {
        token.chars().next().map(Self::of)
    }

    /// Short uppercase label used by the command-line tools.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Separator => "OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_characters() {
        assert_eq!(TokenKind::of('a'), TokenKind::Word);
        assert_eq!(TokenKind::of('\''), TokenKind::Word);
        assert_eq!(TokenKind::of(' '), TokenKind::Separator);
        assert_eq!(TokenKind::of('9'), TokenKind::Separator);
    }

    #[test]
    fn classify_tokens() {
        assert_eq!(TokenKind::of_token("quick"), Some(TokenKind::Word));
        assert_eq!(TokenKind::of_token(", "), Some(TokenKind::Separator));
        assert_eq!(TokenKind::of_token(""), None);
    }

    #[test]
    fn labels() {
        assert_eq!(TokenKind::Word.label(), "WORD");
        assert_eq!(TokenKind::Separator.label(), "OTHER");
    }
}
