// Streaming word / separator tokenizer
//
// Splits a character stream into maximal runs of word characters (letters
// and apostrophes) and non-word characters. Concatenating the produced
// tokens reproduces the input exactly.

pub mod reader;

use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::str::Chars;

pub use spellcheck_core::character::{is_word, is_word_character};
use spellcheck_core::token::TokenKind;

use crate::error::{Result, SpellError};
pub use reader::ReaderChars;

/// Character source used by [`TokenScanner::from_text`].
pub type TextChars<'a> = std::iter::Map<Chars<'a>, fn(char) -> io::Result<char>>;

/// Lazy, forward-only iterator over the tokens of a character source.
///
/// The scanner keeps exactly one character of lookahead: the first
/// character of the next token, or `None` once the source is exhausted.
/// Each call to [`next_token`](Self::next_token) reads only the
/// characters of the token it returns plus the character that ends it.
pub struct TokenScanner<I> {
    chars: I,
    lookahead: Option<char>,
}

impl<I> TokenScanner<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    /// Create a scanner over a character source.
    ///
    /// Reads the first character eagerly; a failure during that read is
    /// returned as [`SpellError::Io`].
    pub fn new(mut chars: I) -> Result<Self> {
        let lookahead = chars.next().transpose()?;
        Ok(Self { chars, lookahead })
    }

    /// Returns `true` if another token is available. Never reads.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Produce the next token.
    ///
    /// Returns [`SpellError::Exhausted`] if the source has no more
    /// characters. A read failure while the token is being built is
    /// returned as [`SpellError::Io`]; the partial token is discarded and
    /// the scanner is exhausted afterwards.
    pub fn next_token(&mut self) -> Result<String> {
        let first = self.lookahead.ok_or(SpellError::Exhausted)?;
        let kind = TokenKind::of(first);
        let mut token = String::new();

        while let Some(c) = self.lookahead {
            if TokenKind::of(c) != kind {
                break;
            }
            token.push(c);
            self.lookahead = match self.chars.next().transpose() {
                Ok(next) => next,
                Err(e) => {
                    self.lookahead = None;
                    return Err(e.into());
                }
            };
        }

        Ok(token)
    }
}

impl<R: BufRead> TokenScanner<ReaderChars<R>> {
    /// Create a scanner over a UTF-8 byte reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        Self::new(ReaderChars::new(reader))
    }
}

impl<'a> TokenScanner<TextChars<'a>> {
    /// Create a scanner over an in-memory string. Cannot fail.
    pub fn from_text(text: &'a str) -> Self {
        let mut chars: TextChars<'a> = text.chars().map(Ok as fn(char) -> io::Result<char>);
        let lookahead = chars.next().and_then(|c| c.ok());
        Self { chars, lookahead }
    }
}

impl<I> Iterator for TokenScanner<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

impl<I> FusedIterator for TokenScanner<I> where I: Iterator<Item = io::Result<char>> {}
