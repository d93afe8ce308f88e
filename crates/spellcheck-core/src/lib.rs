//! Shared building blocks for the spellcheck crates.
//!
//! - [`character`] -- word-character predicate and simple case conversion
//! - [`case`] -- case pattern detection and case matching of suggestions
//! - [`token`] -- word / separator classification of tokens

pub mod case;
pub mod character;
pub mod token;

pub use case::{CaseType, match_case};
pub use character::{is_word, is_word_character};
pub use token::TokenKind;
