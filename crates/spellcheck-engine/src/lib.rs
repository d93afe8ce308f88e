//! Interactive spell-checking engine.
//!
//! Reads a document as a stream of word / non-word tokens, looks each word
//! up in a case-insensitive dictionary, and lets the user choose among the
//! corrections proposed by a pluggable strategy.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- lazy tokenizer with one character of lookahead
//! - [`dictionary`] -- immutable case-insensitive word set
//! - [`corrector`] -- the [`Corrector`] trait and its two strategies,
//!   [`FileCorrector`] (static table) and [`SwapCorrector`] (adjacent swaps)
//! - [`checker`] -- [`SpellChecker`], the document pass, and the
//!   [`DecisionInput`] user side
//! - [`error`] -- [`SpellError`] shared by all of the above

pub mod checker;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod tokenizer;

pub use checker::{CheckSummary, ConsoleInput, DecisionInput, SpellChecker};
pub use corrector::{Corrector, FileCorrector, SwapCorrector};
pub use dictionary::Dictionary;
pub use error::{Result, SpellError};
pub use tokenizer::TokenScanner;
