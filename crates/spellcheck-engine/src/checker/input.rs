// Interactive decision source used by the document checker

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{Result, SpellError};

/// Message shown when a menu choice cannot be accepted.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please try again!";

/// The user side of an interactive check.
///
/// The checker shows a menu for every misspelled word through
/// [`present`](Self::present), then pulls whitespace-delimited tokens with
/// [`next_token`](Self::next_token) until one is a valid menu number. Each
/// rejected token is reported back through [`reject`](Self::reject).
pub trait DecisionInput {
    /// Show the choices for a misspelled word.
    ///
    /// Choice `0` keeps the word, `1` asks for a typed replacement and
    /// `2 + i` selects `candidates[i]`.
    fn present(&mut self, word: &str, candidates: &[String]) -> Result<()>;

    /// Read the next whitespace-delimited token.
    ///
    /// Returns [`SpellError::Exhausted`] when the input has ended.
    fn next_token(&mut self) -> Result<String>;

    /// Report that `input` was not a valid choice.
    fn reject(&mut self, input: &str) -> Result<()>;

    /// Read a replacement typed by the user (after choice `1`).
    fn replacement(&mut self) -> Result<String> {
        self.next_token()
    }
}

/// A [`DecisionInput`] reading answers from a text stream and printing
/// prompts to a writer, like a terminal session on stdin/stdout.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self {
            reader,
            prompts,
            pending: VecDeque::new(),
        }
    }

    /// Consume the input and return the prompt writer.
    pub fn into_prompts(self) -> W {
        self.prompts
    }
}

impl<R: BufRead, W: Write> DecisionInput for ConsoleInput<R, W> {
    fn present(&mut self, word: &str, candidates: &[String]) -> Result<()> {
        writeln!(
            self.prompts,
            "The word \"{word}\" is not in the dictionary. Enter the number of an action:"
        )?;
        writeln!(self.prompts, "0: Leave \"{word}\" unchanged")?;
        writeln!(self.prompts, "1: Type a replacement")?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.prompts, "{}: Replace with \"{candidate}\"", i + 2)?;
        }
        self.prompts.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(SpellError::Exhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn reject(&mut self, _input: &str) -> Result<()> {
        writeln!(self.prompts, "{INVALID_INPUT_MESSAGE}")?;
        self.prompts.flush()?;
        Ok(())
    }

    fn replacement(&mut self) -> Result<String> {
        write!(self.prompts, "Type the replacement: ")?;
        self.prompts.flush()?;
        self.next_token()
    }
}
