// spellcheck-cli: shared utilities for CLI tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args};
use env_logger::Builder;
use log::LevelFilter;

use spellcheck_engine::{Corrector, Dictionary, FileCorrector, SpellError, SwapCorrector};

/// Environment variable consulted when `--dictionary` is not given.
pub const DICTIONARY_ENV: &str = "SPELLCHECK_DICTIONARY";

/// Environment variable consulted when `--corrections` is not given.
pub const CORRECTIONS_ENV: &str = "SPELLCHECK_CORRECTIONS";

/// Options selecting the word list and the correction strategy.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Dictionary file: any text, every word in it is considered correct
    #[arg(short, long, env = DICTIONARY_ENV, value_name = "PATH")]
    pub dictionary: PathBuf,

    /// Correction table (`misspelling,correction` lines). Without it,
    /// corrections come from swapping adjacent letters.
    #[arg(short, long, env = CORRECTIONS_ENV, value_name = "PATH")]
    pub corrections: Option<PathBuf>,
}

/// Logging verbosity shared by every tool.
#[derive(Debug, Clone, Copy, Args)]
pub struct LogArgs {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    pub fn level(self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Install the global logger. Log lines go to stderr.
    pub fn init(self) {
        Builder::new()
            .filter_level(self.level())
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .init();
    }
}

/// Load the dictionary, formatting errors for display.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, String> {
    let dictionary = Dictionary::load_from_file(path)
        .map_err(|e| format!("failed to load dictionary {}: {e}", path.display()))?;
    log::info!("dictionary {} has {} words", path.display(), dictionary.len());
    Ok(dictionary)
}

/// Create the corrector selected by the command line.
///
/// A correction table gives a [`FileCorrector`]; no table gives a
/// [`SwapCorrector`] over `dictionary`.
pub fn build_corrector<'a>(
    dictionary: &'a Dictionary,
    corrections: Option<&Path>,
) -> Result<Box<dyn Corrector + 'a>, String> {
    match corrections {
        Some(path) => {
            let corrector = FileCorrector::load_from_file(path).map_err(|e| {
                format!("failed to load correction table {}: {e}", path.display())
            })?;
            log::info!(
                "using correction table {} ({} entries)",
                path.display(),
                corrector.len()
            );
            Ok(Box::new(corrector))
        }
        None => {
            log::info!("using adjacent-swap corrections");
            Ok(Box::new(SwapCorrector::new(dictionary)))
        }
    }
}

/// Write the suggestion report for one word.
///
/// Prints `word (correct)` for dictionary words, `word: (not a word)` for
/// input the correctors reject, `word: (no suggestions)` when nothing is
/// proposed, and otherwise `word:` followed by one indented line per
/// correction.
pub fn write_suggestions(
    word: &str,
    dictionary: &Dictionary,
    corrector: &dyn Corrector,
    out: &mut impl Write,
) -> io::Result<()> {
    if dictionary.is_word(word) {
        return writeln!(out, "{word} (correct)");
    }
    let corrections = match corrector.corrections(word) {
        Ok(corrections) => corrections,
        Err(SpellError::InvalidArgument(_)) => {
            log::warn!("{word:?} is not a word");
            return writeln!(out, "{word}: (not a word)");
        }
        Err(SpellError::Io(e)) => return Err(e),
        Err(e) => return Err(io::Error::other(e.to_string())),
    };
    if corrections.is_empty() {
        return writeln!(out, "{word}: (no suggestions)");
    }
    writeln!(out, "{word}:")?;
    for correction in &corrections {
        writeln!(out, "  {correction}")?;
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
