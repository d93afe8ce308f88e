// spellcheck: Interactively spell check a document.
//
// Every misspelled word is shown with its corrections on stdout and the
// choice is read from stdin. The corrected document is written to OUTPUT.
//
// Usage:
//   spellcheck [-d DICT] [-c CORRECTIONS] [-v...] DOCUMENT OUTPUT

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use spellcheck_cli::{LogArgs, SourceArgs};
use spellcheck_engine::{ConsoleInput, SpellChecker, SpellError};

#[derive(Debug, Parser)]
#[command(name = "spellcheck", version, about = "Interactively spell check a document")]
struct Cli {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    log: LogArgs,

    /// Document to check
    document: PathBuf,

    /// Where the corrected document is written
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let dictionary = spellcheck_cli::load_dictionary(&cli.sources.dictionary)
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));
    let corrector = spellcheck_cli::build_corrector(&dictionary, cli.sources.corrections.as_deref())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));

    let document = File::open(&cli.document).unwrap_or_else(|e| {
        spellcheck_cli::fatal(&format!("cannot open {}: {e}", cli.document.display()))
    });
    let output = File::create(&cli.output).unwrap_or_else(|e| {
        spellcheck_cli::fatal(&format!("cannot create {}: {e}", cli.output.display()))
    });

    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout().lock());
    let mut output = BufWriter::new(output);

    let checker = SpellChecker::new(&*corrector, &dictionary);
    match checker.check_document(BufReader::new(document), &mut input, &mut output) {
        Ok(summary) => log::info!(
            "{}: {} words, {} misspelled, {} replaced",
            cli.document.display(),
            summary.words,
            summary.misspellings,
            summary.replacements
        ),
        Err(SpellError::Exhausted) => {
            spellcheck_cli::fatal("input ended before every misspelling was decided")
        }
        Err(e) => spellcheck_cli::fatal(&format!("{}: {e}", cli.document.display())),
    }
}
