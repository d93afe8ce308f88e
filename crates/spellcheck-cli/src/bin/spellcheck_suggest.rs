// spellcheck-suggest: Print corrections for words.
//
// Words come from the command line, or from stdin (one per line) when no
// words are given. Correct words and non-words are reported as such.
//
// Usage:
//   spellcheck-suggest [-d DICT] [-c CORRECTIONS] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use spellcheck_cli::{LogArgs, SourceArgs};

#[derive(Debug, Parser)]
#[command(name = "spellcheck-suggest", version, about = "Print corrections for words")]
struct Cli {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    log: LogArgs,

    /// Words to look up; read from stdin when omitted
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let dictionary = spellcheck_cli::load_dictionary(&cli.sources.dictionary)
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));
    let corrector = spellcheck_cli::build_corrector(&dictionary, cli.sources.corrections.as_deref())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if cli.words.is_empty() {
        io::stdin().lock().lines().try_for_each(|line| {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }
            spellcheck_cli::write_suggestions(word, &dictionary, &*corrector, &mut out)
        })
    } else {
        cli.words.iter().try_for_each(|word| {
            spellcheck_cli::write_suggestions(word, &dictionary, &*corrector, &mut out)
        })
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        spellcheck_cli::fatal(&e.to_string());
    }
}
