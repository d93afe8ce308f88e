// spellcheck-tokenize: Print the token stream of stdin.
//
// Each token is printed on its own line as `WORD` or `OTHER` followed by
// its text, with newlines and tabs escaped.
//
// Usage:
//   spellcheck-tokenize [--words-only]

use std::io::{self, Write};

use clap::Parser;
use spellcheck_cli::LogArgs;
use spellcheck_core::TokenKind;
use spellcheck_engine::TokenScanner;

#[derive(Debug, Parser)]
#[command(name = "spellcheck-tokenize", version, about = "Print the token stream of stdin")]
struct Cli {
    /// Only print word tokens
    #[arg(long)]
    words_only: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let scanner = TokenScanner::from_reader(io::stdin().lock())
        .unwrap_or_else(|e| spellcheck_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut count = 0usize;

    for token in scanner {
        let token =
            token.unwrap_or_else(|e| spellcheck_cli::fatal(&format!("failed to read stdin: {e}")));
        let Some(kind) = TokenKind::of_token(&token) else {
            continue;
        };
        count += 1;
        if cli.words_only && kind != TokenKind::Word {
            continue;
        }
        if let Err(e) = writeln!(out, "{:5} {}", kind.label(), escape(&token)) {
            spellcheck_cli::fatal(&e.to_string());
        }
    }

    if let Err(e) = out.flush() {
        spellcheck_cli::fatal(&e.to_string());
    }
    log::info!("{count} tokens");
}
