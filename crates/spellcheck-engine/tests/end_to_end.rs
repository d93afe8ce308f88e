//! End-to-end tests: load the fixture dictionary and correction table from
//! `tests/data`, check a document with scripted answers, and compare the
//! result with the expected output.
//!
//! Run: cargo test -p spellcheck-engine --test end_to_end

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use spellcheck_engine::{
    ConsoleInput, Corrector, Dictionary, FileCorrector, SpellChecker, SpellError, SwapCorrector,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn read_data(name: &str) -> String {
    let path = data_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

/// Check `document` with the given answers; returns output and prompts.
fn run(
    corrector: &dyn Corrector,
    dictionary: &Dictionary,
    document: &str,
    answers: &str,
) -> (String, String) {
    let mut input = ConsoleInput::new(answers.as_bytes(), Vec::new());
    let mut output = Vec::new();
    SpellChecker::new(corrector, dictionary)
        .check_document(document.as_bytes(), &mut input, &mut output)
        .expect("check_document failed");
    (
        String::from_utf8(output).unwrap(),
        String::from_utf8(input.into_prompts()).unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[test]
fn fixture_dictionary_counts_unique_words() {
    let dict = Dictionary::load_from_file(data_path("dictionary.txt")).unwrap();
    // "Dog" and "THE" repeat earlier entries in a different case.
    assert_eq!(dict.len(), 18);
    assert!(dict.is_word("IT'S"));
    assert!(!dict.is_word("quikc"));
}

#[test]
fn fixture_corrections_load() {
    let corrector = FileCorrector::load_from_file(data_path("corrections.txt")).unwrap();
    assert_eq!(corrector.len(), 5);
    let ther: Vec<String> = corrector.corrections("Ther").unwrap().into_iter().collect();
    assert_eq!(ther, vec!["Their", "There"]);
}

#[test]
fn missing_fixture_is_file_not_found() {
    let result = Dictionary::load_from_file(data_path("no-such-dictionary.txt"));
    assert!(matches!(result, Err(SpellError::FileNotFound(_))));
}

// ---------------------------------------------------------------------------
// Document checks
// ---------------------------------------------------------------------------

#[test]
fn file_corrector_session_matches_expected_output() {
    let dict = Dictionary::load_from_file(data_path("dictionary.txt")).unwrap();
    let corrector = FileCorrector::load_from_file(data_path("corrections.txt")).unwrap();

    let (output, prompts) = run(
        &corrector,
        &dict,
        &read_data("document.txt"),
        &read_data("answers.txt"),
    );

    assert_eq!(output, read_data("expected.txt"));
    // "nonsense" and "9" were refused before "3" was accepted.
    assert_eq!(prompts.matches("Invalid input. Please try again!").count(), 2);
    assert!(prompts.contains("2: Replace with \"in spite\""));
}

#[test]
fn swap_corrector_session() {
    let dict = Dictionary::load_from_file(data_path("dictionary.txt")).unwrap();
    let swap = SwapCorrector::new(&dict);

    // "Teh" -> "The" via swap; "quikc" -> "quick" via swap; "Hte" -> "The".
    let (output, _) = run(&swap, &dict, "Teh quikc, Hte fox.", "2\n2\n2\n");
    assert_eq!(output, "The quick, The fox.");
}

#[test]
fn quick_fox_scenario() {
    let dict = Dictionary::from_words(["the", "quick", "fox"]);
    let corrector = FileCorrector::from_reader("quikc,quick".as_bytes()).unwrap();
    let (output, _) = run(&corrector, &dict, "the quikc fox", "2\n");
    assert_eq!(output, "the quick fox");
}

#[test]
fn correct_document_round_trips_from_file() {
    let dict = Dictionary::load_from_file(data_path("dictionary.txt")).unwrap();
    let corrector = FileCorrector::load_from_file(data_path("corrections.txt")).unwrap();
    let expected = "The quick brown fox jumps over THE lazy dog.\n\tIt's their heat!  ";

    let document = File::open(data_path("dictionary.txt")).unwrap();
    let mut output = Vec::new();
    let mut input = ConsoleInput::new(&b""[..], std::io::sink());
    // The dictionary file itself contains only known words.
    SpellChecker::new(&corrector, &dict)
        .check_document(BufReader::new(document), &mut input, &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), read_data("dictionary.txt"));

    let (output, prompts) = run(&corrector, &dict, expected, "");
    assert_eq!(output, expected);
    assert!(prompts.is_empty());
}
