//! Command-line interface for mmdt-tokenizer
//!
//! Usage:
//!   mmdt [OPTIONS] <TEXT>
//!   cat corpus.txt | mmdt --conll
//!
//! Each stdin line is tokenized as its own document.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use mmdt_tokenizer::export::{write_conll, write_rows};
use mmdt_tokenizer::{Dictionary, Engine, Tokenizer, TokenizerConfig};

fn print_help() {
    eprintln!(
        r#"mmdt - A rule-based Myanmar word tokenizer

USAGE:
    mmdt [OPTIONS] [TEXT]
    cat corpus.txt | mmdt [OPTIONS]

OPTIONS:
    -d, --dict <FILE>      Word list for the dictionary engine (one word per line)
    -c, --config <FILE>    JSON tokenizer configuration
    -e, --engine <NAME>    Segmentation engine: rule (default) or dictionary
    -s, --syllable         Output syllables instead of words
        --sentences        Output one line per sentence
    -j, --json             Output as JSON
        --conll            Output CSV, one token per row
        --rows             Output CSV, one row per document
        --sep <SEP>        Join tokens with SEP (default: a space)
    -h, --help             Show this help message

ENVIRONMENT:
    RUST_LOG               Log level (error, warn, info, debug, trace)

EXAMPLES:
    mmdt "သူသွားမယ်သို့မဟုတ်သူလာမယ်။"
    mmdt -e dictionary -d words.txt "ကျောင်းသားစာအုပ်ဖတ်တယ်"
    cat news.txt | mmdt --conll > tokens.csv
"#
    );
}

/// What to print for each document
#[derive(Clone, Copy, PartialEq, Eq)]
enum Unit {
    Words,
    Syllables,
    Sentences,
}

/// How to print it
#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    Plain,
    Json,
    Conll,
    Rows,
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut dict_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut engine: Option<Engine> = None;
    let mut unit = Unit::Words;
    let mut format = Format::Plain;
    let mut separator = " ".to_string();
    let mut text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-s" | "--syllable" => unit = Unit::Syllables,
            "--sentences" => unit = Unit::Sentences,
            "-j" | "--json" => format = Format::Json,
            "--conll" => format = Format::Conll,
            "--rows" => format = Format::Rows,
            flag @ ("-d" | "--dict" | "-c" | "--config" | "-e" | "--engine" | "--sep") => {
                i += 1;
                let value = match args.get(i) {
                    Some(v) => v.clone(),
                    None => fail(&format!("{} requires a value", flag)),
                };
                match flag {
                    "-d" | "--dict" => dict_path = Some(value),
                    "-c" | "--config" => config_path = Some(value),
                    "--sep" => separator = value,
                    _ => match value.parse() {
                        Ok(e) => engine = Some(e),
                        Err(e) => fail(&e.to_string()),
                    },
                }
            }
            arg if !arg.starts_with('-') => {
                text = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => TokenizerConfig::load(Path::new(&path)).unwrap_or_else(|e| fail(&e.to_string())),
        None => TokenizerConfig::default(),
    };
    if let Some(e) = engine {
        config.engine = e;
    }

    let dictionary = match dict_path {
        Some(path) => {
            Dictionary::load_or_default(Path::new(&path)).unwrap_or_else(|e| fail(&e.to_string()))
        }
        None => Dictionary::bundled(),
    };

    let tokenizer = Tokenizer::new(config, dictionary).unwrap_or_else(|e| fail(&e.to_string()));

    // One document from the argument, or one per stdin line
    let docs: Vec<String> = match text {
        Some(t) => vec![t],
        None => {
            let stdin = io::stdin();
            let mut lines = Vec::new();
            for line in stdin.lock().lines() {
                match line {
                    Ok(l) => lines.push(l),
                    Err(e) => fail(&format!("reading stdin: {}", e)),
                }
            }
            lines
        }
    };

    if docs.is_empty() {
        eprintln!("Error: No input text provided");
        print_help();
        std::process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match unit {
        Unit::Sentences => {
            let sentences: Vec<Vec<Vec<String>>> =
                docs.iter().map(|d| tokenizer.sentence_tokenize(d)).collect();
            print_sentences(&mut out, &sentences, format, &separator)
        }
        Unit::Words | Unit::Syllables => {
            let tokens: Vec<Vec<String>> = docs
                .iter()
                .map(|d| match unit {
                    Unit::Syllables => tokenizer.syllable_tokenize(d),
                    _ => tokenizer.word_tokenize(d),
                })
                .collect();
            print_tokens(&mut out, &tokens, format, &separator)
        }
    };

    if let Err(e) = result {
        fail(&format!("writing output: {}", e));
    }
}

fn print_tokens<W: Write>(out: &mut W, docs: &[Vec<String>], format: Format, sep: &str) -> io::Result<()> {
    match format {
        Format::Plain => {
            for doc in docs {
                writeln!(out, "{}", doc.join(sep))?;
            }
            Ok(())
        }
        Format::Json => {
            let json = if docs.len() == 1 {
                serde_json::to_string_pretty(&docs[0])
            } else {
                serde_json::to_string_pretty(docs)
            };
            writeln!(out, "{}", json.map_err(io::Error::other)?)
        }
        Format::Conll => write_conll(out, docs),
        Format::Rows => write_rows(out, docs),
    }
}

fn print_sentences<W: Write>(
    out: &mut W,
    docs: &[Vec<Vec<String>>],
    format: Format,
    sep: &str,
) -> io::Result<()> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(docs).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
        _ => {
            // Every sentence becomes its own document
            let flat: Vec<Vec<String>> = docs.iter().flatten().cloned().collect();
            print_tokens(out, &flat, format, sep)
        }
    }
}
