//! Command-line interface for jade-lex.
//!
//! A thin debug wrapper around the library's `dump`/`Lexer` surface,
//! grounded on the teacher's own `lex` binary (`src/bin/lex.rs` in
//! `lex-fmt-core`), scaled down to this crate's scope: there is no
//! pipeline/config/viewer surface here, only "lex a file and show me the
//! tokens" (spec §1 keeps the parser, compiler and CLI tooling out of
//! scope; this binary exists purely so the library is runnable by hand).
//!
//! Usage:
//!   jade-lex dump <path> [--format dump|json]

use clap::{Arg, Command};
use jade_lex::{dump, Lexer, LexerOptions};
use std::fs;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("jade-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex a Jade/Pug-style template and print its token stream")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Lex a file and print its tokens")
                .arg(
                    Arg::new("path")
                        .help("Path to the template file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: dump (linearized) or json")
                        .default_value("dump"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("dump", dump_matches)) => {
            let path = dump_matches.get_one::<String>("path").unwrap();
            let format = dump_matches.get_one::<String>("format").unwrap();
            handle_dump_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn handle_dump_command(path: &str, format: &str) {
    let source = fs::read_to_string(PathBuf::from(path)).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    match format {
        "dump" => match dump(&source, LexerOptions::default()) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        "json" => {
            let tokens: Result<Vec<_>, _> =
                Lexer::new(&source, LexerOptions::default()).collect();
            match tokens {
                Ok(tokens) => match serde_json::to_string_pretty(&tokens) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Error formatting tokens: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        other => {
            eprintln!("Format '{}' not supported. Use 'dump' or 'json'.", other);
            std::process::exit(1);
        }
    }
}
