// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chikkar CLI: resolve words to synonyms, or build a dictionary from CSV.
//!
//! ```bash
//! # Resolve words read from stdin against the system dictionary
//! echo "開店" | chikkar search
//!
//! # Resolve against a stack of dictionaries, including verb synonyms
//! chikkar search -d synonym.dic -d user.dic --ev words.txt
//!
//! # Build a dictionary from CSV
//! chikkar build -i synonyms.csv -o synonym.dic -d "company thesaurus"
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use chikkar::builder::build_dictionary;
use chikkar::header::{Header, SYSTEM_DICT_VERSION_1};
use chikkar::{BinaryDictionary, Engine, Error};

mod cli;
use cli::{Cli, Commands, SearchArgs};

const DEFAULT_SYSTEM_DICT: &str = "synonym.dic";

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_search(SearchArgs {
            dictionary: Vec::new(),
            enable_verb: false,
            output: None,
            files: Vec::new(),
        }),
        Some(Commands::Search(args)) => run_search(args),
        Some(Commands::Build {
            input,
            output,
            description,
        }) => run_build(&input, &output, &description),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(args: SearchArgs) -> chikkar::Result<()> {
    let mut engine = Engine::new();
    if args.enable_verb {
        engine.enable_verb();
    }

    let dictionary_paths = if args.dictionary.is_empty() {
        vec![DEFAULT_SYSTEM_DICT.to_string()]
    } else {
        args.dictionary
    };
    for path in &dictionary_paths {
        let path = if path.is_empty() {
            DEFAULT_SYSTEM_DICT
        } else {
            path.as_str()
        };
        engine.add_dictionary(BinaryDictionary::open(path, true)?);
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(Error::Io)?),
        None => Box::new(io::stdout()),
    };

    if args.files.is_empty() {
        search_lines(&engine, BufReader::new(io::stdin()), &mut out)?;
    } else {
        for path in &args.files {
            let file = File::open(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::FileNotFound(std::path::PathBuf::from(path.as_str()))
                } else {
                    Error::Io(e)
                }
            })?;
            search_lines(&engine, BufReader::new(file), &mut out)?;
        }
    }
    Ok(())
}

fn search_lines(
    engine: &Engine,
    reader: impl BufRead,
    out: &mut dyn Write,
) -> chikkar::Result<()> {
    for line in reader.lines() {
        let word = line.map_err(Error::Io)?;
        let word = word.trim_end_matches(['\r', '\n']);
        let synonyms = engine.find(word, None)?;
        writeln!(out, "{}\t{}", word, synonyms.join(",")).map_err(Error::Io)?;
    }
    Ok(())
}

fn run_build(input: &str, output: &str, description: &str) -> chikkar::Result<()> {
    let csv = std::fs::read(input).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(input.into())
        } else {
            Error::Io(e)
        }
    })?;

    let mut file = File::create(output).map_err(Error::Io)?;
    let create_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let header = Header::new(SYSTEM_DICT_VERSION_1, create_time, description);
    file.write_all(&header.write()?).map_err(Error::Io)?;

    let group_count = build_dictionary(&csv, &mut file)?;
    let size = file.metadata().map_err(Error::Io)?.len();

    eprintln!("✅ Build complete");
    eprintln!("   {} groups, {} bytes written to {}", group_count, size, output);
    Ok(())
}
