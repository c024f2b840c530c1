//! CLI definitions for the `chikkar` command-line interface.
//!
//! Two subcommands: `search` to resolve words against a stack of synonym
//! dictionaries, and `build` to compile a CSV synonym source into a binary
//! dictionary. `search` is assumed when no subcommand is given.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chikkar", about = "Synonym-lookup engine", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve words to their synonyms
    Search(SearchArgs),

    /// Compile a CSV synonym source into a binary dictionary
    Build {
        /// CSV synonym source
        #[arg(short, long)]
        input: String,

        /// Output dictionary path
        #[arg(short, long, default_value = "synonym.dic")]
        output: String,

        /// Free-text description embedded in the dictionary header
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Synonym dictionary to load; repeatable, highest priority last.
    /// Omit to use the system dictionary.
    #[arg(short, long = "dictionary")]
    pub dictionary: Vec<String>,

    /// Enable verb/adjective synonyms in addition to nouns
    ///
    /// `-ev` is one flag, not `-e` followed by `-v`: `e` and `v` are both
    /// bundled short aliases for this single switch, so clap's short-flag
    /// bundling resolves `-ev` to it directly.
    #[arg(short = 'e', long = "ev", short_alias = 'v')]
    pub enable_verb: bool,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Input files to read words from, one per line; omit for stdin
    pub files: Vec<String>,
}
