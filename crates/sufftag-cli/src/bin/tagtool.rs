use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sufftag_cli::commands::{config_ops, guess_ops};
use sufftag_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "tagtool", about = "Suffix-based tag guessing for unknown words")]
struct Cli {
    /// Write JSON-lines trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Guess tags for words (read from stdin, one per line, when none are given)
    Guess {
        /// Lexicon file: `word tag freq [tag freq ...]` per line
        #[arg(long)]
        lexicon: String,
        /// N-gram file with `tag freq` unigram lines
        #[arg(long)]
        ngrams: String,
        /// Settings TOML (defaults to the embedded settings)
        #[arg(long)]
        settings: Option<String>,
        /// Output one JSON object per word
        #[arg(long)]
        json: bool,
        /// Words to guess
        words: Vec<String>,
    },
    /// Print the surface-shape category of each word
    Classify {
        /// Words to classify
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let guard = init_tracing(cli.log_dir.as_deref());

    let result = match cli.command {
        Command::Guess {
            lexicon,
            ngrams,
            settings,
            json,
            words,
        } => guess_ops::guess(&lexicon, &ngrams, settings.as_deref(), json, &words),
        Command::Classify { words } => guess_ops::classify(&words),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    };

    if let Err(msg) = result {
        eprintln!("{msg}");
        drop(guard);
        process::exit(1);
    }
}
