//! Console front end for the word reverser.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for one word
//! cargo run
//!
//! # Reverse a word without prompting
//! cargo run -- --word mountain
//!
//! # Keep prompting until end of input
//! cargo run -- --repeat
//! ```
//!
//! # Environment Variables
//!
//! - `LOG_ENABLED`: log every reversal at `INFO`
//! - `APPSETTINGS_PATH`: settings file (default `appsettings.json`)
//! - `RUST_LOG`, `LOG_FORMAT`: subscriber level and format

use word_reverser::application::services::WordService;
use word_reverser::config;
use word_reverser::domain::LogSink;
use word_reverser::infrastructure::logger::{InstrumentedLogger, TracingSink};
use word_reverser::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};
use std::sync::Arc;

const PROMPT: &str = "Enter a word to reverse it";

type Service = WordService<InstrumentedLogger, InstrumentedLogger>;

/// Reverses a word read from standard input.
#[derive(Parser)]
#[command(name = "word-reverser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word to reverse (skips the prompt)
    #[arg(short, long)]
    word: Option<String>,

    /// Override `LogOptions.IsLogEnabled`
    #[arg(long)]
    log_enabled: Option<bool>,

    /// Keep prompting until end of input
    #[arg(short, long, conflicts_with = "word")]
    repeat: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load().context("Failed to load configuration")?;
    config.apply_cli_override(cli.log_enabled);

    telemetry::init(&config)?;
    config.print_summary();

    let sink: Arc<dyn LogSink> = Arc::new(TracingSink::new());
    let logger = Arc::new(InstrumentedLogger::new(config.log_options, sink));
    let service = WordService::new(Arc::clone(&logger), Arc::clone(&logger));

    if let Some(word) = cli.word {
        let reversed = service.reverse(word.as_str())?;
        print_result(&reversed);
        return Ok(());
    }

    if cli.repeat {
        run_repeat(&service)?;
    } else {
        let word = read_word()?;
        let reversed = service.reverse(word.as_deref())?;
        print_result(&reversed);
    }

    tracing::debug!("Word cache holds {} word(s)", logger.cached_words());

    Ok(())
}

/// Prompts until end of input, reporting each failed request and moving on.
fn run_repeat(service: &Service) -> Result<()> {
    while let Some(word) = read_word()? {
        match service.reverse(word.as_str()) {
            Ok(reversed) => print_result(&reversed),
            Err(e) => {
                tracing::debug!(code = e.code(), details = %e.details(), "Reversal failed");
                let label = styled("error:", io::stderr().is_terminal(), |t| t.red().bold());
                eprintln!("{} {}", label, e);
            }
        }
    }

    Ok(())
}

/// Reads one line, returning `None` at end of input.
///
/// Uses an interactive prompt on a terminal and a plain line read otherwise.
/// The line terminator is removed; nothing else is trimmed.
fn read_word() -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        let word: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read word")?;
        return Ok(Some(word));
    }

    println!("{}: ", PROMPT);

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read word")?;
    if read == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Some(line))
}

fn print_result(reversed: &str) {
    let header = styled("The word in reverse is:", io::stdout().is_terminal(), |t| {
        t.bright_blue().bold()
    });
    println!("{}", header);
    println!("{}", reversed);
}

/// Applies `style` only when the target stream is a terminal.
fn styled(text: &str, is_terminal: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if is_terminal {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
