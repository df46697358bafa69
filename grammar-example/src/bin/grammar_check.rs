//! Counts the messages accepted by a rule grammar.
//!
//! ```text
//! grammar-check input.txt
//! grammar-check input.txt --overlay loops.txt --verbose
//! grammar-check grammar.txt --messages messages.txt --start 0 --tree
//! ```
//!
//! Without `--messages` the input holds grammar lines, a blank line, then
//! one message per line.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use grammar_framework::GrammarError;
use pipeline_core::{MessageSet, Recognizer, Verdict};

/// Check messages against a rule grammar.
#[derive(Parser, Debug)]
#[command(name = "grammar-check", version, about = "Check messages against a rule grammar")]
struct Cli {
    /// Message-set file, or grammar text when --messages is given
    input: PathBuf,

    /// File with one message per line
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Overlay grammar text replacing rules of the same name
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Name of the start rule
    #[arg(long, default_value = "0")]
    start: String,

    /// Print the verdict for every message
    #[arg(long)]
    verbose: bool,

    /// Print the first derivation of every accepted message
    #[arg(long)]
    tree: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the grammar, overlay and messages named on the command line.
fn load(cli: &Cli) -> Result<(Recognizer, Vec<String>), CliError> {
    let input = read(&cli.input)?;
    let set = match &cli.messages {
        Some(path) => MessageSet {
            grammar: input,
            messages: MessageSet::messages_from(&read(path)?),
        },
        None => MessageSet::parse(&input),
    };
    let overlay = match &cli.overlay {
        Some(path) => read(path)?,
        None => String::new(),
    };
    let recognizer = Recognizer::from_source(&set.grammar, &overlay, cli.start.as_str())?;
    Ok((recognizer, set.messages))
}

/// Writes the per-message report and returns the accepted count.
fn report(
    recognizer: &Recognizer,
    messages: &[String],
    cli: &Cli,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    if !cli.verbose && !cli.tree {
        return Ok(recognizer.count_accepted(messages));
    }

    let mut accepted = 0;
    for message in messages {
        let verdict = recognizer.check(message);
        if cli.verbose {
            match verdict {
                Verdict::Accepted { derivations } => {
                    writeln!(out, "accept  {message} ({derivations} derivations)")?
                }
                Verdict::Rejected => writeln!(out, "reject  {message}")?,
                Verdict::Unlexable { position } => {
                    writeln!(out, "unlexed {message} (at {position})")?
                }
            }
        }
        if verdict.is_accepted() {
            accepted += 1;
            if cli.tree {
                if let Some(tree) = recognizer.derivations(message).first() {
                    writeln!(out, "  {tree}")?;
                }
            }
        }
    }
    Ok(accepted)
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let (recognizer, messages) = load(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&recognizer, &messages, cli, &mut out)
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(accepted) => println!("{accepted}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
