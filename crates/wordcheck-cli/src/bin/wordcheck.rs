// wordcheck: Count the misspelled words of a document.
//
// Loads a word list, scans the document, and prints the number of
// misspelled tokens. With --list the stored misspelled words follow, one
// per line; --format json prints the whole report instead.
//
// Usage:
//   wordcheck [OPTIONS] <DICTIONARY> <FILE>

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::error;
use wordcheck::{CheckError, CheckOptions, DocumentReport, SpellHandle};
use wordcheck_cli::LogArgs;

/// Report the misspelled words of a document
#[derive(Parser, Debug)]
#[command(name = "wordcheck", version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Document to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also print each stored misspelled word
    #[arg(short, long)]
    list: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Maximum number of misspelled words to keep
    #[arg(long, value_name = "N", conflicts_with = "no_limit")]
    capacity: Option<usize>,

    /// Keep every misspelled word
    #[arg(long)]
    no_limit: bool,

    /// Split tokens on any whitespace, not only on spaces
    #[arg(long)]
    any_whitespace: bool,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    fn options(&self) -> CheckOptions {
        let defaults = CheckOptions::default();
        let misspelled_capacity = if self.no_limit {
            None
        } else {
            self.capacity.or(defaults.misspelled_capacity)
        };
        CheckOptions {
            misspelled_capacity,
            split_on_any_whitespace: self.any_whitespace,
            ..defaults
        }
    }
}

fn main() {
    let cli = Cli::parse();
    wordcheck_cli::init_logging(&cli.log);

    let handle = match SpellHandle::from_path_with(&cli.dictionary, cli.options()) {
        Ok(h) => h,
        Err(e) => {
            error!("{e}");
            eprintln!("Invalid dictionary file");
            process::exit(1);
        }
    };

    let report = match handle.check_path(&cli.file) {
        Ok(r) => r,
        Err(e @ CheckError::DocumentOpen { .. }) => {
            error!("{e}");
            eprintln!("Invalid file to check spelling for.");
            process::exit(1);
        }
        Err(e) => wordcheck_cli::fatal(&e.to_string()),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = match cli.format {
        OutputFormat::Human => write_human(&mut out, &report, cli.list),
        OutputFormat::Json => write_json(&mut out, &report),
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        wordcheck_cli::fatal(&format!("failed to write output: {e}"));
    }
}

fn write_human(out: &mut impl Write, report: &DocumentReport, list: bool) -> io::Result<()> {
    writeln!(out, "{} words misspelled", report.count)?;
    if list {
        for word in &report.misspelled {
            writeln!(out, "{word}")?;
        }
        if report.is_truncated() {
            writeln!(
                out,
                "({} more not listed)",
                report.count - report.misspelled.len()
            )?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &DocumentReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
