// wordcheck-spell: Check spelling of tokens from stdin.
//
// Reads one token per line from stdin and reports whether each is
// correctly spelled:
//   C: token    (correct)
//   W: token    (wrong / misspelled)
//
// Usage:
//   wordcheck-spell [-d DICT_PATH] [OPTIONS]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use wordcheck::SpellHandle;
use wordcheck_cli::LogArgs;

/// Check spelling of tokens read from stdin, one per line
#[derive(Parser, Debug)]
#[command(name = "wordcheck-spell", version, about, long_about = None)]
struct Cli {
    /// Word list, or a directory containing wordlist.txt
    #[arg(short, long = "dict-path", value_name = "PATH")]
    dict_path: Option<PathBuf>,

    /// Append the rule that decided each verdict
    #[arg(short, long)]
    explain: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli = Cli::parse();
    wordcheck_cli::init_logging(&cli.log);

    let path = wordcheck_cli::find_dictionary(cli.dict_path.as_deref())
        .unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    let handle = SpellHandle::from_path(&path).unwrap_or_else(|e| wordcheck_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().split(b'\n') {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let token = line.trim_ascii();
        if token.is_empty() {
            continue;
        }

        let verdict = handle.verdict(token);
        let mark = if verdict.is_correct() { 'C' } else { 'W' };
        let text = String::from_utf8_lossy(token);
        let _ = if cli.explain {
            writeln!(out, "{mark}: {text} ({verdict})")
        } else {
            writeln!(out, "{mark}: {text}")
        };
    }
}
