// wordcheck-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use log::{LevelFilter, debug};

/// Word-list file name looked for inside dictionary directories.
const DICT_FILE: &str = "wordlist.txt";

/// Environment variable naming a word list or a directory holding one.
pub const DICT_PATH_ENV: &str = "WORDCHECK_DICT_PATH";

/// Verbosity flags shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl LogArgs {
    /// Log level selected by the flags. `--quiet` wins over `-v`.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Install the global logger, writing `[LEVEL] message` lines to stderr.
pub fn init_logging(args: &LogArgs) {
    env_logger::Builder::new()
        .filter_level(args.level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Locate the word list to load.
///
/// Search order:
/// 1. `dict_path` argument (if provided; a directory means `wordlist.txt`
///    inside it). Returned even if missing so the loader reports it.
/// 2. `WORDCHECK_DICT_PATH` environment variable (file or directory)
/// 3. `~/.wordcheck/wordlist.txt`
/// 4. `/usr/share/dict/words`
/// 5. `wordlist.txt` in the current directory
pub fn find_dictionary(dict_path: Option<&Path>) -> Result<PathBuf, String> {
    if let Some(p) = dict_path {
        return Ok(dictionary_in(p));
    }

    let search_paths = build_search_paths();
    for candidate in &search_paths {
        if candidate.is_file() {
            debug!("using word list {}", candidate.display());
            return Ok(candidate.clone());
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Resolve a path that may name either a word list or a directory holding
/// `wordlist.txt`.
pub fn dictionary_in(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DICT_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Build the list of word-list candidates, in search order.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(dictionary_in(Path::new(&env_path)));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordcheck").join(DICT_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
