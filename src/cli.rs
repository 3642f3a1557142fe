//! CLI argument definitions and the interactive file prompt.
//!
//! The binary takes at most one positional argument, the roster file path.
//! When it is omitted the user is prompted for one on standard input.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Longest file path accepted from the interactive prompt, in bytes.
const MAX_PROMPT_PATH_BYTES: usize = 255;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the roster file; prompted for interactively when omitted
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the source path, prompting on standard input when none was given.
pub fn resolve_source_path(explicit_path: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = explicit_path {
        return Ok(path);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_for_path(&mut input, &mut io::stdout())
}

/// Prompt for a file name and read one whitespace-delimited token, capped at
/// `MAX_PROMPT_PATH_BYTES`.
fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, Box<dyn Error>> {
    write!(output, "Please enter the name of the text file: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let token = line.split_whitespace().next().unwrap_or("");
    if token.is_empty() {
        return Err("No file name entered".into());
    }

    Ok(PathBuf::from(truncate_to_bytes(token, MAX_PROMPT_PATH_BYTES)))
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
