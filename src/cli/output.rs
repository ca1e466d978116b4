//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuiverArgs};
use crate::completer::CompleterStats;
use crate::config::CompletionConfig;
use crate::error::Result;

/// Outcome of completing one prefix.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrefixCompletion {
    pub prefix: String,
    /// `None` when the prefix was too short to be served.
    pub matches: Option<Vec<String>>,
    /// Matches found before `--limit` was applied.
    pub total_matches: usize,
}

/// Result structure for the `complete` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub field: String,
    pub kind: String,
    pub label: String,
    pub records: usize,
    pub words: usize,
    pub completions: Vec<PrefixCompletion>,
    pub duration_ms: u64,
}

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResults {
    pub records: usize,
    pub fields: Vec<CompleterStats>,
}

/// Human-readable rendering of a command result.
///
/// The default renders the result as pretty-printed JSON.
pub trait HumanOutput: Serialize {
    fn output_human(&self, _args: &QuiverArgs) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

impl HumanOutput for CompletionConfig {}

impl HumanOutput for CompletionResults {
    fn output_human(&self, args: &QuiverArgs) -> Result<()> {
        if args.verbosity() > 1 {
            println!(
                "Field '{}' ({}), {} indexed words",
                self.field, self.kind, self.words
            );
        }

        for completion in &self.completions {
            for line in completion_lines(completion) {
                println!("{line}");
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!("Completion time: {}ms", self.duration_ms);
        }

        Ok(())
    }
}

impl HumanOutput for StatsResults {
    fn output_human(&self, _args: &QuiverArgs) -> Result<()> {
        println!("Field Statistics:");
        println!("════════════════");
        println!("Records: {}", self.records);

        if !self.fields.is_empty() {
            println!();
            for stats in &self.fields {
                println!(
                    "{:<20} {:<14} {:>8} words",
                    stats.field,
                    stats.kind.as_str(),
                    stats.words
                );
            }
        }

        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &QuiverArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.output_human(args)
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Human-readable lines for one completed prefix.
///
/// A rejected prefix and a prefix without matches get distinct lines.
pub fn completion_lines(completion: &PrefixCompletion) -> Vec<String> {
    let prefix = &completion.prefix;
    match &completion.matches {
        None => vec![format!("{prefix}: (rejected: prefix too short)")],
        Some(matches) if matches.is_empty() => vec![format!("{prefix}: (no matches)")],
        Some(matches) => {
            let mut lines = Vec::with_capacity(matches.len() + 2);
            lines.push(format!("{prefix}:"));
            lines.extend(matches.iter().map(|word| format!("  {word}")));
            if completion.total_matches > matches.len() {
                lines.push(format!(
                    "  ... {} more",
                    completion.total_matches - matches.len()
                ));
            }
            lines
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &QuiverArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
