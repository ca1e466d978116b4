//! Command implementations for the Quiver CLI.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::completer::{CompleterKind, CompleterRegistry, create_completer};
use crate::config::CompletionConfig;
use crate::error::{QuiverError, Result};
use crate::record::{Record, load_jsonl};

impl From<KindArg> for CompleterKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Word => CompleterKind::Word,
            KindArg::EntireField => CompleterKind::EntireField,
            KindArg::Name => CompleterKind::Name,
            KindArg::Key => CompleterKind::Key,
        }
    }
}

/// Execute a CLI command.
pub fn execute_command(args: QuiverArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Complete(complete_args) => complete(complete_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
        Command::Config => output_result("Effective configuration", &config, &args),
    }
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(args: &QuiverArgs) -> Result<CompletionConfig> {
    match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            let config = CompletionConfig::load_from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            Ok(config)
        }
        None => Ok(CompletionConfig::default()),
    }
}

/// Load the records file, naming it in any error.
fn load_records(path: &Path) -> Result<Vec<Record>> {
    let records = load_jsonl(path)
        .with_context(|| format!("failed to load records from {}", path.display()))?;
    Ok(records)
}

/// Complete each prefix against one field.
fn complete(args: &CompleteArgs, config: &CompletionConfig, cli_args: &QuiverArgs) -> Result<()> {
    if args.limit == Some(0) {
        return Err(QuiverError::invalid_argument("--limit must be at least 1"));
    }
    let records = load_records(&args.records)?;

    let start_time = Instant::now();
    let kind = args
        .kind
        .map(CompleterKind::from)
        .unwrap_or_else(|| config.kind_for(&args.field));
    debug!("completing field '{}' with {kind} completer", args.field);

    let mut completer = create_completer(kind, &args.field, config);
    for record in &records {
        completer.add_record(record);
    }

    let completions = args
        .prefixes
        .iter()
        .map(|prefix| {
            let matches = completer.complete(prefix);
            let total_matches = matches.as_ref().map_or(0, Vec::len);
            let matches = matches.map(|mut words| {
                if let Some(limit) = args.limit {
                    words.truncate(limit);
                }
                words
            });
            PrefixCompletion {
                prefix: prefix.clone(),
                matches,
                total_matches,
            }
        })
        .collect();

    let result = CompletionResults {
        field: args.field.to_lowercase(),
        kind: kind.to_string(),
        label: completer.prefix_label().to_string(),
        records: records.len(),
        words: completer.index().len(),
        completions,
        duration_ms: u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
    };

    output_result("Completions", &result, cli_args)
}

/// Report word counts for the requested fields.
fn show_stats(args: &StatsArgs, config: &CompletionConfig, cli_args: &QuiverArgs) -> Result<()> {
    let records = load_records(&args.records)?;

    let fields = if args.fields.is_empty() {
        fields_in(&records)
    } else {
        args.fields.iter().map(|f| f.to_lowercase()).collect()
    };

    let mut registry = CompleterRegistry::for_fields(&fields, config)?;
    registry.add_records(&records);

    let result = StatsResults {
        records: records.len(),
        fields: registry.stats(),
    };

    output_result("Field statistics", &result, cli_args)
}

/// Every field name used by at least one record.
fn fields_in(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| record.field_names())
        .map(str::to_string)
        .collect()
}
