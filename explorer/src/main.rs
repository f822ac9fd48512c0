// Copyright (c) 2026 Folio Labs. MIT License.
// See LICENSE for details.

//! # Folio Explorer CLI
//!
//! Entry point for the `folio-explorer` binary. Parses CLI arguments,
//! initializes logging, and classifies ledger transactions the way the
//! web explorer displays them.
//!
//! The binary supports four subcommands:
//!
//! - `classify` — classify transaction records from a JSON file or stdin
//! - `fetch`    — pull `/explorer/transactions` from a node and classify
//! - `actions`  — print the code reference tables
//! - `version`  — print build version information

mod cli;
mod fetch;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use folio_classifier::classify::{Classifier, Vocabulary};
use folio_classifier::config;
use folio_classifier::transaction::{
    ContentMapping, InternalAction, TransactionAction, TransactionRecord, TransactionStatus,
};

use cli::{Commands, ExplorerCli, Preset, VocabularyArgs};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ExplorerCli::parse();
    logging::init_logging(
        "folio_explorer=info,folio_classifier=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Classify(args) => classify_input(args),
        Commands::Fetch(args) => fetch_and_classify(args).await,
        Commands::Actions(args) => print_reference(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds the classifier from the vocabulary options shared by every
/// subcommand: explicit JSON file first, then preset, then the neutral
/// default wording.
fn build_classifier(args: &VocabularyArgs) -> Result<Classifier> {
    let vocabulary = match (&args.vocabulary, args.preset) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;
            let vocabulary = Vocabulary::from_json_str(&text)
                .with_context(|| format!("invalid vocabulary file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "vocabulary loaded");
            vocabulary
        }
        (None, Some(Preset::Student)) => Vocabulary::student(),
        (None, Some(Preset::Applicant)) => Vocabulary::applicant(),
        (None, None) => Vocabulary::default(),
    };
    Ok(Classifier::new(vocabulary))
}

/// `classify` — reads records from a file or stdin and prints one
/// classified row per record.
fn classify_input(args: cli::ClassifyArgs) -> Result<()> {
    let classifier = build_classifier(&args.vocab)?;

    let input = match &args.input {
        Some(path) if path.to_str() != Some("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))?,
        _ => std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
    };

    let records = TransactionRecord::parse_many(&input)
        .context("input is not a transaction record, an array of records, or an explorer envelope")?;
    tracing::info!(count = records.len(), "records parsed");

    print_records(&classifier, &records, records.len(), args.json);
    Ok(())
}

/// `fetch` — pulls the transaction listing from a node's explorer API
/// and prints the classified rows.
async fn fetch_and_classify(args: cli::FetchArgs) -> Result<()> {
    let classifier = build_classifier(&args.vocab)?;

    tracing::info!(node = %args.node, path = config::EXPLORER_TRANSACTIONS_PATH, "fetching transactions");
    let body = fetch::http_get(&args.node, config::EXPLORER_TRANSACTIONS_PATH).await?;

    let records = TransactionRecord::parse_many(&body)
        .context("node returned a response the explorer schema does not cover")?;
    tracing::info!(count = records.len(), "transactions fetched");

    print_records(&classifier, &records, args.limit, args.json);
    Ok(())
}

/// Prints classified records to stdout, as an aligned table or as a
/// JSON array for further tooling.
fn print_records(classifier: &Classifier, records: &[TransactionRecord], limit: usize, json: bool) {
    if json {
        let rows: Vec<serde_json::Value> = records
            .iter()
            .take(limit)
            .map(|record| {
                let classification = classifier.classify(&record.payload);
                serde_json::json!({
                    "tx_hash": record.tx_hash,
                    "action": classifier.label_for_action(record.action),
                    "identified_type": classification.identified_type,
                    "resolved_type_value": classification.resolved_type_value,
                })
            })
            .collect();
        // Serializing a Value tree cannot fail.
        println!("{}", serde_json::to_string_pretty(&rows).expect("rows serialize"));
        return;
    }

    if records.is_empty() {
        println!("No transactions.");
        return;
    }

    println!(
        "{:<18} {:<58} {:<21} {}",
        "TX HASH", "ACTION", "TYPE", "CONTEXT"
    );
    for record in records.iter().take(limit) {
        let classification = classifier.classify(&record.payload);
        println!(
            "{:<18} {:<58} {:<21} {}",
            short_hash(record.tx_hash.as_deref()),
            classifier.label_for_action(record.action),
            classification.identified_type,
            classification.resolved_type_value,
        );
    }
    if records.len() > limit {
        println!("({} more not shown)", records.len() - limit);
    }
}

/// First 16 hex chars of a hash, or a dash for transactions the node
/// has not hashed into a block yet.
fn short_hash(hash: Option<&str>) -> String {
    match hash {
        Some(h) if h.len() > 16 => format!("{}..", &h[..16]),
        Some(h) => h.to_string(),
        None => "-".to_string(),
    }
}

/// `actions` — prints every code table the classifier knows.
fn print_reference(args: cli::ActionsArgs) -> Result<()> {
    let classifier = build_classifier(&args.vocab)?;
    let vocabulary = classifier.vocabulary();

    println!("Transaction actions:");
    for action in TransactionAction::ALL {
        println!("  {:>3}  {}", action.code(), vocabulary.action_label(action));
    }

    println!();
    println!("User transaction content types:");
    for mapping in ContentMapping::ALL {
        println!("  {:>3}  {}", mapping.code(), vocabulary.content_label(mapping));
    }

    println!();
    println!("Internal transaction actions:");
    for action in InternalAction::ALL {
        println!("  {:>3}  {}", action.code(), vocabulary.internal_label(action));
    }

    println!();
    println!("Transaction statuses:");
    for status in TransactionStatus::ALL {
        println!("  {:>3}  {}", status.code(), status);
    }

    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("folio-explorer {}", env!("CARGO_PKG_VERSION"));
    println!("rustc          {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vocab_args(vocabulary: Option<std::path::PathBuf>, preset: Option<Preset>) -> VocabularyArgs {
        VocabularyArgs { vocabulary, preset }
    }

    #[test]
    fn classifier_defaults_to_superset_wording() {
        let classifier = build_classifier(&vocab_args(None, None)).expect("default");
        assert_eq!(
            classifier.label_for_action(7),
            "Institution Student/Applicant Generation"
        );
    }

    #[test]
    fn classifier_presets_select_build_wording() {
        let student = build_classifier(&vocab_args(None, Some(Preset::Student))).unwrap();
        assert_eq!(student.label_for_action(7), "Institution Student Generation");

        let applicant = build_classifier(&vocab_args(None, Some(Preset::Applicant))).unwrap();
        assert_eq!(
            applicant.label_for_action(7),
            "Institution Applicant Generation"
        );
    }

    #[test]
    fn classifier_loads_vocabulary_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"organization_register": "Org Authority Register"}}"#)
            .expect("write vocabulary");

        let classifier =
            build_classifier(&vocab_args(Some(file.path().to_path_buf()), None)).unwrap();
        assert_eq!(classifier.label_for_action(10), "Org Authority Register");
        // Labels not overridden keep the default wording.
        assert_eq!(classifier.label_for_action(2), "Node Registration");
    }

    #[test]
    fn invalid_vocabulary_file_reports_the_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"block_sync": ""}}"#).expect("write vocabulary");

        let err = build_classifier(&vocab_args(Some(file.path().to_path_buf()), None)).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid vocabulary file"));
    }

    #[test]
    fn short_hash_truncates_long_hashes() {
        assert_eq!(
            short_hash(Some("0123456789abcdef0123456789abcdef")),
            "0123456789abcdef.."
        );
        assert_eq!(short_hash(Some("abc")), "abc");
        assert_eq!(short_hash(None), "-");
    }
}
