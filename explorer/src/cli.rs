//! # CLI Interface
//!
//! Defines the command-line argument structure for `folio-explorer`
//! using `clap` derive. Supports four subcommands: `classify`, `fetch`,
//! `actions`, and `version`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use folio_classifier::config;

/// Folio explorer tooling.
///
/// Classifies credential-portfolio ledger transactions the way the web
/// explorer displays them — from a JSON dump, from stdin, or straight
/// off a running master node's explorer API.
#[derive(Parser, Debug)]
#[command(
    name = "folio-explorer",
    about = "Classify Folio ledger transactions for display",
    version,
    propagate_version = true
)]
pub struct ExplorerCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, env = "FOLIO_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the explorer binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify transaction records from a JSON file or stdin.
    Classify(ClassifyArgs),
    /// Fetch transactions from a node's explorer API and classify them.
    Fetch(FetchArgs),
    /// Print the code reference tables (actions, content, internal, status).
    Actions(ActionsArgs),
    /// Print version information and exit.
    Version,
}

/// Which wording to classify with.
///
/// Deployed backends exist in two wordings; neither is canonical, so
/// the choice belongs to whoever runs the tool.
#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
    /// Path to a JSON label table overriding the built-in wording.
    /// Only the labels that differ need to be listed.
    #[arg(long, env = "FOLIO_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Built-in wording preset matching a deployed backend build.
    #[arg(long, value_enum, conflicts_with = "vocabulary")]
    pub preset: Option<Preset>,
}

/// The two wordings observed in deployed backend builds.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Builds that call portfolio subjects "Students".
    Student,
    /// Builds that call portfolio subjects "Applicants".
    Applicant,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the JSON input. Reads stdin when omitted or set to "-".
    ///
    /// Accepts a single record, an array of records, or the
    /// `{"transactions": [...]}` envelope the explorer API returns.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Emit classified rows as JSON instead of an aligned table.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub vocab: VocabularyArgs,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// `host:port` of the master node's API.
    #[arg(long, env = "FOLIO_NODE", default_value_t = config::default_node_address())]
    pub node: String,

    /// Maximum number of rows to print.
    #[arg(long, default_value_t = config::TABLE_DEFAULT_ROW_COUNT)]
    pub limit: usize,

    /// Emit classified rows as JSON instead of an aligned table.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub vocab: VocabularyArgs,
}

/// Arguments for the `actions` subcommand.
#[derive(Args, Debug)]
pub struct ActionsArgs {
    #[command(flatten)]
    pub vocab: VocabularyArgs,
}
