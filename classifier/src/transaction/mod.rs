//! # Transaction Vocabulary
//!
//! The code enumerations and serde models for everything the explorer
//! API says about a transaction. These types are the read-only input to
//! classification — the client never constructs or mutates them outside
//! of tests; they arrive fully formed inside API responses.
//!
//! ## Architecture
//!
//! ```text
//! action.rs  — TransactionAction: the eleven lifecycle/business event codes
//! context.rs — ContentMapping, InternalAction, and the TransactionContext
//!              payload sum type plus the TransactionRecord envelope
//! types.rs   — TransactionStatus and other small display enums
//! ```
//!
//! ## Wire Codes
//!
//! On the wire every enumeration is a bare integer. The enums here keep
//! `from_code` constructors returning `Option` instead of implementing
//! serde on themselves: an unknown integer must stay representable all
//! the way to the classifier, where it resolves to a sentinel label
//! rather than a parse failure.

pub mod action;
pub mod context;
pub mod types;

pub use action::TransactionAction;
pub use context::{
    ContentMapping, InternalAction, TransactionContext, TransactionRecord, TransactionSignatures,
};
pub use types::TransactionStatus;
