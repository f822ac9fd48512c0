// Copyright (c) 2026 Folio Labs. MIT License.
// See LICENSE for details.

//! # Folio Classifier — Core Library
//!
//! The classification core of the Folio credential-portfolio ledger
//! tooling. A Folio master node records every event on its chain as a
//! numbered transaction: node lifecycle events (consensus rounds, block
//! sync, registration) and entity-content events (portfolio records,
//! document referrals, organization registrations). The explorer
//! surfaces those transactions to people, and people do not read
//! integer codes.
//!
//! This crate turns the raw codes and payloads the node emits into the
//! labels the explorer displays. Nothing here talks to the network,
//! touches a disk, or keeps state — classification is a pair of total
//! functions over read-only data the backend produced.
//!
//! ## Architecture
//!
//! - **transaction** — The closed code enumerations ([`TransactionAction`],
//!   [`ContentMapping`], [`InternalAction`], [`TransactionStatus`]) and the
//!   serde models for explorer payloads ([`TransactionContext`],
//!   [`TransactionRecord`]).
//! - **classify** — The [`Classifier`] itself plus the configurable
//!   [`Vocabulary`] label table.
//! - **config** — Display and query constants shared with the explorer
//!   frontend: endpoint paths, row counts, default node address.
//!
//! ## Design Rules
//!
//! 1. Classification is total. Every integer — not just the documented
//!    codes — produces a label. Unknown codes resolve to the sentinel
//!    strings, never to a panic or an error.
//! 2. Payload shape is decided exactly once, at the serde boundary.
//!    Downstream code matches on [`TransactionContext`] variants and
//!    never re-checks field presence.
//! 3. The classifier does not log. Diagnostics belong to callers.
//!
//! [`TransactionAction`]: transaction::TransactionAction
//! [`ContentMapping`]: transaction::ContentMapping
//! [`InternalAction`]: transaction::InternalAction
//! [`TransactionStatus`]: transaction::TransactionStatus
//! [`TransactionContext`]: transaction::TransactionContext
//! [`TransactionRecord`]: transaction::TransactionRecord
//! [`Classifier`]: classify::Classifier
//! [`Vocabulary`]: classify::Vocabulary

pub mod classify;
pub mod config;
pub mod transaction;
