//! # Classification
//!
//! Turning raw codes and payloads into the strings the explorer
//! displays.
//!
//! ```text
//! vocabulary.rs — Vocabulary: the configurable label table, with the
//!                 two observed backend wordings as presets
//! classifier.rs — Classifier: the pure, total classification functions
//! ```
//!
//! The split matters: which wording a deployment uses is configuration
//! (the backend shipped builds saying "Student" and builds saying
//! "Applicant"); how a code resolves to a label is not.

pub mod classifier;
pub mod vocabulary;

pub use classifier::{
    Classification, Classifier, INTERNAL_TRANSACTION, UNIDENTIFIED, UNIDENTIFIED_ACTION,
    USER_TRANSACTION,
};
pub use vocabulary::{Vocabulary, VocabularyError};
