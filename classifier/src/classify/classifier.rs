//! The classification functions.
//!
//! Two total functions over backend-produced data: action code to
//! label, payload context to a two-field classification record. No
//! I/O, no logging, no state — a [`Classifier`] is a label table and
//! nothing else, so it is freely shareable across threads.

use serde::{Deserialize, Serialize};

use super::vocabulary::Vocabulary;
use crate::transaction::{ContentMapping, InternalAction, TransactionAction, TransactionContext};

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// `identified_type` for payloads carrying user content.
pub const USER_TRANSACTION: &str = "User Transaction";

/// `identified_type` for node-internal payloads.
pub const INTERNAL_TRANSACTION: &str = "Internal Transaction";

/// Returned by [`Classifier::label_for_action`] for any code outside
/// the defined set. The trailing period is part of the contract — the
/// frontend rendered this string verbatim.
pub const UNIDENTIFIED_ACTION: &str = "Unidentified Action.";

/// `resolved_type_value` for any unrecognized content or internal code.
pub const UNIDENTIFIED: &str = "Unidentified";

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Outcome of classifying a payload context.
///
/// Both fields always carry text. There is no error variant on purpose:
/// an unrecognized code is a normal, displayable outcome, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// "User Transaction" or "Internal Transaction".
    pub identified_type: String,
    /// The resolved content/internal label, or "Unidentified".
    pub resolved_type_value: String,
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classifies transaction codes and payloads for display.
///
/// Construct one per wording (see [`Vocabulary`]) and reuse it; the
/// methods take `&self` and never mutate.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    vocabulary: Vocabulary,
}

impl Classifier {
    /// A classifier over the given label table.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The label table this classifier resolves against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The display label for a raw action code.
    ///
    /// Total over all of `i64`: the eleven defined codes map to their
    /// vocabulary labels, everything else to [`UNIDENTIFIED_ACTION`].
    pub fn label_for_action(&self, code: i64) -> String {
        match TransactionAction::from_code(code) {
            Some(action) => self.vocabulary.action_label(action).to_owned(),
            None => UNIDENTIFIED_ACTION.to_owned(),
        }
    }

    /// Classifies a payload context into its display record.
    ///
    /// Both output fields are always populated. Unknown content or
    /// internal codes — and internal payloads missing their `action`
    /// field — resolve to [`UNIDENTIFIED`].
    pub fn classify(&self, context: &TransactionContext) -> Classification {
        match context {
            TransactionContext::User { content_type } => Classification {
                identified_type: USER_TRANSACTION.to_owned(),
                resolved_type_value: match ContentMapping::from_code(*content_type) {
                    Some(mapping) => self.vocabulary.content_label(mapping).to_owned(),
                    None => UNIDENTIFIED.to_owned(),
                },
            },
            TransactionContext::Internal { action } => Classification {
                identified_type: INTERNAL_TRANSACTION.to_owned(),
                resolved_type_value: match action.and_then(InternalAction::from_code) {
                    Some(action) => self.vocabulary.internal_label(action).to_owned(),
                    None => UNIDENTIFIED.to_owned(),
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
