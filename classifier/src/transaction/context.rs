//! Payload context types for explorer transactions.
//!
//! The backend distinguishes user-submitted transactions from
//! node-internal ones by field presence: a payload carrying a
//! `content_type` key is user content, anything else is internal
//! bookkeeping keyed by an `action` field. That ambiguity is resolved
//! exactly once, here, at the serde boundary — [`TransactionContext`]
//! deserializes into an explicit tagged sum and downstream code never
//! checks for field existence again.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContentMapping
// ---------------------------------------------------------------------------

/// Record shape of a user-submitted transaction payload.
///
/// The subject of a record is the person whose portfolio the chain
/// tracks — one backend build calls them "students", another
/// "applicants". The enum stays neutral; wording is the
/// [`Vocabulary`](crate::classify::Vocabulary)'s problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentMapping {
    /// The subject's base portfolio record.
    SubjectBase,
    /// A log/credential record issued to the subject by an organization.
    SubjectLog,
    /// Additional info or remarks attached to the subject.
    SubjectAdditional,
    /// An organization's base registration record.
    OrganizationBase,
}

impl ContentMapping {
    /// All defined content mappings, in wire-code order.
    pub const ALL: [ContentMapping; 4] = [
        Self::SubjectBase,
        Self::SubjectLog,
        Self::SubjectAdditional,
        Self::OrganizationBase,
    ];

    /// The integer code the backend emits for this mapping.
    pub const fn code(self) -> i64 {
        match self {
            Self::SubjectBase => 1,
            Self::SubjectLog => 2,
            Self::SubjectAdditional => 3,
            Self::OrganizationBase => 4,
        }
    }

    /// Decodes a wire code; unknown integers return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::SubjectBase),
            2 => Some(Self::SubjectLog),
            3 => Some(Self::SubjectAdditional),
            4 => Some(Self::OrganizationBase),
            _ => None,
        }
    }
}

impl fmt::Display for ContentMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SubjectBase => "SubjectBase",
            Self::SubjectLog => "SubjectLog",
            Self::SubjectAdditional => "SubjectAdditional",
            Self::OrganizationBase => "OrganizationBase",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// InternalAction
// ---------------------------------------------------------------------------

/// Payload shape of a node-internal transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalAction {
    /// Consensus context exchanged between nodes.
    Consensus,
    /// Context initialization (registration, genesis).
    Init,
    /// State sync driven by node-to-node communication.
    Sync,
}

impl InternalAction {
    /// All defined internal actions, in wire-code order.
    pub const ALL: [InternalAction; 3] = [Self::Consensus, Self::Init, Self::Sync];

    /// The integer code the backend emits for this action.
    pub const fn code(self) -> i64 {
        match self {
            Self::Consensus => 1,
            Self::Init => 2,
            Self::Sync => 3,
        }
    }

    /// Decodes a wire code; unknown integers return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Consensus),
            2 => Some(Self::Init),
            3 => Some(Self::Sync),
            _ => None,
        }
    }
}

impl fmt::Display for InternalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Consensus => "Consensus",
            Self::Init => "Init",
            Self::Sync => "Sync",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// TransactionContext
// ---------------------------------------------------------------------------

/// A transaction payload as delivered by the explorer API.
///
/// Deserialization tries the [`User`](Self::User) variant first:
/// any JSON object with a `content_type` key is user content, whatever
/// else it carries. Objects without one fall through to
/// [`Internal`](Self::Internal), whose fields are all optional — so
/// even an empty object parses, and classifies as "Unidentified"
/// instead of failing.
///
/// Raw integer codes are kept raw here. Decoding happens at
/// classification time via [`ContentMapping::from_code`] and
/// [`InternalAction::from_code`], which is what keeps unknown backend
/// codes representable end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionContext {
    /// User-submitted content, marked by the presence of `content_type`.
    User {
        /// Raw [`ContentMapping`] wire code.
        content_type: i64,
    },
    /// Node-internal bookkeeping.
    Internal {
        /// Raw [`InternalAction`] wire code. Absent on a few malformed
        /// historical payloads; classification treats absence like an
        /// unknown code.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<i64>,
    },
}

impl TransactionContext {
    /// `true` if this payload is user-submitted content.
    pub const fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    /// The decoded content mapping, when this is a user payload with a
    /// known code.
    pub fn content_mapping(&self) -> Option<ContentMapping> {
        match self {
            Self::User { content_type } => ContentMapping::from_code(*content_type),
            Self::Internal { .. } => None,
        }
    }

    /// The decoded internal action, when this is an internal payload
    /// with a known code.
    pub fn internal_action(&self) -> Option<InternalAction> {
        match self {
            Self::User { .. } => None,
            Self::Internal { action } => action.and_then(InternalAction::from_code),
        }
    }
}

// ---------------------------------------------------------------------------
// TransactionRecord
// ---------------------------------------------------------------------------

/// Signature pair attached to every on-chain transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignatures {
    /// Hex-encoded signature over the raw payload.
    pub raw: String,
    /// Hex-encoded signature over the encrypted payload.
    pub encrypted: String,
}

/// One transaction as returned by `GET /explorer/transactions`.
///
/// `action` stays a raw integer for the same reason the context codes
/// do. Fields the explorer adds in newer backend builds are ignored on
/// deserialization rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction hash. The node omits it for transactions still being
    /// mined into a block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// Raw [`TransactionAction`](super::TransactionAction) wire code.
    pub action: i64,
    /// Address UUID of the sender.
    pub from_address: String,
    /// Address UUID of the receiver; `None` for broadcast-style events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    /// The classified payload context.
    pub payload: TransactionContext,
    /// Signatures over the payload.
    pub signatures: TransactionSignatures,
}

impl TransactionRecord {
    /// Parses explorer JSON into records, accepting the three shapes the
    /// API and its dumps use: a single record object, a bare array of
    /// records, or a `{"transactions": [...]}` envelope.
    pub fn parse_many(input: &str) -> Result<Vec<TransactionRecord>, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RecordsInput {
            Envelope {
                transactions: Vec<TransactionRecord>,
            },
            Many(Vec<TransactionRecord>),
            One(Box<TransactionRecord>),
        }

        Ok(match serde_json::from_str(input)? {
            RecordsInput::Envelope { transactions } => transactions,
            RecordsInput::Many(records) => records,
            RecordsInput::One(record) => vec![*record],
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
