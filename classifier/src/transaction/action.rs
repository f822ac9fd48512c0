//! Transaction action codes.
//!
//! Every transaction on a Folio chain carries an integer `action` code
//! identifying the lifecycle or business event it records. Codes 1–6
//! are emitted by the nodes themselves (consensus, registration, sync);
//! codes 7–11 are entity-content events submitted through the
//! dashboard.

use std::fmt;

// ---------------------------------------------------------------------------
// TransactionAction
// ---------------------------------------------------------------------------

/// Discriminant for the event a transaction records.
///
/// The integer codes are a wire contract with the master node backend.
/// They are dense (1..=11) today, but nothing downstream may rely on
/// that — new codes appear whenever the backend grows a feature, and
/// classification must keep working across the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionAction {
    /// A node opened a consensus round.
    ConsensusInit,
    /// A node registered itself with the master node.
    NodeRegister,
    /// The genesis block was created.
    GenesisBlockInit,
    /// A node synced blocks as part of consensus.
    BlockSync,
    /// A consensus negotiation was confirmed and started.
    NegotiationStart,
    /// A consensus negotiation finished processing.
    NegotiationConclude,
    /// An institution generated a subject (student/applicant) record.
    GenerateSubjectRecord,
    /// An institution referred a new document or important info to a subject.
    ReferDocument,
    /// An institution referred extra info to a subject.
    ReferExtraInfo,
    /// An organization authority registered.
    OrganizationRegister,
    /// Extra info was referred to an organization.
    OrganizationReferExtraInfo,
}

impl TransactionAction {
    /// All defined actions, in wire-code order.
    pub const ALL: [TransactionAction; 11] = [
        Self::ConsensusInit,
        Self::NodeRegister,
        Self::GenesisBlockInit,
        Self::BlockSync,
        Self::NegotiationStart,
        Self::NegotiationConclude,
        Self::GenerateSubjectRecord,
        Self::ReferDocument,
        Self::ReferExtraInfo,
        Self::OrganizationRegister,
        Self::OrganizationReferExtraInfo,
    ];

    /// The integer code the backend emits for this action.
    pub const fn code(self) -> i64 {
        match self {
            Self::ConsensusInit => 1,
            Self::NodeRegister => 2,
            Self::GenesisBlockInit => 3,
            Self::BlockSync => 4,
            Self::NegotiationStart => 5,
            Self::NegotiationConclude => 6,
            Self::GenerateSubjectRecord => 7,
            Self::ReferDocument => 8,
            Self::ReferExtraInfo => 9,
            Self::OrganizationRegister => 10,
            Self::OrganizationReferExtraInfo => 11,
        }
    }

    /// Decodes a wire code. Unknown integers — including zero, negatives,
    /// and anything past 11 — return `None` so callers decide how to
    /// degrade.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::ConsensusInit),
            2 => Some(Self::NodeRegister),
            3 => Some(Self::GenesisBlockInit),
            4 => Some(Self::BlockSync),
            5 => Some(Self::NegotiationStart),
            6 => Some(Self::NegotiationConclude),
            7 => Some(Self::GenerateSubjectRecord),
            8 => Some(Self::ReferDocument),
            9 => Some(Self::ReferExtraInfo),
            10 => Some(Self::OrganizationRegister),
            11 => Some(Self::OrganizationReferExtraInfo),
            _ => None,
        }
    }

    /// `true` for the node/consensus lifecycle family (codes 1–6).
    pub const fn is_node_lifecycle(self) -> bool {
        self.code() <= 6
    }
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConsensusInit => "ConsensusInit",
            Self::NodeRegister => "NodeRegister",
            Self::GenesisBlockInit => "GenesisBlockInit",
            Self::BlockSync => "BlockSync",
            Self::NegotiationStart => "NegotiationStart",
            Self::NegotiationConclude => "NegotiationConclude",
            Self::GenerateSubjectRecord => "GenerateSubjectRecord",
            Self::ReferDocument => "ReferDocument",
            Self::ReferExtraInfo => "ReferExtraInfo",
            Self::OrganizationRegister => "OrganizationRegister",
            Self::OrganizationReferExtraInfo => "OrganizationReferExtraInfo",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for action in TransactionAction::ALL {
            assert_eq!(TransactionAction::from_code(action.code()), Some(action));
        }
    }

    #[test]
    fn all_is_dense_and_ordered() {
        for (i, action) in TransactionAction::ALL.iter().enumerate() {
            assert_eq!(action.code(), i as i64 + 1);
        }
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        for code in [0, -1, 12, 99, i64::MIN, i64::MAX] {
            assert_eq!(TransactionAction::from_code(code), None);
        }
    }

    #[test]
    fn lifecycle_family_split() {
        assert!(TransactionAction::ConsensusInit.is_node_lifecycle());
        assert!(TransactionAction::NegotiationConclude.is_node_lifecycle());
        assert!(!TransactionAction::GenerateSubjectRecord.is_node_lifecycle());
        assert!(!TransactionAction::OrganizationReferExtraInfo.is_node_lifecycle());
    }

    #[test]
    fn display_names_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for action in TransactionAction::ALL {
            assert!(seen.insert(action.to_string()));
        }
    }
}
