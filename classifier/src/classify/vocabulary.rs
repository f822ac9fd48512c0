//! The configurable label table.
//!
//! The backend shipped with two near-duplicate wordings for the same
//! codes: one build calls portfolio subjects "Students", another
//! "Applicants". Neither is canonical, so the label text is data, not
//! code. The default table uses the neutral superset wording
//! ("Student/Applicant ..."); [`Vocabulary::student`] and
//! [`Vocabulary::applicant`] reproduce the two observed builds; and a
//! deployment that knows its backend's exact wording loads it from JSON
//! with [`Vocabulary::from_json_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::{ContentMapping, InternalAction, TransactionAction};

// ---------------------------------------------------------------------------
// VocabularyError
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating a label table.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The JSON could not be parsed into a vocabulary.
    #[error("failed to parse vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A label was present but empty. An empty label would render as a
    /// blank table cell, indistinguishable from missing data.
    #[error("label `{0}` is empty")]
    EmptyLabel(&'static str),

    /// Two action codes share a label. The explorer's action column is
    /// only useful if the eleven labels stay pairwise distinct.
    #[error("action label {0:?} is used by more than one code")]
    DuplicateActionLabel(String),
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Display wording for every classified code.
///
/// Serde uses field defaults, so a JSON override file only needs the
/// labels that differ from the superset wording. Unknown keys are
/// rejected rather than ignored: a typoed label name must fail loudly,
/// not fall back to the default wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vocabulary {
    // Action labels, one per TransactionAction code.
    pub consensus_init: String,
    pub node_register: String,
    pub genesis_block_init: String,
    pub block_sync: String,
    pub negotiation_start: String,
    pub negotiation_conclude: String,
    pub generate_subject_record: String,
    pub refer_document: String,
    pub refer_extra_info: String,
    pub organization_register: String,
    pub organization_refer_extra_info: String,

    // Content labels, one per ContentMapping code.
    pub subject_base: String,
    pub subject_log: String,
    pub subject_additional: String,
    pub organization_base: String,

    // Internal labels, one per InternalAction code.
    pub internal_consensus: String,
    pub internal_init: String,
    pub internal_sync: String,
}

impl Default for Vocabulary {
    /// The neutral superset wording, usable against either backend
    /// variant.
    fn default() -> Self {
        Self {
            consensus_init: "Consensus Initialization".into(),
            node_register: "Node Registration".into(),
            genesis_block_init: "Node Genesis Block Creation".into(),
            block_sync: "Node Block Sync via Consensus".into(),
            negotiation_start: "Node Consensus Negotiation Confirmed Start".into(),
            negotiation_conclude: "Node Consensus Negotiation Conclusion of Processing".into(),
            generate_subject_record: "Institution Student/Applicant Generation".into(),
            refer_document:
                "Institution New Document / Important Info to Student/Applicant Reference".into(),
            refer_extra_info: "Institution Refer Extra Info to Student/Applicant".into(),
            organization_register: "Organization Registration".into(),
            organization_refer_extra_info: "Extra Info Referral to Organization".into(),
            subject_base: "Student/Applicant Base Portfolio".into(),
            subject_log: "Student/Applicant Log from Orgs".into(),
            subject_additional: "Student/Applicant Additional Info / Remarks".into(),
            organization_base: "Organization Base Registration".into(),
            internal_consensus: "Internal: Consensus Context".into(),
            internal_init: "Internal: Context Initialization".into(),
            internal_sync: "Internal: Sync from Communication".into(),
        }
    }
}

impl Vocabulary {
    /// The wording of the "Student" backend builds.
    pub fn student() -> Self {
        Self {
            generate_subject_record: "Institution Student Generation".into(),
            refer_document: "Institution New Document / Important Info to Student Reference"
                .into(),
            refer_extra_info: "Institution Refer Extra Info to Student".into(),
            subject_base: "Student Base Portfolio".into(),
            subject_log: "Student Log from Orgs".into(),
            subject_additional: "Student Additional Info / Remarks".into(),
            ..Self::default()
        }
    }

    /// The wording of the "Applicant" backend builds.
    pub fn applicant() -> Self {
        Self {
            generate_subject_record: "Institution Applicant Generation".into(),
            refer_document: "Institution New Document / Important Info to Applicant Reference"
                .into(),
            refer_extra_info: "Institution Refer Extra Info to Applicant".into(),
            subject_base: "Applicant Base Portfolio".into(),
            subject_log: "Applicant Log from Orgs".into(),
            subject_additional: "Applicant Additional Info / Remarks".into(),
            ..Self::default()
        }
    }

    /// Parses and validates a vocabulary from a JSON string. Missing
    /// keys take the default wording; unknown keys and invalid tables
    /// are errors.
    pub fn from_json_str(input: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Self = serde_json::from_str(input)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Checks the table invariants: no empty label anywhere, and the
    /// eleven action labels pairwise distinct.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for (name, label) in self.named_labels() {
            if label.is_empty() {
                return Err(VocabularyError::EmptyLabel(name));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for action in TransactionAction::ALL {
            let label = self.action_label(action);
            if !seen.insert(label) {
                return Err(VocabularyError::DuplicateActionLabel(label.to_string()));
            }
        }
        Ok(())
    }

    /// The label for a known transaction action.
    pub fn action_label(&self, action: TransactionAction) -> &str {
        match action {
            TransactionAction::ConsensusInit => &self.consensus_init,
            TransactionAction::NodeRegister => &self.node_register,
            TransactionAction::GenesisBlockInit => &self.genesis_block_init,
            TransactionAction::BlockSync => &self.block_sync,
            TransactionAction::NegotiationStart => &self.negotiation_start,
            TransactionAction::NegotiationConclude => &self.negotiation_conclude,
            TransactionAction::GenerateSubjectRecord => &self.generate_subject_record,
            TransactionAction::ReferDocument => &self.refer_document,
            TransactionAction::ReferExtraInfo => &self.refer_extra_info,
            TransactionAction::OrganizationRegister => &self.organization_register,
            TransactionAction::OrganizationReferExtraInfo => &self.organization_refer_extra_info,
        }
    }

    /// The label for a known user-content mapping.
    pub fn content_label(&self, mapping: ContentMapping) -> &str {
        match mapping {
            ContentMapping::SubjectBase => &self.subject_base,
            ContentMapping::SubjectLog => &self.subject_log,
            ContentMapping::SubjectAdditional => &self.subject_additional,
            ContentMapping::OrganizationBase => &self.organization_base,
        }
    }

    /// The label for a known internal action.
    pub fn internal_label(&self, action: InternalAction) -> &str {
        match action {
            InternalAction::Consensus => &self.internal_consensus,
            InternalAction::Init => &self.internal_init,
            InternalAction::Sync => &self.internal_sync,
        }
    }

    /// Every label with its JSON field name, for validation reporting.
    fn named_labels(&self) -> [(&'static str, &str); 18] {
        [
            ("consensus_init", &self.consensus_init),
            ("node_register", &self.node_register),
            ("genesis_block_init", &self.genesis_block_init),
            ("block_sync", &self.block_sync),
            ("negotiation_start", &self.negotiation_start),
            ("negotiation_conclude", &self.negotiation_conclude),
            ("generate_subject_record", &self.generate_subject_record),
            ("refer_document", &self.refer_document),
            ("refer_extra_info", &self.refer_extra_info),
            ("organization_register", &self.organization_register),
            (
                "organization_refer_extra_info",
                &self.organization_refer_extra_info,
            ),
            ("subject_base", &self.subject_base),
            ("subject_log", &self.subject_log),
            ("subject_additional", &self.subject_additional),
            ("organization_base", &self.organization_base),
            ("internal_consensus", &self.internal_consensus),
            ("internal_init", &self.internal_init),
            ("internal_sync", &self.internal_sync),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
