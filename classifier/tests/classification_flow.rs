//! Integration tests for the classification core.
//!
//! These exercise the path the explorer actually takes: raw JSON from
//! the node's `/explorer/transactions` endpoint, through the serde
//! boundary, into the classifier, out as display strings. Each test
//! stands alone; there is no shared state anywhere in this crate to
//! share.

use folio_classifier::classify::{
    Classifier, Vocabulary, INTERNAL_TRANSACTION, UNIDENTIFIED, UNIDENTIFIED_ACTION,
    USER_TRANSACTION,
};
use folio_classifier::transaction::{TransactionContext, TransactionRecord};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// A realistic explorer response body: one user transaction, one
/// internal transaction, one transaction wearing a code this build has
/// never heard of.
const EXPLORER_RESPONSE: &str = r#"{
    "transactions": [
        {
            "tx_hash": "c7d0b2a4e6f89132547698badcfe1023",
            "action": 7,
            "from_address": "fb-addr-institution-main",
            "to_address": "fb-addr-subject-0041",
            "payload": {"content_type": 1, "context": "656e63727970746564"},
            "signatures": {"raw": "90af", "encrypted": "12cd"}
        },
        {
            "tx_hash": "0123456789abcdef0123456789abcdef",
            "action": 4,
            "from_address": "fb-addr-node-archival-2",
            "payload": {"action": 3},
            "signatures": {"raw": "55aa", "encrypted": "aa55"}
        },
        {
            "tx_hash": "ffffffffffffffffffffffffffffffff",
            "action": 42,
            "from_address": "fb-addr-node-future",
            "payload": {"content_type": 42},
            "signatures": {"raw": "00", "encrypted": "00"}
        }
    ]
}"#;

fn classified(records: &[TransactionRecord]) -> Vec<(String, String, String)> {
    let classifier = Classifier::default();
    records
        .iter()
        .map(|record| {
            let classification = classifier.classify(&record.payload);
            (
                classifier.label_for_action(record.action),
                classification.identified_type,
                classification.resolved_type_value,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Endpoint-shaped flow
// ---------------------------------------------------------------------------

#[test]
fn explorer_response_classifies_end_to_end() {
    let records = TransactionRecord::parse_many(EXPLORER_RESPONSE).expect("response parses");
    assert_eq!(records.len(), 3);

    let rows = classified(&records);

    assert_eq!(
        rows[0],
        (
            "Institution Student/Applicant Generation".to_string(),
            USER_TRANSACTION.to_string(),
            "Student/Applicant Base Portfolio".to_string(),
        )
    );
    assert_eq!(
        rows[1],
        (
            "Node Block Sync via Consensus".to_string(),
            INTERNAL_TRANSACTION.to_string(),
            "Internal: Sync from Communication".to_string(),
        )
    );
    // The unknown-code transaction still produces a full row.
    assert_eq!(
        rows[2],
        (
            UNIDENTIFIED_ACTION.to_string(),
            USER_TRANSACTION.to_string(),
            UNIDENTIFIED.to_string(),
        )
    );
}

#[test]
fn classification_survives_a_round_trip_of_the_same_input() {
    let records = TransactionRecord::parse_many(EXPLORER_RESPONSE).unwrap();
    assert_eq!(classified(&records), classified(&records));
}

// ---------------------------------------------------------------------------
// Documented behavior table
// ---------------------------------------------------------------------------

#[test]
fn user_payload_with_known_content_type() {
    let classifier = Classifier::default();
    let context: TransactionContext =
        serde_json::from_str(r#"{"content_type": 1, "extra": true}"#).unwrap();
    let result = classifier.classify(&context);
    assert_eq!(result.identified_type, "User Transaction");
    assert_eq!(result.resolved_type_value, "Student/Applicant Base Portfolio");
}

#[test]
fn user_payload_with_unknown_content_type() {
    let classifier = Classifier::default();
    let context: TransactionContext = serde_json::from_str(r#"{"content_type": 99}"#).unwrap();
    let result = classifier.classify(&context);
    assert_eq!(result.identified_type, "User Transaction");
    assert_eq!(result.resolved_type_value, "Unidentified");
}

#[test]
fn internal_payload_with_known_action() {
    let classifier = Classifier::default();
    let context: TransactionContext = serde_json::from_str(r#"{"action": 2}"#).unwrap();
    let result = classifier.classify(&context);
    assert_eq!(result.identified_type, "Internal Transaction");
    assert_eq!(result.resolved_type_value, "Internal: Context Initialization");
}

#[test]
fn internal_payload_with_unknown_action() {
    let classifier = Classifier::default();
    let context: TransactionContext = serde_json::from_str(r#"{"action": 7}"#).unwrap();
    let result = classifier.classify(&context);
    assert_eq!(result.identified_type, "Internal Transaction");
    assert_eq!(result.resolved_type_value, "Unidentified");
}

#[test]
fn both_classification_fields_are_always_populated() {
    let classifier = Classifier::default();
    let awkward_inputs = [
        "{}",
        r#"{"content_type": -2147483648}"#,
        r#"{"action": 9223372036854775807}"#,
        r#"{"content_type": 0}"#,
        r#"{"something_else": "entirely"}"#,
    ];
    for input in awkward_inputs {
        let context: TransactionContext = serde_json::from_str(input).unwrap();
        let result = classifier.classify(&context);
        assert!(!result.identified_type.is_empty(), "input {}", input);
        assert!(!result.resolved_type_value.is_empty(), "input {}", input);
    }
}

#[test]
fn label_for_action_is_total_over_integers() {
    let classifier = Classifier::default();
    for code in 1..=11 {
        assert_ne!(classifier.label_for_action(code), UNIDENTIFIED_ACTION);
    }
    for code in [i64::MIN, -1, 0, 12, 100, i64::MAX] {
        assert_eq!(classifier.label_for_action(code), UNIDENTIFIED_ACTION);
    }
}

// ---------------------------------------------------------------------------
// Vocabulary configuration
// ---------------------------------------------------------------------------

#[test]
fn wording_file_changes_labels_without_changing_structure() {
    let vocabulary = Vocabulary::from_json_str(
        r#"{
            "generate_subject_record": "Institution Learner Generation",
            "subject_base": "Learner Base Portfolio"
        }"#,
    )
    .expect("override parses");
    let classifier = Classifier::new(vocabulary);

    assert_eq!(classifier.label_for_action(7), "Institution Learner Generation");
    let context: TransactionContext = serde_json::from_str(r#"{"content_type": 1}"#).unwrap();
    assert_eq!(
        classifier.classify(&context).resolved_type_value,
        "Learner Base Portfolio"
    );
    // Sentinels are contract, not vocabulary.
    assert_eq!(classifier.label_for_action(12), UNIDENTIFIED_ACTION);
}

#[test]
fn preset_classifiers_agree_on_structure_and_differ_on_wording() {
    let student = Classifier::new(Vocabulary::student());
    let applicant = Classifier::new(Vocabulary::applicant());
    let context: TransactionContext = serde_json::from_str(r#"{"content_type": 2}"#).unwrap();

    let s = student.classify(&context);
    let a = applicant.classify(&context);
    assert_eq!(s.identified_type, a.identified_type);
    assert_eq!(s.resolved_type_value, "Student Log from Orgs");
    assert_eq!(a.resolved_type_value, "Applicant Log from Orgs");
}
