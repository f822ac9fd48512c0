//! Small display enums for explorer transactions.

use std::fmt;

// ---------------------------------------------------------------------------
// TransactionStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a transaction as the dashboard reports it.
///
/// `Pending` transactions are queued for block inclusion, `Success`
/// transactions are mined and applied, `Failed` ones were rejected by
/// validation. Same wire-code convention as the other enumerations:
/// bare integers, decoded leniently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    /// Queued, awaiting block inclusion.
    Pending,
    /// Mined and applied.
    Success,
    /// Rejected during validation or processing.
    Failed,
}

impl TransactionStatus {
    /// All defined statuses, in wire-code order.
    pub const ALL: [TransactionStatus; 3] = [Self::Pending, Self::Success, Self::Failed];

    /// The integer code the backend emits for this status.
    pub const fn code(self) -> i64 {
        match self {
            Self::Pending => 1,
            Self::Success => 2,
            Self::Failed => 3,
        }
    }

    /// Decodes a wire code; unknown integers return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Pending),
            2 => Some(Self::Success),
            3 => Some(Self::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Success => "Success",
            Self::Failed => "Failed",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for status in TransactionStatus::ALL {
            assert_eq!(TransactionStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        for code in [0, 4, -1, 100] {
            assert_eq!(TransactionStatus::from_code(code), None);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(TransactionStatus::Pending.to_string(), "Pending");
        assert_eq!(TransactionStatus::Success.to_string(), "Success");
        assert_eq!(TransactionStatus::Failed.to_string(), "Failed");
    }
}
