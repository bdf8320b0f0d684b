use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ledger entry as delivered by a transaction source.
///
/// This is the wire shape: `kind` and `occurred_at` are plain strings
/// because the record has not crossed the validation boundary yet. The
/// backend converts it into a typed domain transaction and rejects
/// anything malformed there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Opaque identifier, unique per record (not required to be ordered)
    pub id: String,
    /// Direction of money movement: "deposit" or "withdrawal"
    pub kind: String,
    /// Non-negative amount, currency-agnostic
    pub amount: f64,
    /// When the transaction happened (RFC 3339)
    pub occurred_at: String,
    /// Optional classification, passed through as opaque metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Qualitative label for the sign of the month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increased,
    Decreased,
    Equal,
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDirection::Increased => write!(f, "increased"),
            ChangeDirection::Decreased => write!(f, "decreased"),
            ChangeDirection::Equal => write!(f, "equal"),
        }
    }
}

/// Result of the savings-change calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsChangeResponse {
    /// Magnitude of the change, in percent (0 means no change)
    pub percentage: f64,
    pub direction: ChangeDirection,
}

/// View state for rendering the savings overview.
///
/// The presentation layer only ever sees this struct; loading and
/// "no data yet" fallbacks are folded into it so a retrieval failure
/// renders as a neutral display instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsOverview {
    pub percentage: f64,
    pub direction: ChangeDirection,
    pub is_loading: bool,
}

impl SavingsOverview {
    /// Initial state while retrieval is still in flight.
    pub fn loading() -> Self {
        SavingsOverview {
            percentage: 0.0,
            direction: ChangeDirection::Equal,
            is_loading: true,
        }
    }

    /// Neutral "no data yet" state shown after a failed retrieval.
    pub fn neutral() -> Self {
        SavingsOverview {
            percentage: 0.0,
            direction: ChangeDirection::Equal,
            is_loading: false,
        }
    }
}

/// Net savings for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar month, 0 = January through 11 = December
    pub month: u32,
    pub year: i32,
    /// Deposits minus withdrawals for the month
    pub net: f64,
}
