//! Domain model for a transaction.
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A validated, typed transaction record.
///
/// Instances are immutable snapshots: the calculation services only ever
/// read them, never mutate or persist them.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Always non-negative; the effect on savings comes from `kind`
    pub amount: f64,
    pub occurred_at: DateTime<FixedOffset>,
    /// Opaque metadata, not interpreted by any calculation
    pub category: Option<String>,
}

impl Transaction {
    /// Amount with the sign implied by the transaction kind:
    /// positive for deposits, negative for withdrawals.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}

/// Rejection reasons for a wire record that fails validation.
///
/// Raw records are checked here, at the boundary, so a malformed record
/// can never silently corrupt a bucket sum downstream.
#[derive(Debug, Error)]
pub enum RecordValidationError {
    #[error("transaction {id}: unknown kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    #[error("transaction {id}: amount {amount} is negative")]
    NegativeAmount { id: String, amount: f64 },

    #[error("transaction {id}: unparseable timestamp '{occurred_at}'")]
    InvalidTimestamp {
        id: String,
        occurred_at: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl TryFrom<shared::TransactionRecord> for Transaction {
    type Error = RecordValidationError;

    fn try_from(record: shared::TransactionRecord) -> Result<Self, Self::Error> {
        let kind = match record.kind.as_str() {
            "deposit" => TransactionKind::Deposit,
            "withdrawal" => TransactionKind::Withdrawal,
            other => {
                return Err(RecordValidationError::UnknownKind {
                    id: record.id,
                    kind: other.to_string(),
                })
            }
        };

        if record.amount < 0.0 {
            return Err(RecordValidationError::NegativeAmount {
                id: record.id,
                amount: record.amount,
            });
        }

        let occurred_at = DateTime::parse_from_rfc3339(&record.occurred_at).map_err(|source| {
            RecordValidationError::InvalidTimestamp {
                id: record.id.clone(),
                occurred_at: record.occurred_at.clone(),
                source,
            }
        })?;

        Ok(Transaction {
            id: record.id,
            kind,
            amount: record.amount,
            occurred_at,
            category: record.category,
        })
    }
}
