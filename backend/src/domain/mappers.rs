//! Conversions between domain results and the shared wire DTOs.

use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::domain::savings_service::{ChangeDirection, SavingsChange};
use shared::{
    ChangeDirection as SharedChangeDirection, SavingsChangeResponse, SavingsOverview,
    TransactionRecord,
};

pub struct SavingsChangeMapper;

impl SavingsChangeMapper {
    pub fn to_dto(change: SavingsChange) -> SavingsChangeResponse {
        SavingsChangeResponse {
            percentage: change.percentage,
            direction: Self::to_dto_direction(change.direction),
        }
    }

    /// View state for a completed computation.
    pub fn to_overview(change: SavingsChange) -> SavingsOverview {
        SavingsOverview {
            percentage: change.percentage,
            direction: Self::to_dto_direction(change.direction),
            is_loading: false,
        }
    }

    fn to_dto_direction(direction: ChangeDirection) -> SharedChangeDirection {
        match direction {
            ChangeDirection::Increased => SharedChangeDirection::Increased,
            ChangeDirection::Decreased => SharedChangeDirection::Decreased,
            ChangeDirection::Equal => SharedChangeDirection::Equal,
        }
    }
}

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(tx: Transaction) -> TransactionRecord {
        TransactionRecord {
            id: tx.id,
            kind: match tx.kind {
                TransactionKind::Deposit => "deposit".to_string(),
                TransactionKind::Withdrawal => "withdrawal".to_string(),
            },
            amount: tx.amount,
            occurred_at: tx.occurred_at.to_rfc3339(),
            category: tx.category,
        }
    }
}
