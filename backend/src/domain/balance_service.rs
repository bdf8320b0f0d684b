//! Balance calculations over a transaction history.

use crate::domain::models::transaction::Transaction;
use crate::domain::month::MonthYear;

/// Service for balance and per-month net calculations.
///
/// Like the savings calculator these are pure reads over the supplied
/// records; nothing is persisted and no running state is kept.
#[derive(Clone, Default)]
pub struct BalanceService;

impl BalanceService {
    pub fn new() -> Self {
        BalanceService
    }

    /// Current balance: signed sum over the entire history.
    pub fn current_balance(&self, records: &[Transaction]) -> f64 {
        records.iter().map(Transaction::signed_amount).sum()
    }

    /// Net savings for a single calendar month.
    pub fn net_for_month(&self, bucket: MonthYear, records: &[Transaction]) -> f64 {
        records
            .iter()
            .filter(|tx| bucket.contains(&tx.occurred_at))
            .map(Transaction::signed_amount)
            .sum()
    }
}
