//! Aggregate statistics over a transaction history.

use crate::domain::models::transaction::Transaction;
use crate::domain::month::MonthYear;
use shared::MonthlySummary;
use std::collections::HashMap;

/// Service producing the per-month figures behind the statistics view.
#[derive(Clone, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        StatsService
    }

    /// Net savings per calendar month, oldest month first.
    ///
    /// Only months that actually contain records appear in the output;
    /// gaps in the history are not padded with zero months.
    pub fn monthly_summaries(&self, records: &[Transaction]) -> Vec<MonthlySummary> {
        let mut nets: HashMap<MonthYear, f64> = HashMap::new();

        for tx in records {
            let bucket = MonthYear::from_date(&tx.occurred_at);
            *nets.entry(bucket).or_insert(0.0) += tx.signed_amount();
        }

        let mut summaries: Vec<MonthlySummary> = nets
            .into_iter()
            .map(|(bucket, net)| MonthlySummary {
                month: bucket.month,
                year: bucket.year,
                net,
            })
            .collect();

        summaries.sort_by_key(|s| (s.year, s.month));
        summaries
    }

    /// Mean of the monthly nets, 0 when there are no records.
    pub fn average_monthly_net(&self, records: &[Transaction]) -> f64 {
        let summaries = self.monthly_summaries(records);
        if summaries.is_empty() {
            return 0.0;
        }
        let total: f64 = summaries.iter().map(|s| s.net).sum();
        total / summaries.len() as f64
    }
}
