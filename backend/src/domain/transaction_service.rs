//! Transaction orchestration for the savings tracker.
//!
//! Owns the retrieve → validate → compute flow: records are fetched from
//! the configured [`TransactionSource`], validated into typed domain
//! transactions at the boundary, and only then handed to the pure
//! calculation services. The loading/error lifecycle lives here, not in
//! the calculations.

use crate::domain::balance_service::BalanceService;
use crate::domain::mappers::SavingsChangeMapper;
use crate::domain::models::transaction::Transaction;
use crate::domain::savings_service::{SavingsChange, SavingsService};
use crate::domain::stats_service::StatsService;
use crate::source::TransactionSource;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use log::{info, warn};
use shared::{MonthlySummary, SavingsOverview};
use std::sync::Arc;

pub struct TransactionService {
    source: Arc<dyn TransactionSource>,
    savings_service: SavingsService,
    balance_service: BalanceService,
    stats_service: StatsService,
}

impl TransactionService {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self {
            source,
            savings_service: SavingsService::new(),
            balance_service: BalanceService::new(),
            stats_service: StatsService::new(),
        }
    }

    /// Fetch all records from the source and validate each one.
    ///
    /// A single malformed record fails the whole batch. Excluding it
    /// quietly would leave a bucket sum wrong with nothing to show for
    /// it, so the error is surfaced to the caller instead.
    pub async fn fetch_validated(&self) -> Result<Vec<Transaction>> {
        let raw = self.source.fetch_transactions().await?;
        info!("Fetched {} transaction records", raw.len());

        let mut records = Vec::with_capacity(raw.len());
        for record in raw {
            records.push(Transaction::try_from(record)?);
        }
        Ok(records)
    }

    /// Month-over-month savings change for the month containing
    /// `reference_date`.
    pub async fn savings_change(
        &self,
        reference_date: DateTime<FixedOffset>,
    ) -> Result<SavingsChange> {
        let records = self.fetch_validated().await?;
        Ok(self
            .savings_service
            .compute_savings_change(reference_date, &records))
    }

    /// Presentation-facing savings overview.
    ///
    /// Retrieval or validation failure is not an error at this level:
    /// the overview falls back to the neutral "no data yet" state so the
    /// display degrades instead of crashing.
    pub async fn load_savings_overview(
        &self,
        reference_date: DateTime<FixedOffset>,
    ) -> SavingsOverview {
        match self.savings_change(reference_date).await {
            Ok(change) => SavingsChangeMapper::to_overview(change),
            Err(err) => {
                warn!("Error calculating savings: {err:#}");
                SavingsOverview::neutral()
            }
        }
    }

    /// Current balance over the whole validated history.
    pub async fn current_balance(&self) -> Result<f64> {
        let records = self.fetch_validated().await?;
        Ok(self.balance_service.current_balance(&records))
    }

    /// Net savings per calendar month, oldest first.
    pub async fn monthly_summaries(&self) -> Result<Vec<MonthlySummary>> {
        let records = self.fetch_validated().await?;
        Ok(self.stats_service.monthly_summaries(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryTransactionSource;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use shared::{ChangeDirection, TransactionRecord};

    struct FailingSource;

    #[async_trait]
    impl TransactionSource for FailingSource {
        async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn record(id: &str, kind: &str, amount: f64, occurred_at: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            kind: kind.to_string(),
            amount,
            occurred_at: occurred_at.to_string(),
            category: None,
        }
    }

    fn service_with(records: Vec<TransactionRecord>) -> TransactionService {
        TransactionService::new(Arc::new(InMemoryTransactionSource::new(records)))
    }

    fn reference_date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn savings_change_runs_over_validated_records() {
        let service = service_with(vec![
            record("a", "deposit", 200.0, "2025-05-03T09:00:00Z"),
            record("b", "deposit", 300.0, "2025-06-03T09:00:00Z"),
        ]);

        let change = service.savings_change(reference_date()).await.unwrap();
        assert_eq!(change.percentage, 50.0);
    }

    #[tokio::test]
    async fn malformed_record_fails_the_batch() {
        let service = service_with(vec![
            record("a", "deposit", 200.0, "2025-05-03T09:00:00Z"),
            record("b", "transfer", 10.0, "2025-06-03T09:00:00Z"),
        ]);

        let err = service.fetch_validated().await.unwrap_err();
        assert!(err.to_string().contains("unknown kind"));
    }

    #[tokio::test]
    async fn overview_is_neutral_when_the_source_fails() {
        let service = TransactionService::new(Arc::new(FailingSource));

        let overview = service.load_savings_overview(reference_date()).await;

        assert_eq!(overview, SavingsOverview::neutral());
        assert!(!overview.is_loading);
    }

    // The presentation layer starts from the loading state and swaps it
    // for whatever the orchestrator returns once retrieval settles.
    #[tokio::test]
    async fn overview_replaces_the_initial_loading_state() {
        let mut overview = SavingsOverview::loading();
        assert!(overview.is_loading);
        assert_eq!(overview.direction, ChangeDirection::Equal);

        let service = service_with(vec![record("a", "deposit", 250.0, "2025-06-05T09:00:00Z")]);
        overview = service.load_savings_overview(reference_date()).await;

        assert!(!overview.is_loading);
        assert_eq!(overview.direction, ChangeDirection::Increased);
    }

    #[tokio::test]
    async fn overview_reports_the_computed_change() {
        let service = service_with(vec![record("a", "deposit", 250.0, "2025-06-05T09:00:00Z")]);

        let overview = service.load_savings_overview(reference_date()).await;

        assert_eq!(overview.percentage, 100.0);
        assert_eq!(overview.direction, ChangeDirection::Increased);
        assert!(!overview.is_loading);
    }

    #[tokio::test]
    async fn current_balance_sums_the_history() {
        let service = service_with(vec![
            record("a", "deposit", 500.0, "2025-04-01T09:00:00Z"),
            record("b", "withdrawal", 120.0, "2025-05-02T09:00:00Z"),
        ]);

        assert_eq!(service.current_balance().await.unwrap(), 380.0);
    }

    #[tokio::test]
    async fn monthly_summaries_come_back_in_order() {
        let service = service_with(vec![
            record("a", "deposit", 100.0, "2025-02-01T09:00:00Z"),
            record("b", "deposit", 50.0, "2025-01-01T09:00:00Z"),
        ]);

        let summaries = service.monthly_summaries().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!((summaries[0].month, summaries[0].net), (0, 50.0));
        assert_eq!((summaries[1].month, summaries[1].net), (1, 100.0));
    }
}
