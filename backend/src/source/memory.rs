//! In-memory transaction source.
//!
//! Serves a fixed record list from memory. Used as the local store in
//! tests and anywhere a remote source is not wired up.

use anyhow::Result;
use async_trait::async_trait;
use shared::TransactionRecord;

use super::TransactionSource;

#[derive(Clone, Default)]
pub struct InMemoryTransactionSource {
    records: Vec<TransactionRecord>,
}

impl InMemoryTransactionSource {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactionSource {
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        Ok(self.records.clone())
    }
}
