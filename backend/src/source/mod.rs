//! # Transaction Sources
//!
//! This module defines the retrieval abstraction that supplies raw
//! transaction records to the domain layer. The domain never fetches
//! anything itself; whatever transport a source uses (remote API, local
//! store) stays behind this trait, and so do cancellation and
//! partial-failure concerns.

use anyhow::Result;
use async_trait::async_trait;
use shared::TransactionRecord;

mod memory;

pub use memory::InMemoryTransactionSource;

/// Trait defining the interface for transaction retrieval.
///
/// A source must deliver a finite, complete record list or fail the call
/// outright; the domain layer is never invoked with a partial retrieval.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch every known transaction record.
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>>;
}
