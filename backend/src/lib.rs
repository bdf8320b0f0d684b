//! # Savings Tracker Backend
//!
//! Domain layer for the savings tracker. The heart of the crate is the
//! savings-change calculation: transactions are bucketed by calendar
//! month, deposits are netted against withdrawals, and the change between
//! the current and previous month is reported as a percentage with a
//! direction label.
//!
//! Retrieval is abstracted behind the [`source::TransactionSource`] trait
//! so the domain layer works the same whether records come from a remote
//! API or a local store. Raw wire records are validated into typed domain
//! transactions before any calculation runs.

pub mod domain;
pub mod source;

// Re-export commonly used types
pub use domain::models::transaction::{RecordValidationError, Transaction, TransactionKind};
pub use domain::month::MonthYear;
pub use domain::savings_service::{ChangeDirection, SavingsChange, SavingsService};
pub use domain::transaction_service::TransactionService;
pub use source::{InMemoryTransactionSource, TransactionSource};
