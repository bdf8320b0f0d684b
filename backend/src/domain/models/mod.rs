//! Domain models.

pub mod transaction;

pub use transaction::{RecordValidationError, Transaction, TransactionKind};
