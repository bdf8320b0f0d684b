//! Domain logic for the savings tracker.

pub mod balance_service;
pub mod mappers;
pub mod models;
pub mod month;
pub mod savings_service;
pub mod stats_service;
pub mod transaction_service;

pub use balance_service::BalanceService;
pub use savings_service::SavingsService;
pub use stats_service::StatsService;
pub use transaction_service::TransactionService;
