//! Month-over-month savings change calculation.
//!
//! This is the core of the crate: a pure computation over a reference
//! date and a list of validated transactions. No I/O, no logging, no
//! shared state — safe to call concurrently from any number of callers.

use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::domain::month::MonthYear;
use chrono::{DateTime, FixedOffset};

/// Direction of the change between the previous and current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Increased,
    Decreased,
    Equal,
}

/// Outcome of a savings-change calculation.
///
/// `percentage` is a magnitude: always finite and non-negative for the
/// enumerated branches, with the sign carried by `direction` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsChange {
    pub percentage: f64,
    pub direction: ChangeDirection,
}

impl SavingsChange {
    /// The "nothing happened in either month" result.
    pub fn no_change() -> Self {
        SavingsChange {
            percentage: 0.0,
            direction: ChangeDirection::Equal,
        }
    }
}

/// Service computing savings changes between consecutive calendar months.
#[derive(Clone, Default)]
pub struct SavingsService;

impl SavingsService {
    pub fn new() -> Self {
        SavingsService
    }

    /// Compare net savings of the month containing `reference_date`
    /// against the immediately preceding calendar month.
    ///
    /// Records outside both months are ignored. An empty input yields
    /// `{0, Equal}` because both buckets net to zero.
    ///
    /// Division by zero is guarded for the enumerated branches: a zero
    /// previous month with a positive or zero current month resolves to a
    /// fixed result before the general-case division is reached. A zero
    /// previous month with a net-negative current month falls through to
    /// the division and yields an unbounded percentage, and a net-negative
    /// previous month is not special-cased either, so its ratio comes out
    /// sign-inverted. Both match the historical behavior and are pinned by
    /// tests rather than corrected here.
    pub fn compute_savings_change(
        &self,
        reference_date: DateTime<FixedOffset>,
        records: &[Transaction],
    ) -> SavingsChange {
        let current = MonthYear::from_date(&reference_date);
        let previous = current.previous();

        let current_net = Self::net_savings(records, current);
        let previous_net = Self::net_savings(records, previous);

        // First month with savings: treat as a 100% increase
        if previous_net == 0.0 && current_net > 0.0 {
            return SavingsChange {
                percentage: 100.0,
                direction: ChangeDirection::Increased,
            };
        }

        // All savings gone: a 100% decrease
        if current_net == 0.0 && previous_net > 0.0 {
            return SavingsChange {
                percentage: 100.0,
                direction: ChangeDirection::Decreased,
            };
        }

        // No savings in either month
        if previous_net == 0.0 && current_net == 0.0 {
            return SavingsChange::no_change();
        }

        let difference = current_net - previous_net;
        let percentage = (difference / previous_net * 100.0).abs();

        let direction = if difference > 0.0 {
            ChangeDirection::Increased
        } else if difference < 0.0 {
            ChangeDirection::Decreased
        } else {
            ChangeDirection::Equal
        };

        SavingsChange {
            percentage,
            direction,
        }
    }

    /// Net savings for one calendar month: deposits add, withdrawals
    /// subtract. A month with no records nets to zero.
    fn net_savings(records: &[Transaction], bucket: MonthYear) -> f64 {
        records
            .iter()
            .filter(|tx| bucket.contains(&tx.occurred_at))
            .map(Transaction::signed_amount)
            .sum()
    }
}
