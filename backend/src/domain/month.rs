//! Calendar-month bucket keys.
//!
//! Savings comparisons work on whole calendar months, so transactions are
//! assigned to buckets keyed by `(month, year)`. Months are 0-based
//! (0 = January, 11 = December) and leap years need no special handling
//! because only the month and year fields of a date are consulted, never
//! day counts.

use chrono::{DateTime, Datelike, FixedOffset};

/// A `(month, year)` bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthYear {
    /// 0 = January through 11 = December
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    /// Bucket key for the calendar month containing `date`.
    pub fn from_date(date: &DateTime<FixedOffset>) -> Self {
        MonthYear {
            month: date.month0(),
            year: date.year(),
        }
    }

    /// The immediately preceding calendar month, rolling the year back
    /// when crossing a January boundary.
    pub fn previous(&self) -> Self {
        if self.month == 0 {
            MonthYear {
                month: 11,
                year: self.year - 1,
            }
        } else {
            MonthYear {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(&self, date: &DateTime<FixedOffset>) -> bool {
        date.month0() == self.month && date.year() == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn from_date_uses_zero_based_months() {
        let my = MonthYear::from_date(&date("2025-01-15T12:00:00Z"));
        assert_eq!(my, MonthYear { month: 0, year: 2025 });

        let my = MonthYear::from_date(&date("2025-12-31T23:59:59Z"));
        assert_eq!(my, MonthYear { month: 11, year: 2025 });
    }

    #[test]
    fn previous_of_january_is_december_of_prior_year() {
        let january = MonthYear { month: 0, year: 2025 };
        assert_eq!(january.previous(), MonthYear { month: 11, year: 2024 });
    }

    #[test]
    fn previous_within_the_same_year() {
        let june = MonthYear { month: 5, year: 2025 };
        assert_eq!(june.previous(), MonthYear { month: 4, year: 2025 });
    }

    #[test]
    fn contains_requires_month_and_year_to_match() {
        let june_2025 = MonthYear { month: 5, year: 2025 };

        assert!(june_2025.contains(&date("2025-06-01T00:00:00Z")));
        assert!(june_2025.contains(&date("2025-06-30T23:59:59+03:00")));
        assert!(!june_2025.contains(&date("2025-07-01T00:00:00Z")));
        assert!(!june_2025.contains(&date("2024-06-15T00:00:00Z")));
    }

    #[test]
    fn leap_day_lands_in_february() {
        let february = MonthYear { month: 1, year: 2024 };
        assert!(february.contains(&date("2024-02-29T12:00:00Z")));
    }
}
