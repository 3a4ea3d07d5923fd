//! Loan period and overdue arithmetic
//!
//! Two comparisons live here and they intentionally differ:
//!
//! - issuing is blocked once a loan is more than `period_days` *whole* days old
//! - reports count a loan as overdue once its exact age exceeds `period_days`
//!
//! A loan that is 14 days and 5 hours old therefore shows up in the overdue
//! report with `days_overdue == 0` but does not yet block new issues.

use chrono::{NaiveDateTime, TimeDelta};

/// Default lending period in days
pub const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    period_days: i64,
}

impl LoanPolicy {
    pub fn new(period_days: i64) -> Self {
        Self { period_days }
    }

    pub fn period_days(&self) -> i64 {
        self.period_days
    }

    fn period(&self) -> TimeDelta {
        TimeDelta::try_days(self.period_days).unwrap_or(TimeDelta::MAX)
    }

    /// Whether a loan taken at `borrowed_at` stops its reader from borrowing more
    pub fn blocks_issue(&self, borrowed_at: NaiveDateTime, now: NaiveDateTime) -> bool {
        (now - borrowed_at).num_days() > self.period_days
    }

    /// Whether a loan taken at `borrowed_at` belongs in the overdue report
    pub fn is_overdue(&self, borrowed_at: NaiveDateTime, now: NaiveDateTime) -> bool {
        now - borrowed_at > self.period()
    }

    /// Whole days elapsed minus the loan period (can be zero for fresh overdues)
    pub fn days_overdue(&self, borrowed_at: NaiveDateTime, now: NaiveDateTime) -> i64 {
        (now - borrowed_at).num_days() - self.period_days
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOAN_PERIOD_DAYS)
    }
}
