//! Reader entity and its active loans
//!
//! A loan lives only inside the reader that holds it. Returned loans are
//! dropped, so `loans` is always the set of books currently out.

use chrono::NaiveDateTime;

/// One active borrowing: which title, and when it left the shelf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub title: String,
    pub borrowed_at: NaiveDateTime,
}

impl Loan {
    pub fn new(title: impl Into<String>, borrowed_at: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            borrowed_at,
        }
    }
}

/// A registered library patron
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reader {
    pub first_name: String,
    pub last_name: String,
    /// Library card number (business key, not enforced unique)
    pub card_number: String,
    /// Active loans in the order they were issued
    pub loans: Vec<Loan>,
}

impl Reader {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        card_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            card_number: card_number.into(),
            loans: Vec::new(),
        }
    }

    pub fn with_loans(mut self, loans: Vec<Loan>) -> Self {
        self.loans = loans;
        self
    }

    /// "First Last", as shown in reports
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Titles currently on loan, in issue order
    pub fn borrowed_titles(&self) -> Vec<String> {
        self.loans.iter().map(|loan| loan.title.clone()).collect()
    }

    /// Remove the first loan of `title`, returning it
    pub(crate) fn take_loan(&mut self, title: &str) -> Option<Loan> {
        let index = self.loans.iter().position(|loan| loan.title == title)?;
        Some(self.loans.remove(index))
    }
}
