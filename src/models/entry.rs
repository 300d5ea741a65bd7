use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Bank, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [EntryKind] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Money direction. Income carries its destination account, Expense its
/// source account and purpose, so an entry can never populate both bank
/// fields at once. The account is `None` when the ledger file named a bank
/// this build does not track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Income { to: Option<Bank> },
    Expense { from: Option<Bank>, purpose: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub category: Option<Category>,
    pub amount: Decimal,
    pub note: String,
    pub flow: Flow,
}

impl Entry {
    pub fn income(
        date: NaiveDate,
        category: Option<Category>,
        amount: Decimal,
        note: String,
        to: Bank,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            note,
            flow: Flow::Income { to: Some(to) },
        }
    }

    pub fn expense(
        date: NaiveDate,
        category: Option<Category>,
        amount: Decimal,
        note: String,
        from: Bank,
        purpose: String,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            note,
            flow: Flow::Expense {
                from: Some(from),
                purpose,
            },
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.flow {
            Flow::Income { .. } => EntryKind::Income,
            Flow::Expense { .. } => EntryKind::Expense,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.flow, Flow::Income { .. })
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.flow, Flow::Expense { .. })
    }

    /// The account this entry touches: destination for income, source for
    /// expenses.
    pub fn bank(&self) -> Option<Bank> {
        match &self.flow {
            Flow::Income { to } => *to,
            Flow::Expense { from, .. } => *from,
        }
    }

    pub fn purpose(&self) -> &str {
        match &self.flow {
            Flow::Expense { purpose, .. } => purpose,
            Flow::Income { .. } => "",
        }
    }
}
