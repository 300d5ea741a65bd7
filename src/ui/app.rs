use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Bank, Category, Entry, EntryKind, SAVINGS_BANK};
use crate::report::{self, GrowthPoint};
use crate::store::CsvStore;
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Entries,
    AddEntry,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Entries, Self::AddEntry]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Entries => write!(f, "Entries"),
            Self::AddEntry => write!(f, "Add Entry"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// The add-entry form. Fields 0-4 are shared; income adds a destination
/// bank, expense adds a purpose and a source bank.
pub(crate) struct EntryForm {
    pub(crate) field: usize,
    pub(crate) date: String,
    pub(crate) category: usize,
    pub(crate) kind: usize,
    pub(crate) amount: String,
    pub(crate) note: String,
    pub(crate) bank: usize,
    pub(crate) purpose: String,
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self {
            field: 0,
            date: Local::now().format("%Y-%m-%d").to_string(),
            category: 0,
            kind: 0,
            amount: String::new(),
            note: String::new(),
            bank: 0,
            purpose: String::new(),
        }
    }

    pub(crate) fn kind(&self) -> EntryKind {
        EntryKind::all()[self.kind % EntryKind::all().len()]
    }

    pub(crate) fn category(&self) -> Category {
        Category::all()[self.category % Category::all().len()]
    }

    pub(crate) fn bank(&self) -> Bank {
        Bank::all()[self.bank % Bank::all().len()]
    }

    pub(crate) fn field_count(&self) -> usize {
        match self.kind() {
            EntryKind::Income => 6,
            EntryKind::Expense => 7,
        }
    }

    pub(crate) fn next_field(&mut self) {
        if self.field + 1 < self.field_count() {
            self.field += 1;
        }
    }

    pub(crate) fn prev_field(&mut self) {
        self.field = self.field.saturating_sub(1);
    }

    /// Whether the focused field cycles through a closed set with +/-.
    pub(crate) fn is_cycle_field(&self) -> bool {
        match (self.field, self.kind()) {
            (1, _) | (2, _) => true,
            (5, EntryKind::Income) => true,
            (6, EntryKind::Expense) => true,
            _ => false,
        }
    }

    pub(crate) fn cycle(&mut self, delta: i32) {
        match (self.field, self.kind()) {
            (1, _) => self.category = cycle_index(self.category, delta, Category::all().len()),
            (2, _) => {
                self.kind = cycle_index(self.kind, delta, EntryKind::all().len());
                // The expense-only fields disappear when switching to income
                if self.field >= self.field_count() {
                    self.field = self.field_count() - 1;
                }
            }
            (5, EntryKind::Income) | (6, EntryKind::Expense) => {
                self.bank = cycle_index(self.bank, delta, Bank::all().len());
            }
            _ => {}
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        match (self.field, self.kind()) {
            (0, _) => Some(&mut self.date),
            (3, _) => Some(&mut self.amount),
            (4, _) => Some(&mut self.note),
            (5, EntryKind::Expense) => Some(&mut self.purpose),
            _ => None,
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if let Some(text) = self.text_field_mut() {
            text.push(c);
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(text) = self.text_field_mut() {
            text.pop();
        }
    }

    /// Validate the form and construct the entry it describes.
    pub(crate) fn build(&self) -> Result<Entry> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date '{}' (use YYYY-MM-DD)", self.date))?;

        let amount_str = self.amount.trim();
        if amount_str.is_empty() {
            anyhow::bail!("Amount is required");
        }
        let amount = Decimal::from_str(amount_str)
            .map_err(|_| anyhow::anyhow!("Invalid amount: {amount_str}"))?;
        if amount < Decimal::ZERO {
            anyhow::bail!("Amount must not be negative");
        }

        let note = self.note.trim().to_string();
        let entry = match self.kind() {
            EntryKind::Income => {
                Entry::income(date, Some(self.category()), amount, note, self.bank())
            }
            EntryKind::Expense => Entry::expense(
                date,
                Some(self.category()),
                amount,
                note,
                self.bank(),
                self.purpose.trim().to_string(),
            ),
        };
        Ok(entry)
    }
}

fn cycle_index(current: usize, delta: i32, len: usize) -> usize {
    if delta > 0 {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Derived from the ledger on every refresh
    pub(crate) entries: Vec<Entry>,
    pub(crate) recent: Vec<Entry>,
    pub(crate) balances: Vec<(Bank, Decimal)>,
    pub(crate) growth: Vec<GrowthPoint>,

    // Entries screen
    pub(crate) entry_index: usize,
    pub(crate) entry_scroll: usize,

    // Add Entry screen
    pub(crate) form: EntryForm,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            entries: Vec::new(),
            recent: Vec::new(),
            balances: Vec::new(),
            growth: Vec::new(),

            entry_index: 0,
            entry_scroll: 0,

            form: EntryForm::new(),

            visible_rows: 20,
        }
    }

    /// Reload the ledger and re-derive everything from the full entry set.
    pub(crate) fn refresh(&mut self, store: &CsvStore) -> Result<()> {
        self.entries = store.load_all()?;
        self.balances = report::bank_balances(&self.entries);
        self.growth = report::growth_table(&self.entries, SAVINGS_BANK);

        self.recent = self.entries.clone();
        self.recent.sort_by(|a, b| b.date.cmp(&a.date));

        if self.entry_index >= self.recent.len() && !self.recent.is_empty() {
            self.entry_index = self.recent.len() - 1;
        }
        Ok(())
    }

    pub(crate) fn total_balance(&self) -> Decimal {
        report::total_balance(&self.balances)
    }

    pub(crate) fn submit_form(&mut self, store: &CsvStore) -> Result<()> {
        match self.form.build() {
            Ok(entry) => {
                store.append(&entry)?;
                self.refresh(store)?;
                self.set_status(format!(
                    "Saved {} of {} on {}",
                    entry.kind(),
                    format_amount(entry.amount),
                    entry.date
                ));
                self.form = EntryForm::new();
            }
            Err(e) => self.set_status(format!("{e}")),
        }
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
