use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::{Bank, Category, Entry, EntryKind, Flow};

pub(crate) const COLUMNS: [&str; 8] = [
    "Date",
    "Category",
    "Type",
    "Amount",
    "Note",
    "Bank",
    "Paid From Bank",
    "Purpose",
];

/// Flat-file ledger. The whole file is read on every load and rewritten on
/// every append; safe under the single-user, single-session model.
pub(crate) struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub(crate) fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry in file order. A missing file is an empty ledger.
    pub(crate) fn load_all(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open ledger: {}", self.path.display()))?;

        let mut entries = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read ledger record")?;
            if let Some(entry) = parse_row(&record) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    pub(crate) fn append(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.load_all()?;
        entries.push(entry.clone());
        write_entries(&self.path, &entries)
    }

    /// Write a copy of the ledger to another path. Returns the entry count.
    pub(crate) fn export_to(&self, path: &Path) -> Result<usize> {
        let entries = self.load_all()?;
        write_entries(path, &entries)?;
        Ok(entries.len())
    }
}

fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to write ledger: {}", path.display()))?;
    wtr.write_record(COLUMNS)?;
    for entry in entries {
        wtr.write_record(&to_row(entry))?;
    }
    wtr.flush().context("Failed to flush ledger")?;
    Ok(())
}

/// Parse one row leniently. Rows without a usable date or type carry no
/// financial meaning and are skipped; everything else is neutralized rather
/// than rejected (bad amounts become zero, unknown banks become `None`).
fn parse_row(record: &csv::StringRecord) -> Option<Entry> {
    let field = |i: usize| record.get(i).unwrap_or("").trim();

    let date = parse_date(field(0))?;
    let kind = EntryKind::parse(field(2))?;

    let flow = match kind {
        EntryKind::Income => Flow::Income {
            to: Bank::parse(field(5)),
        },
        EntryKind::Expense => Flow::Expense {
            from: Bank::parse(field(6)),
            purpose: field(7).to_string(),
        },
    };

    Some(Entry {
        date,
        category: Category::parse(field(1)),
        amount: parse_amount(field(3)),
        note: field(4).to_string(),
        flow,
    })
}

fn to_row(entry: &Entry) -> [String; 8] {
    let bank_label = |bank: &Option<Bank>| {
        bank.map(|b| b.as_str().to_string()).unwrap_or_default()
    };
    let (bank, paid_from, purpose) = match &entry.flow {
        Flow::Income { to } => (bank_label(to), String::new(), String::new()),
        Flow::Expense { from, purpose } => (String::new(), bank_label(from), purpose.clone()),
    };

    [
        entry.date.format("%Y-%m-%d").to_string(),
        entry
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        entry.kind().as_str().to_string(),
        entry.amount.to_string(),
        entry.note.clone(),
        bank,
        paid_from,
        purpose,
    ]
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Non-numeric amounts read as zero: the entry survives, its value doesn't.
fn parse_amount(s: &str) -> Decimal {
    let cleaned = s.replace(',', "");
    Decimal::from_str(cleaned.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests;
