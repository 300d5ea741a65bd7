#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Bank, Category, Entry, Flow};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn temp_store() -> (tempfile::TempDir, CsvStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path().join("ledger.csv"));
    (dir, store)
}

fn write_raw(store: &CsvStore, contents: &str) {
    std::fs::write(store.path(), contents).unwrap();
}

// ── Loading ───────────────────────────────────────────────────

#[test]
fn test_missing_file_is_empty_ledger() {
    let (_dir, store) = temp_store();
    let entries = store.load_all().unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_append_then_load_roundtrip() {
    let (_dir, store) = temp_store();

    let income = Entry::income(
        d("2024-01-01"),
        Some(Category::Villa),
        dec!(1000.00),
        "first deposit".into(),
        Bank::Boc,
    );
    let expense = Entry::expense(
        d("2024-01-02"),
        Some(Category::Personal),
        dec!(42.50),
        String::new(),
        Bank::Sampath,
        "phone bill".into(),
    );

    store.append(&income).unwrap();
    store.append(&expense).unwrap();

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], income);
    assert_eq!(entries[1], expense);
}

#[test]
fn test_append_preserves_existing_rows() {
    let (_dir, store) = temp_store();

    for day in 1..=5 {
        let entry = Entry::income(
            d(&format!("2024-01-{day:02}")),
            Some(Category::Villa),
            dec!(100),
            String::new(),
            Bank::Dfcc,
        );
        store.append(&entry).unwrap();
    }

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 5);
    // File order is append order
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.date, d(&format!("2024-01-{:02}", i + 1)));
    }
}

#[test]
fn test_header_row_written() {
    let (_dir, store) = temp_store();
    let entry = Entry::income(
        d("2024-01-01"),
        None,
        dec!(10),
        String::new(),
        Bank::Boc,
    );
    store.append(&entry).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let first_line = raw.lines().next().unwrap();
    assert_eq!(
        first_line,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose"
    );
}

#[test]
fn test_income_and_expense_columns() {
    let (_dir, store) = temp_store();
    store
        .append(&Entry::income(
            d("2024-01-01"),
            Some(Category::Villa),
            dec!(10),
            String::new(),
            Bank::Boc,
        ))
        .unwrap();
    store
        .append(&Entry::expense(
            d("2024-01-02"),
            Some(Category::Villa),
            dec!(5),
            String::new(),
            Bank::Boc,
            "cement".into(),
        ))
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    // Income populates Bank, leaves Paid From Bank and Purpose empty
    assert_eq!(lines[1], "2024-01-01,Villa,Income,10,,BOC,,");
    // Expense is the mirror image
    assert_eq!(lines[2], "2024-01-02,Villa,Expense,5,,,BOC,cement");
}

#[test]
fn test_note_with_commas_roundtrips() {
    let (_dir, store) = temp_store();
    let entry = Entry::expense(
        d("2024-03-01"),
        Some(Category::Personal),
        dec!(15),
        "dinner, drinks, tip".into(),
        Bank::Commercial,
        "night out, with friends".into(),
    );
    store.append(&entry).unwrap();

    let entries = store.load_all().unwrap();
    assert_eq!(entries[0].note, "dinner, drinks, tip");
    assert_eq!(entries[0].purpose(), "night out, with friends");
}

// ── Lenient parsing ───────────────────────────────────────────

#[test]
fn test_malformed_amount_coerced_to_zero() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Villa,Income,not-a-number,,BOC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, Decimal::ZERO);
}

#[test]
fn test_amount_with_thousand_separators() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Villa,Income,\"1,250.75\",,BOC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries[0].amount, dec!(1250.75));
}

#[test]
fn test_unknown_bank_loads_as_none() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Villa,Income,100,,HSBC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].bank(), None);
    assert_eq!(entries[0].amount, dec!(100));
}

#[test]
fn test_unknown_category_loads_as_none() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Garden,Expense,100,,,BOC,tools\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries[0].category, None);
}

#[test]
fn test_unknown_type_row_skipped() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Villa,Transfer,100,,BOC,,\n\
         2024-01-02,Villa,Income,50,,BOC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, dec!(50));
}

#[test]
fn test_bad_date_row_skipped() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         ,Villa,Income,100,,BOC,,\n\
         someday,Villa,Income,100,,BOC,,\n\
         2024-01-02,Villa,Income,50,,BOC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_slash_date_formats_accepted() {
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         01/15/2024,Villa,Income,100,,BOC,,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries[0].date, d("2024-01-15"));
}

#[test]
fn test_expense_reads_paid_from_column() {
    // An income row with junk in the Paid From Bank column: the type decides
    // which bank column counts.
    let (_dir, store) = temp_store();
    write_raw(
        &store,
        "Date,Category,Type,Amount,Note,Bank,Paid From Bank,Purpose\n\
         2024-01-01,Villa,Income,100,,BOC,Sampath Bank,\n",
    );

    let entries = store.load_all().unwrap();
    assert_eq!(entries[0].bank(), Some(Bank::Boc));
    assert!(matches!(entries[0].flow, Flow::Income { .. }));
}

// ── Export ────────────────────────────────────────────────────

#[test]
fn test_export_to_copies_ledger() {
    let (dir, store) = temp_store();
    store
        .append(&Entry::income(
            d("2024-01-01"),
            Some(Category::Villa),
            dec!(100),
            String::new(),
            Bank::Boc,
        ))
        .unwrap();

    let out = dir.path().join("backup.csv");
    let count = store.export_to(&out).unwrap();
    assert_eq!(count, 1);

    let copy = CsvStore::open(out);
    assert_eq!(copy.load_all().unwrap(), store.load_all().unwrap());
}

#[test]
fn test_export_empty_ledger() {
    let (dir, store) = temp_store();
    let out = dir.path().join("backup.csv");
    let count = store.export_to(&out).unwrap();
    assert_eq!(count, 0);
    assert!(out.exists());
}
