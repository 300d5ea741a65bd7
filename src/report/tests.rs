#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Bank, Category, Entry, Flow, SAVINGS_BANK};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn income(date: &str, amount: Decimal, to: Bank) -> Entry {
    Entry::income(d(date), Some(Category::Villa), amount, String::new(), to)
}

fn expense(date: &str, category: Category, amount: Decimal, from: Bank) -> Entry {
    Entry::expense(
        d(date),
        Some(category),
        amount,
        String::new(),
        from,
        String::new(),
    )
}

fn balance_of(balances: &[(Bank, Decimal)], bank: Bank) -> Decimal {
    balances
        .iter()
        .find(|(b, _)| *b == bank)
        .map(|(_, amount)| *amount)
        .unwrap()
}

// ── Balances ──────────────────────────────────────────────────

#[test]
fn test_empty_ledger_all_banks_zero() {
    let balances = bank_balances(&[]);
    assert_eq!(balances.len(), Bank::all().len());
    for (_, amount) in &balances {
        assert_eq!(*amount, Decimal::ZERO);
    }
}

#[test]
fn test_income_credits_only_target_bank() {
    let before = bank_balances(&[]);
    let after = bank_balances(&[income("2024-01-01", dec!(1000), Bank::Dfcc)]);

    assert_eq!(balance_of(&after, Bank::Dfcc), dec!(1000));
    for bank in Bank::all() {
        if *bank != Bank::Dfcc {
            assert_eq!(balance_of(&after, *bank), balance_of(&before, *bank));
        }
    }
}

#[test]
fn test_expense_debits_source_bank() {
    let entries = vec![
        income("2024-01-01", dec!(500), Bank::Sampath),
        expense("2024-01-02", Category::Personal, dec!(120), Bank::Sampath),
    ];
    let balances = bank_balances(&entries);
    assert_eq!(balance_of(&balances, Bank::Sampath), dec!(380));
}

#[test]
fn test_balance_can_go_negative() {
    let entries = vec![expense(
        "2024-01-01",
        Category::Villa,
        dec!(75),
        Bank::Commercial,
    )];
    let balances = bank_balances(&entries);
    assert_eq!(balance_of(&balances, Bank::Commercial), dec!(-75));
}

#[test]
fn test_conservation_law() {
    // Sum of balances equals known-bank income minus known-bank expense.
    let entries = vec![
        income("2024-01-01", dec!(1000), Bank::Boc),
        income("2024-01-03", dec!(200), Bank::Commercial),
        expense("2024-01-02", Category::Villa, dec!(300), Bank::Boc),
        expense("2024-01-04", Category::Personal, dec!(50), Bank::Dfcc),
    ];
    let balances = bank_balances(&entries);
    assert_eq!(total_balance(&balances), dec!(1200) - dec!(350));
}

#[test]
fn test_unknown_bank_contributes_nothing() {
    let phantom = Entry {
        date: d("2024-01-01"),
        category: Some(Category::Villa),
        amount: dec!(9999),
        note: String::new(),
        flow: Flow::Income { to: None },
    };
    let balances = bank_balances(&[phantom]);
    for (_, amount) in &balances {
        assert_eq!(*amount, Decimal::ZERO);
    }
}

#[test]
fn test_order_does_not_matter() {
    let mut entries = vec![
        income("2024-01-01", dec!(1000), Bank::Boc),
        expense("2024-01-02", Category::Villa, dec!(300), Bank::Boc),
        income("2024-01-02", dec!(500), Bank::Boc),
    ];
    let forward = bank_balances(&entries);
    entries.reverse();
    let backward = bank_balances(&entries);
    assert_eq!(forward, backward);
}

// ── Growth table ──────────────────────────────────────────────

#[test]
fn test_empty_ledger_empty_table() {
    assert!(growth_table(&[], SAVINGS_BANK).is_empty());
}

#[test]
fn test_worked_example() {
    let entries = vec![
        income("2024-01-01", dec!(1000), Bank::Boc),
        expense("2024-01-02", Category::Villa, dec!(300), Bank::Boc),
        income("2024-01-02", dec!(500), Bank::Boc),
    ];

    let balances = bank_balances(&entries);
    assert_eq!(balance_of(&balances, Bank::Boc), dec!(1200));

    let table = growth_table(&entries, Bank::Boc);
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].date, d("2024-01-01"));
    assert_eq!(table[0].income, dec!(1000));
    assert_eq!(table[0].villa_expenses, Decimal::ZERO);
    assert_eq!(table[0].savings, dec!(1000));

    assert_eq!(table[1].date, d("2024-01-02"));
    assert_eq!(table[1].income, dec!(1500));
    assert_eq!(table[1].villa_expenses, dec!(300));
    assert_eq!(table[1].savings, dec!(1500));
}

#[test]
fn test_series_are_non_decreasing() {
    let entries = vec![
        income("2024-01-01", dec!(100), Bank::Boc),
        expense("2024-01-02", Category::Villa, dec!(40), Bank::Boc),
        income("2024-01-05", dec!(250), Bank::Dfcc),
        expense("2024-01-07", Category::Personal, dec!(10), Bank::Sampath),
        income("2024-02-01", dec!(75), Bank::Boc),
    ];
    let table = growth_table(&entries, SAVINGS_BANK);
    for window in table.windows(2) {
        assert!(window[1].income >= window[0].income);
        assert!(window[1].villa_expenses >= window[0].villa_expenses);
        assert!(window[1].personal_expenses >= window[0].personal_expenses);
        assert!(window[1].savings >= window[0].savings);
    }
}

#[test]
fn test_missing_dates_carry_previous_totals() {
    let entries = vec![
        income("2024-01-01", dec!(1000), Bank::Commercial),
        expense("2024-01-05", Category::Personal, dec!(200), Bank::Commercial),
    ];
    let table = growth_table(&entries, SAVINGS_BANK);
    assert_eq!(table.len(), 2);
    // No income on the 5th, but the cumulative total carries forward
    assert_eq!(table[1].income, dec!(1000));
    assert_eq!(table[1].personal_expenses, dec!(200));
    // And no expenses yet on the 1st
    assert_eq!(table[0].personal_expenses, Decimal::ZERO);
}

#[test]
fn test_same_date_entries_pre_aggregated() {
    let entries = vec![
        income("2024-01-01", dec!(100), Bank::Boc),
        income("2024-01-01", dec!(150), Bank::Dfcc),
        income("2024-01-01", dec!(50), Bank::Boc),
    ];
    let table = growth_table(&entries, Bank::Boc);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].income, dec!(300));
    assert_eq!(table[0].savings, dec!(150));
}

#[test]
fn test_savings_tracks_only_designated_bank() {
    let entries = vec![
        income("2024-01-01", dec!(100), Bank::Boc),
        income("2024-01-02", dec!(999), Bank::Commercial),
    ];
    let table = growth_table(&entries, Bank::Boc);
    assert_eq!(table[1].income, dec!(1099));
    assert_eq!(table[1].savings, dec!(100));
}

#[test]
fn test_uncategorized_expense_joins_no_category_series() {
    let orphan = Entry {
        date: d("2024-01-01"),
        category: None,
        amount: dec!(80),
        note: String::new(),
        flow: Flow::Expense {
            from: Some(Bank::Boc),
            purpose: String::new(),
        },
    };
    let table = growth_table(&[orphan], SAVINGS_BANK);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].villa_expenses, Decimal::ZERO);
    assert_eq!(table[0].personal_expenses, Decimal::ZERO);
    // It still debits the balance, though
    let balances = bank_balances(&[Entry {
        date: d("2024-01-01"),
        category: None,
        amount: dec!(80),
        note: String::new(),
        flow: Flow::Expense {
            from: Some(Bank::Boc),
            purpose: String::new(),
        },
    }]);
    assert_eq!(balance_of(&balances, Bank::Boc), dec!(-80));
}

#[test]
fn test_zero_amount_entries_are_neutral() {
    // A coerced-to-zero amount shows up in no sum
    let entries = vec![
        income("2024-01-01", Decimal::ZERO, Bank::Boc),
        income("2024-01-01", dec!(10), Bank::Boc),
    ];
    let balances = bank_balances(&entries);
    assert_eq!(balance_of(&balances, Bank::Boc), dec!(10));
    let table = growth_table(&entries, Bank::Boc);
    assert_eq!(table[0].income, dec!(10));
}
