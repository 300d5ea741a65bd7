//! Balance and growth derivation. Everything here is a pure function of the
//! loaded entry set; callers recompute on every refresh.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Bank, Category, Entry, Flow};

/// Signed balance per tracked bank. Every bank appears exactly once, zero
/// when unreferenced; entries naming an untracked bank contribute nothing.
pub(crate) fn bank_balances(entries: &[Entry]) -> Vec<(Bank, Decimal)> {
    let mut balances: Vec<(Bank, Decimal)> = Bank::all()
        .iter()
        .map(|bank| (*bank, Decimal::ZERO))
        .collect();

    for entry in entries {
        let (bank, signed) = match &entry.flow {
            Flow::Income { to } => (*to, entry.amount),
            Flow::Expense { from, .. } => (*from, -entry.amount),
        };
        let Some(bank) = bank else { continue };
        if let Some(slot) = balances.iter_mut().find(|(b, _)| *b == bank) {
            slot.1 += signed;
        }
    }

    balances
}

pub(crate) fn total_balance(balances: &[(Bank, Decimal)]) -> Decimal {
    balances.iter().map(|(_, amount)| *amount).sum()
}

/// One row of the growth table. All four series are cumulative up to and
/// including `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GrowthPoint {
    pub(crate) date: NaiveDate,
    pub(crate) income: Decimal,
    pub(crate) villa_expenses: Decimal,
    pub(crate) personal_expenses: Decimal,
    pub(crate) savings: Decimal,
}

/// Build the cumulative growth table: total income, Villa expenses,
/// Personal expenses, and income into `savings_bank`, each summed per date
/// and then prefix-summed in ascending date order. Same-date entries are
/// pre-aggregated by the grouping step. An empty ledger yields an empty
/// table.
pub(crate) fn growth_table(entries: &[Entry], savings_bank: Bank) -> Vec<GrowthPoint> {
    // BTreeMap keys keep the dates ascending for the cumulative pass; the
    // union of all four series' dates falls out of sharing one map.
    let mut by_date: BTreeMap<NaiveDate, [Decimal; 4]> = BTreeMap::new();

    for entry in entries {
        let sums = by_date.entry(entry.date).or_default();
        match &entry.flow {
            Flow::Income { to } => {
                sums[0] += entry.amount;
                if *to == Some(savings_bank) {
                    sums[3] += entry.amount;
                }
            }
            Flow::Expense { .. } => match entry.category {
                Some(Category::Villa) => sums[1] += entry.amount,
                Some(Category::Personal) => sums[2] += entry.amount,
                None => {}
            },
        }
    }

    let mut running = [Decimal::ZERO; 4];
    by_date
        .into_iter()
        .map(|(date, sums)| {
            for (acc, daily) in running.iter_mut().zip(sums) {
                *acc += daily;
            }
            GrowthPoint {
                date,
                income: running[0],
                villa_expenses: running[1],
                personal_expenses: running[2],
                savings: running[3],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
