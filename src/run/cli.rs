use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Bank, Category, Entry, EntryKind, SAVINGS_BANK};
use crate::report;
use crate::store::CsvStore;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &CsvStore) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], store),
        "balances" | "b" => cli_balances(store),
        "growth" => cli_growth(store),
        "entries" | "list" => cli_entries(store),
        "banks" => cli_banks(),
        "export" => cli_export(&args[2..], store),
        "path" => {
            println!("{}", store.path().display());
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgertui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("LedgerTUI — local-only personal finance tracker");
    println!();
    println!("Usage: ledgertui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                            Launch interactive TUI");
    println!("  add income <date> <amount>        Record an income entry");
    println!("    --bank <name>                   Destination bank (required)");
    println!("    --category <Villa|Personal>     Category (default: Villa)");
    println!("    --note <text>                   Free-text note");
    println!("  add expense <date> <amount>       Record an expense entry");
    println!("    --from <name>                   Source bank (required)");
    println!("    --purpose <text>                Purpose of payment");
    println!("    --category, --note              As above");
    println!("  balances, b                       Print per-bank balances");
    println!("  growth                            Print the cumulative growth table");
    println!("  entries, list                     List all entries, newest first");
    println!("  banks                             List tracked banks");
    println!("  export [path]                     Write a copy of the ledger CSV");
    println!("  path                              Print the ledger file location");
    println!("  --help, -h                        Show this help");
    println!("  --version, -V                     Show version");
}

fn cli_add(args: &[String], store: &CsvStore) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!(
            "Usage: ledgertui add <income|expense> <YYYY-MM-DD> <amount> --bank/--from <name>"
        );
    }

    let kind = EntryKind::parse(&args[0])
        .ok_or_else(|| anyhow::anyhow!("Expected 'income' or 'expense', got '{}'", args[0]))?;
    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}' (use YYYY-MM-DD)", args[1]))?;
    let amount = Decimal::from_str(&args[2])
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", args[2]))?;
    if amount < Decimal::ZERO {
        anyhow::bail!("Amount must not be negative");
    }

    let flag = |name: &str| {
        args.windows(2)
            .find(|w| w[0] == name)
            .map(|w| w[1].clone())
    };

    let category = match flag("--category") {
        Some(label) => Category::parse(&label).ok_or_else(|| {
            let known: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            anyhow::anyhow!("Unknown category '{label}'. Known: {}", known.join(", "))
        })?,
        None => Category::Villa,
    };

    let bank_flag = match kind {
        EntryKind::Income => "--bank",
        EntryKind::Expense => "--from",
    };
    let bank_label = flag(bank_flag)
        .ok_or_else(|| anyhow::anyhow!("{bank_flag} <name> is required. See: ledgertui banks"))?;
    let bank = Bank::parse(&bank_label).ok_or_else(|| {
        let known: Vec<&str> = Bank::all().iter().map(|b| b.as_str()).collect();
        anyhow::anyhow!("Unknown bank '{bank_label}'. Known: {}", known.join(", "))
    })?;

    let note = flag("--note").unwrap_or_default();
    let entry = match kind {
        EntryKind::Income => Entry::income(date, Some(category), amount, note, bank),
        EntryKind::Expense => Entry::expense(
            date,
            Some(category),
            amount,
            note,
            bank,
            flag("--purpose").unwrap_or_default(),
        ),
    };

    store.append(&entry)?;
    println!(
        "Saved {} of {} on {}",
        entry.kind(),
        format_amount(entry.amount),
        entry.date
    );
    Ok(())
}

fn cli_balances(store: &CsvStore) -> Result<()> {
    let entries = store.load_all()?;
    let balances = report::bank_balances(&entries);

    println!("LedgerTUI — Bank Balances");
    println!("{}", "─".repeat(40));
    for (bank, amount) in &balances {
        println!("  {:<18} {:>18}", bank.as_str(), format_amount(*amount));
    }
    println!("{}", "─".repeat(40));
    println!(
        "  {:<18} {:>18}",
        "Total",
        format_amount(report::total_balance(&balances))
    );
    Ok(())
}

fn cli_growth(store: &CsvStore) -> Result<()> {
    let entries = store.load_all()?;
    let table = report::growth_table(&entries, SAVINGS_BANK);
    if table.is_empty() {
        println!("No entries yet");
        return Ok(());
    }

    println!(
        "{:<12} {:>14} {:>14} {:>16} {:>14}",
        "Date", "Income", "Villa Exp", "Personal Exp", "Savings"
    );
    println!("{}", "─".repeat(74));
    for point in &table {
        println!(
            "{:<12} {:>14.2} {:>14.2} {:>16.2} {:>14.2}",
            point.date,
            point.income,
            point.villa_expenses,
            point.personal_expenses,
            point.savings
        );
    }
    Ok(())
}

fn cli_entries(store: &CsvStore) -> Result<()> {
    let mut entries = store.load_all()?;
    if entries.is_empty() {
        println!("No entries yet");
        return Ok(());
    }
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    println!(
        "{:<12} {:<10} {:<8} {:>16} {:<17} Detail",
        "Date", "Category", "Type", "Amount", "Bank"
    );
    println!("{}", "─".repeat(84));
    for entry in &entries {
        let sign = if entry.is_income() { "+" } else { "-" };
        let detail = if entry.is_expense() && !entry.purpose().is_empty() {
            entry.purpose()
        } else {
            entry.note.as_str()
        };
        println!(
            "{:<12} {:<10} {:<8} {:>15} {:<17} {}",
            entry.date,
            entry.category.map(|c| c.as_str()).unwrap_or("—"),
            entry.kind(),
            format!("{sign}{:.2}", entry.amount),
            entry.bank().map(|b| b.as_str()).unwrap_or("—"),
            detail,
        );
    }
    Ok(())
}

fn cli_banks() -> Result<()> {
    println!("{:<18} Role", "Bank");
    println!("{}", "─".repeat(30));
    for bank in Bank::all() {
        let role = if *bank == SAVINGS_BANK { "savings" } else { "" };
        println!("{:<18} {role}", bank.as_str());
    }
    Ok(())
}

fn cli_export(args: &[String], store: &CsvStore) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/ledgertui-export.csv")
        });

    let count = store.export_to(Path::new(&output_path))?;
    if count == 0 {
        println!("Ledger is empty; wrote header only to {output_path}");
    } else {
        println!("Exported {count} entries to {output_path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
