use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, EntryForm, Screen};
use crate::store::CsvStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &CsvStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit LedgerTUI", cmd_quit, r);
    register_command!("quit", "Quit LedgerTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Entries", cmd_entries, r);
    register_command!("entries", "Go to Entries", cmd_entries, r);
    register_command!("a", "Open the Add Entry form", cmd_add, r);
    register_command!("add", "Open the Add Entry form", cmd_add, r);
    register_command!("reload", "Re-read the ledger file", cmd_reload, r);
    register_command!(
        "export",
        "Export the ledger (e.g. :export ~/ledger-backup.csv)",
        cmd_export,
        r
    );
    register_command!("path", "Show the ledger file location", cmd_path, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &CsvStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(store)?;
    Ok(())
}

fn cmd_entries(_args: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    app.screen = Screen::Entries;
    app.refresh(store)?;
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, _store: &CsvStore) -> anyhow::Result<()> {
    app.screen = Screen::AddEntry;
    app.form = EntryForm::new();
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    app.refresh(store)?;
    app.set_status(format!("Reloaded {} entries", app.entries.len()));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/ledgertui-export.csv")
    } else {
        crate::run::shellexpand(args)
    };

    let count = store.export_to(Path::new(&path))?;
    app.set_status(format!("Exported {count} entries to {path}"));
    Ok(())
}

fn cmd_path(_args: &str, app: &mut App, store: &CsvStore) -> anyhow::Result<()> {
    app.set_status(format!("Ledger file: {}", store.path().display()));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &CsvStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
