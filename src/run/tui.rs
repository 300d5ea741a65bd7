use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::CsvStore;
use crate::ui::app::{App, EntryForm, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &CsvStore) -> Result<()> {
    let mut app = App::new();
    app.refresh(store)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &CsvStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, plus table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Command => handle_command_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &CsvStore) -> Result<()> {
    // The form owns the keyboard while it is on screen
    if app.screen == Screen::AddEntry {
        return handle_form_input(key, app, store);
    }

    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Dashboard)?,
        KeyCode::Char('2') => switch_screen(app, store, Screen::Entries)?,
        KeyCode::Char('3') => switch_screen(app, store, Screen::AddEntry)?,
        KeyCode::Char('a') => switch_screen(app, store, Screen::AddEntry)?,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next])?;
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev])?;
        }
        KeyCode::Char('r') => {
            app.refresh(store)?;
            app.set_status(format!("Reloaded {} entries", app.entries.len()));
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Entries {
                scroll_to_top(&mut app.entry_index, &mut app.entry_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Entries {
                scroll_to_bottom(
                    &mut app.entry_index,
                    &mut app.entry_scroll,
                    app.recent.len(),
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App, store: &CsvStore) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Esc => {
            app.screen = Screen::Dashboard;
        }
        KeyCode::Enter => app.submit_form(store)?,
        KeyCode::Down | KeyCode::Tab => app.form.next_field(),
        KeyCode::Up | KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Char('+') | KeyCode::Char('=') if app.form.is_cycle_field() => {
            app.form.cycle(1);
        }
        KeyCode::Char('-') if app.form.is_cycle_field() => app.form.cycle(-1),
        KeyCode::Right if app.form.is_cycle_field() => app.form.cycle(1),
        KeyCode::Left if app.form.is_cycle_field() => app.form.cycle(-1),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &CsvStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &CsvStore, screen: Screen) -> Result<()> {
    app.screen = screen;
    match screen {
        Screen::Dashboard | Screen::Entries => app.refresh(store)?,
        Screen::AddEntry => app.form = EntryForm::new(),
    }
    Ok(())
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Entries {
        scroll_down(
            &mut app.entry_index,
            &mut app.entry_scroll,
            app.recent.len(),
            app.visible_rows,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Entries {
        scroll_up(&mut app.entry_index, &mut app.entry_scroll);
    }
}
