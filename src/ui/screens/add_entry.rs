use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::EntryKind;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let mut fields: Vec<(&str, String)> = vec![
        ("Date", form.date.clone()),
        ("Category", form.category().to_string()),
        ("Type", form.kind().to_string()),
        (
            "Amount (LKR)",
            if form.amount.is_empty() {
                "0".into()
            } else {
                form.amount.clone()
            },
        ),
        ("Note", form.note.clone()),
    ];
    match form.kind() {
        EntryKind::Income => {
            fields.push(("Deposit To Bank", form.bank().to_string()));
        }
        EntryKind::Expense => {
            fields.push(("Purpose of Payment", form.purpose.clone()));
            fields.push(("Paid From Bank", form.bank().to_string()));
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fields.len() as u16 + 2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let value_style = if i == form.field {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let shown = if value.is_empty() { " " } else { value.as_str() };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{label:<22}"), Style::default().fg(theme::TEXT_DIM)),
                Span::styled(shown.to_string(), value_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Add New Entry ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, chunks[0]);

    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            " Up/Down move between fields | +/- cycle choices | type into text fields",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            " Enter saves the entry | Esc returns to the dashboard",
            theme::dim_style(),
        )),
    ]);
    f.render_widget(hint, chunks[1]);
}
