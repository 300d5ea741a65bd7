use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.recent.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No entries yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with a or :add",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Entries (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Type", "Amount", "Bank", "Detail"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .recent
        .iter()
        .enumerate()
        .skip(app.entry_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, entry)| {
            let is_cursor = i == app.entry_index;

            let amount_style = if entry.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let amount_str = if entry.is_income() {
                format!("+{}", format_amount(entry.amount))
            } else {
                format_amount(-entry.amount)
            };

            let bank = entry.bank().map(|b| b.as_str()).unwrap_or("—");
            let category = entry.category.map(|c| c.as_str()).unwrap_or("—");
            // Expenses lead with their purpose; the note fills in otherwise
            let detail = if entry.is_expense() && !entry.purpose().is_empty() {
                entry.purpose()
            } else {
                entry.note.as_str()
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!(" {}", entry.date)),
                Cell::from(category),
                Cell::from(entry.kind().as_str()),
                Cell::from(Span::styled(amount_str, amount_style)),
                Cell::from(bank),
                Cell::from(truncate(detail, 36)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(18),
        Constraint::Length(17),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Entries ({}) ", app.recent.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
