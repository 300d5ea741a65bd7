use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::SAVINGS_BANK;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Bank balance cards
            Constraint::Length(1), // Last-updated line
            Constraint::Min(10),   // Growth chart
        ])
        .split(area);

    render_balance_cards(f, chunks[0], app);
    render_updated_line(f, chunks[1]);
    render_growth_chart(f, chunks[2], app);
}

fn render_balance_cards(f: &mut Frame, area: Rect, app: &App) {
    if app.balances.is_empty() {
        return;
    }
    let count = app.balances.len() as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (i, (bank, amount)) in app.balances.iter().enumerate() {
        let subtitle = if *bank == SAVINGS_BANK {
            Some("savings".to_string())
        } else {
            None
        };
        render_card(f, cards[i], bank.as_str(), *amount, subtitle);
    }
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, subtitle: Option<String>) {
    let color = if amount >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_updated_line(f: &mut Frame, area: Rect) {
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" Last updated: {}", Local::now().format("%B %d, %Y")),
        theme::dim_style(),
    )));
    f.render_widget(line, area);
}

fn render_growth_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Finance Growth ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.growth.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No financial data yet. Add entries to see the chart.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let first = app.growth[0].date;
    let last = app.growth[app.growth.len() - 1].date;
    let day = |date: chrono::NaiveDate| (date - first).num_days() as f64;
    let value = |amount: Decimal| amount.to_f64().unwrap_or(0.0);

    let income: Vec<(f64, f64)> = app
        .growth
        .iter()
        .map(|p| (day(p.date), value(p.income)))
        .collect();
    let villa: Vec<(f64, f64)> = app
        .growth
        .iter()
        .map(|p| (day(p.date), value(p.villa_expenses)))
        .collect();
    let personal: Vec<(f64, f64)> = app
        .growth
        .iter()
        .map(|p| (day(p.date), value(p.personal_expenses)))
        .collect();
    let savings: Vec<(f64, f64)> = app
        .growth
        .iter()
        .map(|p| (day(p.date), value(p.savings)))
        .collect();

    let x_max = day(last).max(1.0);
    let y_max = app
        .growth
        .iter()
        .flat_map(|p| [p.income, p.villa_expenses, p.personal_expenses, p.savings])
        .max()
        .map(value)
        .unwrap_or(0.0)
        .max(1.0);

    let series_style = |color| Style::default().fg(color);
    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(series_style(theme::GREEN))
            .data(&income),
        Dataset::default()
            .name("Villa Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(series_style(theme::RED))
            .data(&villa),
        Dataset::default()
            .name("Personal Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(series_style(theme::YELLOW))
            .data(&personal),
        Dataset::default()
            .name(format!("Savings ({SAVINGS_BANK})"))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(series_style(theme::TEAL))
            .data(&savings),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, x_max])
                .labels([first.to_string(), last.to_string()]),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, y_max * 1.05])
                .labels([
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{y_max:.0}"),
                ]),
        );

    f.render_widget(chart, area);
}
