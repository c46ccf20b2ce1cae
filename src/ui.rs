use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::calculator::SavingsTone;
use crate::format::{format_currency, format_currency_text};
use crate::input::{parse_decimal, FormField};

pub fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Mortgage Refinance Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[1]);

    render_form(f, app, columns[0]);
    render_overview(f, app, columns[1]);
    render_status(f, app, rows[2]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = app.focus == Focus::Field(field);
            let marker = if focused { "▶ " } else { "  " };
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{}{:<26}", marker, field.label()), style),
                Span::styled(app.form.field(field).to_string(), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let button_style = if app.focus == Focus::CalculateButton {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ Calculate Savings ]", button_style)));

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Loan Details"));
    f.render_widget(form, area);
}

/// Amount lines appear only for text that starts with a number.
fn amount_line<'a>(label: &str, text: &str) -> Option<Line<'a>> {
    if text.is_empty() || parse_decimal(text).is_nan() {
        return None;
    }
    Some(money_line(label, format_currency_text(text), Style::default()))
}

fn money_line<'a>(label: &str, value: String, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), style),
        Span::styled(format!("${value}"), style.add_modifier(Modifier::BOLD)),
    ])
}

fn render_overview(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.extend(amount_line("Current Loan Amount", &app.form.current_loan_amount));
    if let Some(result) = app.result {
        lines.push(money_line(
            "Current Monthly Payment",
            format_currency(Some(result.current_payment)),
            Style::default(),
        ));
    }
    lines.extend(amount_line("New Loan Amount", &app.form.new_loan_amount));
    if let Some(result) = app.result {
        lines.push(money_line(
            "New Monthly Payment",
            format_currency(Some(result.new_payment)),
            Style::default(),
        ));

        let style = match result.tone() {
            SavingsTone::Positive => Style::default().fg(Color::Green),
            SavingsTone::NonPositive => Style::default().fg(Color::Red),
        };
        lines.push(Line::from(""));
        lines.push(money_line(
            "Projected Monthly Savings",
            format_currency(Some(result.monthly_savings)),
            style,
        ));
    }

    let overview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Payment & Savings Overview"),
    );
    f.render_widget(overview, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = app.status.clone().unwrap_or_else(|| {
        "Tab/↓: next | Shift-Tab/↑: previous | Enter/c: calculate | e: export JSON | Esc/q: quit"
            .to_string()
    });
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
