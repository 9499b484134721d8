use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::BalanceSummary;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) const HEIGHT: u16 = 8;

pub(crate) fn render(f: &mut Frame, area: Rect, summary: &BalanceSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PURPLE))
        .title(Span::styled(" Total Balance ", theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(inner);

    let balance_color = if summary.balance.is_sign_negative() {
        theme::RED
    } else {
        theme::TEXT
    };
    let headline = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(summary.balance),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Available balance", theme::dim_style())),
    ])
    .centered();
    f.render_widget(headline, rows[0]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_flow(
        f,
        halves[0],
        "\u{25B2} Income",
        format!("+{}", format_amount(summary.total_income)),
        theme::GREEN,
    );
    render_flow(
        f,
        halves[1],
        "\u{25BC} Expenses",
        format!("-{}", format_amount(summary.total_expenses)),
        theme::RED,
    );
}

fn render_flow(f: &mut Frame, area: Rect, label: &str, amount: String, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(label.to_string(), theme::dim_style())),
        Line::from(Span::styled(
            amount,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered();
    f.render_widget(text, area);
}
