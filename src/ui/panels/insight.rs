use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::insight::InsightStatus;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) const HEIGHT: u16 = 6;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.insights.is_pending() {
        " Insight (working) ".to_string()
    } else {
        format!(" Insight [i] \u{00B7} {} ", app.insights.provider_name())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()));

    let body = match app.insights.status() {
        InsightStatus::Idle => Line::from(Span::styled(
            "Press i for a quick read on your spending.",
            theme::dim_style(),
        )),
        InsightStatus::Pending => {
            let frame = SPINNER[app.tick_count % SPINNER.len()];
            Line::from(vec![
                Span::styled(format!("{frame} "), Style::default().fg(theme::ACCENT)),
                Span::styled("Analyzing your spending...", theme::normal_style()),
            ])
        }
        InsightStatus::Ready(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(theme::TEXT),
        )),
        InsightStatus::Failed(text) => Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}
