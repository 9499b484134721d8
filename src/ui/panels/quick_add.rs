use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;

pub(crate) const COLLAPSED_HEIGHT: u16 = 3;
pub(crate) const EXPANDED_HEIGHT: u16 = 8;

const LABEL_WIDTH: usize = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.input_mode != InputMode::Form {
        render_collapsed(f, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(" Quick Add ", theme::title_style()));
    let inner = block.inner(area);

    let form = &app.form;
    let kind_span = |kind: TransactionKind, glyph: &str| {
        let style = match (form.kind == kind, kind) {
            (true, TransactionKind::Expense) => Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::RED)
                .add_modifier(Modifier::BOLD),
            (true, TransactionKind::Income) => Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
            (false, _) => theme::dim_style(),
        };
        Span::styled(format!(" {glyph} {kind} "), style)
    };

    let lines = vec![
        Line::from(vec![
            label("Type", app.form_field == FormField::Kind),
            kind_span(TransactionKind::Expense, "-"),
            Span::raw(" "),
            kind_span(TransactionKind::Income, "+"),
        ]),
        Line::from(vec![
            label("Amount", app.form_field == FormField::Amount),
            input_value(&form.amount, "0.00"),
        ]),
        Line::from(vec![
            label("Description", app.form_field == FormField::Description),
            input_value(&form.description, "What was it for?"),
        ]),
        Line::from(vec![
            label("Category", app.form_field == FormField::Category),
            Span::styled("\u{25C0} ", theme::dim_style()),
            Span::styled(form.category.clone(), theme::normal_style()),
            Span::styled(" \u{25B6}", theme::dim_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter add \u{00B7} Esc cancel \u{00B7} Tab next field",
            theme::dim_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);

    let text_len = match app.form_field {
        FormField::Amount => Some(form.amount.chars().count()),
        FormField::Description => Some(form.description.chars().count()),
        FormField::Kind | FormField::Category => None,
    };
    if let Some(pos) = text_len.and_then(|len| cursor_position(inner, app.form_field, len)) {
        f.set_cursor_position(pos);
    }
}

/// Terminal cell just past the typed text of `field`, or `None` when that
/// cell falls outside `inner`.
fn cursor_position(inner: Rect, field: FormField, text_len: usize) -> Option<(u16, u16)> {
    let row = FormField::all().iter().position(|f| *f == field)?;
    let col = LABEL_WIDTH.checked_add(text_len)?;
    if col >= usize::from(inner.width) || row >= usize::from(inner.height) {
        return None;
    }
    // Both offsets are below a u16 extent, so the casts and sums fit.
    Some((inner.x + col as u16, inner.y + row as u16))
}

fn render_collapsed(f: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(vec![
        Span::styled(
            "+ Add Transaction",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (a)", theme::dim_style()),
    ]))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(button, area);
}

fn label(name: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::dim_style()
    };
    Span::styled(format!("{name:<width$}", width = LABEL_WIDTH), style)
}

fn input_value(value: &str, placeholder: &str) -> Span<'static> {
    if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(theme::OVERLAY))
    } else {
        Span::styled(value.to_string(), theme::normal_style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let inner = Rect::new(2, 5, 40, 6);
        assert_eq!(cursor_position(inner, FormField::Amount, 3), Some((19, 6)));
        assert_eq!(cursor_position(inner, FormField::Description, 0), Some((16, 7)));
    }

    #[test]
    fn test_cursor_hidden_past_right_edge() {
        let inner = Rect::new(2, 5, 40, 6);
        assert_eq!(cursor_position(inner, FormField::Amount, 25), Some((41, 6)));
        assert_eq!(cursor_position(inner, FormField::Amount, 26), None);
        assert_eq!(cursor_position(inner, FormField::Description, 70_000), None);
        assert_eq!(cursor_position(inner, FormField::Description, usize::MAX), None);
    }

    #[test]
    fn test_cursor_hidden_when_row_clipped() {
        let inner = Rect::new(u16::MAX - 50, u16::MAX - 2, 50, 2);
        assert_eq!(cursor_position(inner, FormField::Description, 1), None);
        assert_eq!(
            cursor_position(inner, FormField::Amount, 1),
            Some((u16::MAX - 50 + 15, u16::MAX - 1))
        );
    }
}
