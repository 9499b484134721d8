use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::Utilization;
use crate::models::Category;
use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

/// Each category takes a heading line, a bar, and a caption.
const LINES_PER_CATEGORY: usize = 3;

pub(crate) fn visible_rows(area: Rect) -> usize {
    (area.height.saturating_sub(2) as usize / LINES_PER_CATEGORY).max(1)
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let categories = app.ledger.categories();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(app.focus == Focus::Budgets))
        .title(Span::styled(" Budget Overview ", theme::title_style()));

    if categories.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No budget categories", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = categories
        .iter()
        .skip(app.budget_scroll)
        .take(visible_rows(area))
        .flat_map(|cat| category_lines(cat, width))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn category_lines(category: &Category, width: usize) -> Vec<Line<'static>> {
    let usage = Utilization::of(category);
    let swatch = theme::category_color(category);

    let amount_style = if usage.over_budget {
        Style::default().fg(theme::RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
    };
    let bar_color = if usage.over_budget { theme::RED } else { swatch };

    let spent = format_amount(category.spent);
    let budget = format!(" / {}", format_amount(category.budget));
    let name_width = width.saturating_sub(2 + spent.chars().count() + budget.chars().count());
    let name = truncate(&category.name, name_width);

    let used = format!("{:.1}% used", usage.percent);
    let left = format!("{} left", format_amount(usage.remaining));
    let gap = width.saturating_sub(used.chars().count() + left.chars().count());

    vec![
        Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(swatch)),
            Span::styled(format!("{name:<name_width$}"), theme::normal_style()),
            Span::styled(spent, amount_style),
            Span::styled(budget, theme::dim_style()),
        ]),
        Line::from(Span::styled(
            progress_bar(usage.progress_ratio(), width),
            Style::default().fg(bar_color),
        )),
        Line::from(vec![
            Span::styled(used, theme::dim_style()),
            Span::raw(" ".repeat(gap)),
            Span::styled(left, theme::dim_style()),
        ]),
    ]
}
