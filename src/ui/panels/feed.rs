use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::group_by_date_bucket;
use crate::models::Transaction;
use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::{category_icon, format_signed_amount, short_date, truncate};

const CATEGORY_WIDTH: usize = 14;
const AMOUNT_WIDTH: usize = 13;
const DATE_WIDTH: usize = 7;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.ledger.transactions();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(app.focus == Focus::Feed))
        .title(Span::styled(
            format!(" Recent Transactions ({}) ", transactions.len()),
            theme::title_style(),
        ));

    if transactions.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or :expense 4.50 Coffee",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for bucket in group_by_date_bucket(transactions, app.today) {
        lines.push(Line::from(Span::styled(
            bucket.label,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        for txn in bucket.transactions {
            lines.push(transaction_line(txn, width));
        }
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.feed_scroll)
        .take(app.feed_rows)
        .collect();
    f.render_widget(Paragraph::new(visible).block(block), area);
}

fn transaction_line(txn: &Transaction, width: usize) -> Line<'static> {
    let amount_style = if txn.amount.is_sign_positive() && !txn.amount.is_zero() {
        theme::income_style()
    } else {
        theme::expense_style()
    };

    // icon (2 cols) + space
    let fixed = 3 + CATEGORY_WIDTH + AMOUNT_WIDTH + DATE_WIDTH + 1;
    let desc_width = width.saturating_sub(fixed).max(4);
    let category = if txn.category.is_empty() {
        "\u{2014}".to_string()
    } else {
        truncate(&txn.category, CATEGORY_WIDTH - 1)
    };

    Line::from(vec![
        Span::raw(format!("{} ", category_icon(&txn.category))),
        Span::styled(
            format!("{:<desc_width$}", truncate(&txn.description, desc_width)),
            theme::normal_style(),
        ),
        Span::styled(format!("{category:<CATEGORY_WIDTH$}"), theme::dim_style()),
        Span::styled(
            format!("{:>AMOUNT_WIDTH$}", format_signed_amount(txn.amount)),
            amount_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {:>DATE_WIDTH$}", short_date(txn.date)),
            theme::dim_style(),
        ),
    ])
}
