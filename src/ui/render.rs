use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, Focus, InputMode};
use super::commands;
use super::panels;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Panels
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_panels(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Finance Tracker ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Manage your money wisely", theme::dim_style()),
    ]))
    .style(theme::header_style());
    f.render_widget(header, area);
}

fn render_panels(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let quick_add_height = if app.input_mode == InputMode::Form {
        panels::quick_add::EXPANDED_HEIGHT
    } else {
        panels::quick_add::COLLAPSED_HEIGHT
    };

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(panels::balance::HEIGHT),
            Constraint::Length(quick_add_height),
            Constraint::Min(6),                              // Budget overview
            Constraint::Length(panels::insight::HEIGHT),
        ])
        .split(columns[0]);

    panels::balance::render(f, left[0], &app.summary());
    panels::quick_add::render(f, left[1], app);

    app.budget_rows = panels::budget::visible_rows(left[2]);
    panels::budget::render(f, left[2], app);
    panels::insight::render(f, left[3], app);

    app.feed_rows = columns[1].height.saturating_sub(2).max(1) as usize;
    panels::feed::render(f, columns[1], app);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Form => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::PURPLE)
            .add_modifier(Modifier::BOLD),
    };

    let focus = match app.focus {
        Focus::Budgets => "Budgets",
        Focus::Feed => "Transactions",
    };
    let info = format!(
        " {focus} | {} | {} ",
        app.today.format("%a %b %-d, %Y"),
        app.transaction_count_label()
    );

    let right = match app.input_mode {
        InputMode::Form => " Tab field | \u{2190}/\u{2192} choose | Enter add | Esc cancel ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Normal if app.insights.is_pending() => " a add | Tab focus | ? help ",
        InputMode::Normal => " a add | i insight | Tab focus | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Form | InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add a transaction, : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    format!(" {}", app.status_message),
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " Finance Tracker Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navigation"),
        row("  j/k or Up/Down   Scroll panel          Tab        Switch panel"),
        row("  g/G              Top/Bottom            Ctrl-d/u   Page Down/Up"),
        row("  Ctrl-q           Quit"),
        Line::from(""),
        section(" Actions"),
        row("  a               Quick add              i          Budget insight"),
        row("  :               Command mode           Esc        Clear status"),
        Line::from(""),
        section(" Quick add"),
        row("  Tab/Shift-Tab   Next/Prev field        Left/Right Change type/category"),
        row("  Enter           Add transaction        Esc        Cancel"),
        Line::from(""),
        section(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
