use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::config::Config;
use crate::insight::{build_provider, Insights};
use crate::ledger::sample::seed_state;
use crate::ui::app::{App, Focus, InputMode};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_up};

/// How long to wait for a key before redrawing, so a pending insight can
/// animate and complete without input.
const TICK_RATE: Duration = Duration::from_millis(100);

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let provider = build_provider(config)?;
    let mut app = App::new(seed_state(), Insights::new(provider), config.today);
    info!(provider = app.insights.provider_name(), today = %app.today, "Starting TUI session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }
    info!(transactions = app.ledger.transactions().len(), "Session ended");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Form => handle_form_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page_size(app) / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page_size(app) / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('i') => app.request_insight(),
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
        KeyCode::Left => app.form_adjust(-1),
        KeyCode::Right => app.form_adjust(1),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(c) => app.form_push_char(c),
        _ => {}
    }
}

// ── Scrolling ────────────────────────────────────────────────

fn page_size(app: &App) -> usize {
    match app.focus {
        Focus::Feed => app.feed_rows,
        Focus::Budgets => app.budget_rows,
    }
}

fn handle_move_down(app: &mut App) {
    match app.focus {
        Focus::Feed => {
            let len = app.feed_line_count();
            scroll_down(&mut app.feed_scroll, len, app.feed_rows);
        }
        Focus::Budgets => {
            let len = app.budget_count();
            scroll_down(&mut app.budget_scroll, len, app.budget_rows);
        }
    }
}

fn handle_move_up(app: &mut App) {
    match app.focus {
        Focus::Feed => scroll_up(&mut app.feed_scroll),
        Focus::Budgets => scroll_up(&mut app.budget_scroll),
    }
}

fn handle_goto_top(app: &mut App) {
    match app.focus {
        Focus::Feed => app.feed_scroll = 0,
        Focus::Budgets => app.budget_scroll = 0,
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.focus {
        Focus::Feed => {
            let len = app.feed_line_count();
            scroll_to_bottom(&mut app.feed_scroll, len, app.feed_rows);
        }
        Focus::Budgets => {
            let len = app.budget_count();
            scroll_to_bottom(&mut app.budget_scroll, len, app.budget_rows);
        }
    }
}
