//! TUI chart state and event loop

use crate::game::{MAX_TURNS, Stats};
use crate::output::formatters::percent;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// How bar values are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    Counts,
    Percentages,
}

/// One bar of a chart panel
#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    pub label: String,
    pub value: u64,
    pub text: String,
}

/// Chart application state
pub struct ChartApp {
    pub stats: Stats,
    pub title: String,
    pub label_mode: LabelMode,
    pub should_quit: bool,
}

impl ChartApp {
    #[must_use]
    pub fn new(stats: Stats, title: impl Into<String>) -> Self {
        Self {
            stats,
            title: title.into(),
            label_mode: LabelMode::Counts,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Tab => {
                self.label_mode = match self.label_mode {
                    LabelMode::Counts => LabelMode::Percentages,
                    LabelMode::Percentages => LabelMode::Counts,
                };
            }
            _ => {}
        }
    }

    fn bar(&self, label: String, value: u64, total: u64) -> BarData {
        let text = match self.label_mode {
            LabelMode::Counts => value.to_string(),
            LabelMode::Percentages => format!("{:.1}%", percent(value, total)),
        };
        BarData { label, value, text }
    }

    /// Left panel: lost vs won
    #[must_use]
    pub fn outcome_bars(&self) -> Vec<BarData> {
        let total = self.stats.total_games();
        vec![
            self.bar("lost".to_string(), self.stats.losses(), total),
            self.bar("win".to_string(), self.stats.total_wins(), total),
        ]
    }

    /// Right panel: wins by turn
    #[must_use]
    pub fn turn_bars(&self) -> Vec<BarData> {
        let wins = self.stats.total_wins();
        (1..=MAX_TURNS)
            .map(|turn| self.bar(turn.to_string(), self.stats.wins_at(turn), wins))
            .collect()
    }
}

/// Show the chart until the user quits
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_chart(app: ChartApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: ChartApp,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
