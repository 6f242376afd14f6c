//! TUI rendering with ratatui
//!
//! Two bar chart panels: the win/loss split and the wins-by-turn distribution.

use super::app::{BarData, ChartApp, LabelMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &ChartApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Charts
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Win/loss
            Constraint::Percentage(65), // Wins by turn
        ])
        .split(chunks[1]);

    let total = app.stats.total_games();
    render_chart(
        f,
        &format!(" Distribution of {total} games "),
        &app.outcome_bars(),
        |label| {
            if label == "lost" {
                Color::Red
            } else {
                Color::Green
            }
        },
        chart_chunks[0],
    );
    render_chart(
        f,
        " Win distribution ",
        &app.turn_bars(),
        |_| Color::Cyan,
        chart_chunks[1],
    );

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &ChartApp, area: Rect) {
    let header = Paragraph::new(format!("🎲 WORDLE SIMULATION - {}", app.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_chart(
    f: &mut Frame,
    title: &str,
    data: &[BarData],
    color_for: impl Fn(&str) -> Color,
    area: Rect,
) {
    let bars: Vec<Bar> = data
        .iter()
        .map(|bar| {
            let color = color_for(&bar.label);
            Bar::default()
                .value(bar.value)
                .text_value(bar.text.clone())
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    // Spread the bars over the panel width
    let inner_width = area.width.saturating_sub(2);
    let count = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 15);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_status(f: &mut Frame, app: &ChartApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.1}%",
        app.stats.total_games(),
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let average_text = app
        .stats
        .average_winning_turn()
        .map_or_else(|| "No wins yet".to_string(), |avg| format!("Avg win turn: {avg:.2}"));
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.label_mode {
        LabelMode::Counts => "q: Quit | p: Show percentages",
        LabelMode::Percentages => "q: Quit | p: Show counts",
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
