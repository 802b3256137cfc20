//! Single-screen layout: score, countdown, tap button, about popup
//!
//! Rendering is a pure function of the screen state, so it can be
//! exercised against a test backend without a real terminal.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::state::{AppState, GamePhase};
use crate::config::GameSettings;

/// Draws the whole screen
pub fn render(frame: &mut Frame, state: &AppState, settings: &GameSettings) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // score
            Constraint::Length(3), // countdown gauge
            Constraint::Min(5),    // tap button
            Constraint::Length(1), // status line
            Constraint::Length(1), // help footer
        ])
        .split(frame.area());

    frame.render_widget(title(), rows[0]);
    frame.render_widget(score_panel(state), rows[1]);
    frame.render_widget(timer_gauge(state, settings), rows[2]);
    frame.render_widget(tap_button(state), rows[3]);
    frame.render_widget(status_line(state), rows[4]);
    frame.render_widget(help_footer(), rows[5]);

    if state.about_open {
        render_about(frame);
    }
}

fn title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        " TAP RALLY ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
}

fn score_panel(state: &AppState) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::raw("Your score: "),
        Span::styled(
            state.round.score().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"))
}

fn timer_gauge<'a>(state: &AppState, settings: &GameSettings) -> Gauge<'a> {
    let total_ms = settings.round_secs.saturating_mul(1000).max(1);
    let ratio = (state.round.remaining_ms() as f64 / total_ms as f64).clamp(0.0, 1.0);

    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Time left"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} s", state.round.remaining_secs()))
}

fn tap_button(state: &AppState) -> Paragraph<'static> {
    let (caption, style) = match state.phase {
        GamePhase::Running => (
            "[ TAP! ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (
            "[ TAP ME ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(caption, style)),
        Line::raw(""),
        Line::raw("press Space or Enter"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
}

fn status_line(state: &AppState) -> Paragraph<'static> {
    let line = match state.phase {
        GamePhase::Over(summary) => Line::from(Span::styled(
            format!("Time's up! Your score was {}.", summary.score),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        GamePhase::Idle => Line::raw("Tap to start the round."),
        GamePhase::Running => Line::raw("Go!"),
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn help_footer() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Space/Enter tap   a about   q quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
}

fn render_about(frame: &mut Frame) {
    let area = centered_rect(50, 40, frame.area());
    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("Tap Rally {}", crate::VERSION),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Tap as fast as you can before"),
        Line::raw("the countdown runs out."),
        Line::raw(""),
        Line::from(Span::styled(
            "press Esc or a to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("About")),
        area,
    );
}

/// Centers a `percent_x` by `percent_y` rectangle inside `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::GameEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState, settings: &GameSettings) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, state, settings)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn fresh_screen_shows_zero_score_and_full_timer() {
        let cfg = GameSettings::default();
        let screen = draw(&AppState::fresh(&cfg), &cfg);
        assert!(screen.contains("Your score: 0"));
        assert!(screen.contains("60 s"));
        assert!(screen.contains("TAP ME"));
    }

    #[test]
    fn running_screen_tracks_score_and_countdown() {
        let cfg = GameSettings::default();
        let mut state = AppState::fresh(&cfg);
        for _ in 0..3 {
            state.apply(GameEvent::Tap, &cfg);
        }
        state.apply(GameEvent::Tick, &cfg);

        let screen = draw(&state, &cfg);
        assert!(screen.contains("Your score: 3"));
        assert!(screen.contains("59 s"));
    }

    #[test]
    fn expired_round_shows_the_summary() {
        let cfg = GameSettings {
            round_secs: 5,
            ..GameSettings::default()
        };
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tap, &cfg);
        state.apply(GameEvent::Tap, &cfg);
        for _ in 0..5 {
            state.apply(GameEvent::Tick, &cfg);
        }

        let screen = draw(&state, &cfg);
        assert!(screen.contains("Your score was 2."));
        assert!(screen.contains("Your score: 0"));
    }

    #[test]
    fn about_popup_renders_over_the_screen() {
        let cfg = GameSettings::default();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::ToggleAbout, &cfg);

        let screen = draw(&state, &cfg);
        assert!(screen.contains("About"));
        assert!(screen.contains("Tap Rally"));
    }
}
