use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use sporting::stopwatch::Stopwatch;
use sporting::util::format_clock;

use super::{
    bold, digits, dim, hints, timer::render_clock, EXERCISE_COLOR, HORIZONTAL_MARGIN,
    VERTICAL_MARGIN,
};

pub fn render_stopwatch(sw: &Stopwatch, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(digits::HEIGHT + 2),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(Span::styled("Stopwatch", bold())).alignment(Alignment::Center),
        chunks[0],
    );

    render_clock(&format_clock(sw.elapsed_secs()), false, chunks[1], f);

    let status = match (sw.is_active(), sw.is_paused()) {
        (false, _) => Span::styled("Ready", dim()),
        (true, false) => Span::styled("Running", bold().fg(EXERCISE_COLOR)),
        (true, true) => Span::styled("Paused", bold().fg(Color::Yellow)),
    };
    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Center),
        chunks[2],
    );

    let legend = if sw.is_active() {
        hints(&[
            ("space", "stop"),
            ("p", if sw.is_paused() { "resume" } else { "pause" }),
            ("esc", "back"),
        ])
    } else {
        hints(&[("space", "start"), ("esc", "back")])
    };
    f.render_widget(
        Paragraph::new(legend).alignment(Alignment::Center),
        chunks[3],
    );
}
