use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use sporting::session::Status;
use sporting::timer::TimerScreen;
use sporting::util::format_clock;

use super::{
    bold, centered_rect, digits, dim, hints, phase_color, render_confetti, EXERCISE_COLOR,
    HORIZONTAL_MARGIN, STOP_COLOR, VERTICAL_MARGIN,
};

pub fn render_timer(timer: &TimerScreen, f: &mut Frame) {
    let now = Instant::now();
    let runner = timer.runner();
    let color = phase_color(runner.phase());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),              // title
            Constraint::Length(2),              // phase + round
            Constraint::Min(digits::HEIGHT + 2), // clock
            Constraint::Length(1),              // progress
            Constraint::Length(2),              // status
            Constraint::Length(1),              // hints
        ])
        .split(f.area());

    let title = Paragraph::new(Span::styled("Timer", bold())).alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let phase = Paragraph::new(vec![
        Line::from(Span::styled(runner.phase().to_string(), bold().fg(color))),
        Line::from(Span::styled(
            format!(
                "Round {}/{}",
                runner.current_round(),
                runner.config().rounds()
            ),
            dim(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(phase, chunks[1]);

    render_clock(
        &format_clock(u64::from(runner.time_left())),
        timer.is_pulsing(now),
        chunks[2],
        f,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(timer.progress(now))
        .label("");
    f.render_widget(gauge, chunks[3]);

    let status = match runner.status() {
        Status::Idle => Span::styled("Ready", dim()),
        Status::Running => Span::styled("Running", bold().fg(EXERCISE_COLOR)),
        Status::Paused => Span::styled("Paused", bold().fg(Color::Yellow)),
        Status::Completed => Span::styled("Finished", bold().fg(EXERCISE_COLOR)),
    };
    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Center),
        chunks[4],
    );

    let legend = if runner.is_running() {
        hints(&[
            ("space", "stop"),
            ("p", if runner.is_paused() { "resume" } else { "pause" }),
            ("esc", "back"),
        ])
    } else {
        hints(&[("space", "start"), ("esc", "back")])
    };
    f.render_widget(
        Paragraph::new(legend).alignment(Alignment::Center),
        chunks[5],
    );

    if timer.show_completion() {
        render_completion(timer, f);
    }
}

/// Big digits when they fit, plain text otherwise
pub fn render_clock(text: &str, highlight: bool, area: Rect, f: &mut Frame) {
    let style = if highlight {
        bold().add_modifier(Modifier::REVERSED)
    } else {
        bold()
    };

    let lines: Vec<Line> = if digits::big_width(text) <= area.width && digits::HEIGHT <= area.height
    {
        digits::big_rows(text)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(text.to_string(), style))]
    };

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_completion(timer: &TimerScreen, f: &mut Frame) {
    let area = f.area();
    if timer.confetti.is_active {
        render_confetti(&timer.confetti, area, f.buffer_mut());
    }

    let finished = timer
        .completed_at()
        .map(|t| format!("Finished at {}", t.format("%H:%M")))
        .unwrap_or_default();

    let dialog = centered_rect(60, 9, area);
    f.render_widget(Clear, dialog);
    let body = Paragraph::new(vec![
        Line::from(Span::styled("★", bold().fg(Color::Yellow))),
        Line::from(Span::styled("Well done!", bold())),
        Line::from("You completed your workout."),
        Line::from(Span::styled(finished, dim())),
        Line::from(""),
        Line::from(Span::styled(
            "enter  back to settings",
            bold().fg(EXERCISE_COLOR),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STOP_COLOR)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(body, dialog);
}
