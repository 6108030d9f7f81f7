pub mod digits;
pub mod exercises;
pub mod home;
pub mod screen;
pub mod settings;
pub mod stopwatch;
pub mod timer;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use sporting::celebration::Confetti;
use sporting::session::Phase;

pub const HORIZONTAL_MARGIN: u16 = 5;
pub const VERTICAL_MARGIN: u16 = 1;

pub const EXERCISE_COLOR: Color = Color::Rgb(76, 175, 80);
pub const REST_COLOR: Color = Color::Rgb(255, 160, 0);
pub const STOP_COLOR: Color = Color::Rgb(244, 67, 54);
pub const ACCENT_COLOR: Color = Color::Rgb(0, 122, 255);

pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Exercise => EXERCISE_COLOR,
        Phase::Rest => REST_COLOR,
    }
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Key hint line such as `enter start · esc back`
pub fn hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, action)) in pairs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", dim()));
        }
        spans.push(Span::styled(key.to_string(), bold().fg(ACCENT_COLOR)));
        spans.push(Span::styled(format!(" {action}"), dim()));
    }
    Line::from(spans)
}

/// A `percent_x` by `height` rectangle centred in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
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

/// Draw confetti particles on top of whatever is already in `buf`
pub fn render_confetti(confetti: &Confetti, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::LightYellow,
    ];

    for (x, y, particle) in confetti.visible() {
        if x >= area.width || y >= area.height {
            continue;
        }
        let color = colors[particle.color_index % colors.len()];
        let alpha = 1.0 - (particle.age / particle.max_age);
        let style = if alpha > 0.7 {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if alpha > 0.3 {
            Style::default().fg(color)
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };

        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }
}
