use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use sporting::app::App;

use super::{bold, dim, hints, ACCENT_COLOR, HORIZONTAL_MARGIN, VERTICAL_MARGIN};

const FEATURES: [(&str, &str); 3] = [
    ("◆", "Custom exercises"),
    ("◷", "Interval timer"),
    ("▲", "Stopwatch"),
];

pub fn render_home(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(4), // title
            Constraint::Length(3), // welcome
            Constraint::Min(5),    // features
            Constraint::Length(1), // hints
        ])
        .split(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Sporting",
            bold().fg(Color::White).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled("Your personal coach", dim())),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let welcome = Paragraph::new("Welcome to sporting, your favourite training app!")
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(welcome, chunks[1]);

    let exercise_count = app.catalog.as_ref().map_or(0, |c| c.exercises.len());
    let mut lines: Vec<Line> = FEATURES
        .iter()
        .map(|(icon, text)| {
            Line::from(vec![
                Span::styled(format!("{icon}  "), bold().fg(ACCENT_COLOR)),
                Span::raw(*text),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{exercise_count} exercises in the catalogue"),
        dim(),
    )));
    let features = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(features, chunks[2]);

    let legend = Paragraph::new(hints(&[
        ("enter", "start training"),
        ("e", "exercises"),
        ("w", "stopwatch"),
        ("q", "quit"),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(legend, chunks[3]);
}
