use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use sporting::settings::{Field, SettingsCollector};

use super::{bold, dim, hints, ACCENT_COLOR, HORIZONTAL_MARGIN, VERTICAL_MARGIN};

fn value_label(field: Field, value: u32) -> String {
    match field {
        Field::Exercise | Field::Rest => format!("{value} seconds"),
        Field::Rounds => value.to_string(),
    }
}

pub fn render_settings(settings: &SettingsCollector, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // exercise
            Constraint::Length(3), // rest
            Constraint::Length(3), // rounds
            Constraint::Length(5), // summary
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(f.area());

    let title = Paragraph::new(Span::styled("Timer settings", bold()))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    for (idx, field) in Field::ALL.iter().enumerate() {
        let focused = settings.focus == *field;
        let border_style = if focused {
            Style::default().fg(ACCENT_COLOR)
        } else {
            dim()
        };
        let value_style = if focused {
            bold().fg(Color::White)
        } else {
            bold()
        };
        let row = Paragraph::new(Line::from(vec![
            Span::styled("[-]  ", Style::default().fg(ACCENT_COLOR)),
            Span::styled(value_label(*field, settings.value(*field)), value_style),
            Span::styled("  [+]", Style::default().fg(ACCENT_COLOR)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.to_string()),
        )
        .alignment(Alignment::Center);
        f.render_widget(row, chunks[1 + idx]);
    }

    let summary: Vec<Line> = settings
        .summary_lines()
        .into_iter()
        .map(Line::from)
        .collect();
    let summary = Paragraph::new(summary)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Session summary"),
        )
        .alignment(Alignment::Center);
    f.render_widget(summary, chunks[4]);

    let legend = Paragraph::new(hints(&[
        ("↑/↓", "select"),
        ("←/→", "adjust"),
        ("enter", "start"),
        ("esc", "back"),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(legend, chunks[6]);
}
