use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use sporting::app::{App, Screen};

use super::{bold, dim, hints, ACCENT_COLOR, HORIZONTAL_MARGIN, VERTICAL_MARGIN};

pub fn render_exercises(app: &App, f: &mut Frame) {
    let selected = match &app.screen {
        Screen::Exercises(cursor) => cursor.selected,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(3),    // list
            Constraint::Length(5), // details
            Constraint::Length(1), // hints
        ])
        .split(f.area());

    let Some(catalog) = app.catalog.as_ref() else {
        let empty = Paragraph::new("No exercises available")
            .alignment(Alignment::Center)
            .style(dim());
        f.render_widget(empty, chunks[0]);
        return;
    };

    let items: Vec<ListItem> = catalog
        .exercises
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(e.name.clone(), bold()),
                Span::styled(format!("  {}s", e.duration_secs), dim()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Exercises ({})", catalog.exercises.len())),
        )
        .highlight_style(
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(exercise) = catalog.exercises.get(selected) {
        let details = Paragraph::new(exercise.description.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(exercise.name.as_str()),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(details, chunks[1]);
    }

    let legend = Paragraph::new(hints(&[("↑/↓", "browse"), ("esc", "back")]))
        .alignment(Alignment::Center);
    f.render_widget(legend, chunks[2]);
}
