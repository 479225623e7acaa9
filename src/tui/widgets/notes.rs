use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::curriculum;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    if app.notes.items.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Notes & Reflections ");
        let paragraph = Paragraph::new(
            "No notes yet. Use 'pytrack note set <day> <text>' to add one.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_note_list(f, app, chunks[0]);
    draw_note_body(f, app, chunks[1]);
}

fn draw_note_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .notes
        .items
        .iter()
        .map(|(day, _)| {
            let topic = curriculum::day(*day).map(|d| d.topic).unwrap_or("-");
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("Day {:<3}", day),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(truncate(topic, 24), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Notes ({}) ", app.notes.items.len()))
        .title_style(Style::default().fg(Color::Magenta));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.notes.selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_note_body(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .notes
        .selected
        .and_then(|i| app.notes.items.get(i));

    let (title, body) = match selected {
        Some((day, note)) => {
            let info = curriculum::day(*day);
            let week_line = info
                .map(|d| format!("Week {}: {}", d.week, d.week_title))
                .unwrap_or_default();
            let topic = info.map(|d| d.topic).unwrap_or("-");
            (
                format!(" Day {}: {} ", day, topic),
                format!("{}\n\n{}", week_line, note),
            )
        }
        None => (" Note ".to_string(), String::new()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
