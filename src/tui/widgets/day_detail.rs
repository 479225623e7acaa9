use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::day_key;
use crate::stats;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(info) = app.selected_day else {
        let block = Block::default().borders(Borders::ALL).title(" Day Detail ");
        let paragraph = Paragraph::new("No day selected").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Topic + practice
            Constraint::Length(4), // Progress line
            Constraint::Length(2 + info.resources.len() as u16), // Resources
            Constraint::Min(0),    // Notes
        ])
        .split(area);

    draw_header(f, info, chunks[0]);
    draw_progress(f, app, info.day, chunks[1]);
    draw_resources(f, app, info, chunks[2]);
    draw_note(f, app, info.day, chunks[3]);
}

fn draw_header(f: &mut Frame, info: &crate::curriculum::CurriculumDay, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled("Week: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} - {}", info.week, info.week_title),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Practice: ", Style::default().fg(Color::Gray)),
            Span::styled(info.practice, Style::default().fg(Color::White)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Day {}: {} ", info.day, info.topic))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_progress(f: &mut Frame, app: &App, day: u8, area: Rect) {
    let row = &app.rows[(day - 1) as usize];

    let (status_text, status_color) = if row.completed {
        let date = row.completion_date.as_deref().unwrap_or("unknown date");
        (format!("completed on {}", date), Color::Green)
    } else {
        ("not completed".to_string(), Color::Red)
    };

    let mut spans = vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  "),
        Span::styled("Time: ", Style::default().fg(Color::Gray)),
        Span::styled(
            stats::format_minutes(row.time_spent_minutes),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(upload) = app.data.uploads.get(&day_key(day)) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Upload: ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("{} ({})", upload.filename, upload.upload_time),
            Style::default().fg(Color::White),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Progress ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}

fn draw_resources(
    f: &mut Frame,
    app: &App,
    info: &crate::curriculum::CurriculumDay,
    area: Rect,
) {
    let used = app
        .data
        .resources_used
        .get(&day_key(info.day))
        .cloned()
        .unwrap_or_default();

    let items: Vec<ListItem> = info
        .resources
        .iter()
        .map(|resource| {
            let checked = used.iter().any(|u| u == resource);
            let (mark, color) = if checked {
                ("[x] ", Color::Green)
            } else {
                ("[ ] ", Color::DarkGray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(color)),
                Span::styled(*resource, Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Resources ")
        .title_style(Style::default().fg(Color::Green));

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn draw_note(f: &mut Frame, app: &App, day: u8, area: Rect) {
    let note = app.data.notes.get(&day_key(day)).cloned().unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notes & Reflections ")
        .title_style(Style::default().fg(Color::Magenta));

    if note.is_empty() {
        let paragraph = Paragraph::new("No notes for this day yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
    } else {
        let paragraph = Paragraph::new(note).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
