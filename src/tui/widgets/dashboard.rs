use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::curriculum::{self, DAYS_TOTAL};
use crate::stats;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Stats + current topic row
            Constraint::Length(4), // 21-day heatmap strip
            Constraint::Length(5), // Weekly summary
            Constraint::Min(0),    // Upcoming days
        ])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_stats(f, app, top_chunks[0]);
    draw_current_topic(f, app, top_chunks[1]);
    draw_heatmap(f, app, chunks[1]);
    draw_weekly(f, app, chunks[2]);
    draw_upcoming(f, app, chunks[3]);
}

fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let percentage = stats::completion_percentage(&app.data);
    let completed = app.rows.iter().filter(|r| r.completed).count();
    let streak = stats::learning_streak(&app.rows);
    let total = stats::total_study_time(&app.data);

    let current_day_text = if app.current_day > DAYS_TOTAL {
        "finished!".to_string()
    } else {
        format!("Day {}", app.current_day)
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Progress: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}% ({}/21)", percentage, completed),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Current day: ", Style::default().fg(Color::Gray)),
            Span::styled(current_day_text, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} days", streak),
                Style::default().fg(if streak > 0 {
                    Color::Green
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Study time: ", Style::default().fg(Color::Gray)),
            Span::styled(
                stats::format_minutes(total),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Stats ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_current_topic(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Today ")
        .title_style(Style::default().fg(Color::Yellow));

    let text = match curriculum::day(app.current_day) {
        Some(info) => vec![
            Line::from(vec![
                Span::styled(
                    format!("Day {}: ", info.day),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    info.topic,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Week ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}: {}", info.week, info.week_title),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                info.practice,
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![
            Line::from(Span::styled(
                "Congratulations!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("You've completed the 21-day Python curriculum!"),
        ],
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_heatmap(f: &mut Frame, app: &App, area: Rect) {
    let mut cells: Vec<Span> = Vec::with_capacity(app.rows.len());
    for row in &app.rows {
        let style = if row.completed {
            Style::default().fg(Color::Green)
        } else if row.day == app.current_day {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        cells.push(Span::styled("██", style));
        cells.push(Span::raw(" "));
    }

    let labels = (1..=DAYS_TOTAL)
        .map(|d| format!("{:<3}", d % 10))
        .collect::<String>();

    let text = vec![
        Line::from(cells),
        Line::from(Span::styled(labels, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Progress Tracker ")
        .title_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_weekly(f: &mut Frame, app: &App, area: Rect) {
    let weekly = stats::weekly_progress(&app.data);
    let weekly_hours = stats::weekly_time_hours(&app.data);

    let text: Vec<Line> = (0..3)
        .map(|week| {
            Line::from(vec![
                Span::styled(
                    format!("Week {} ", week + 1),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    completion_bar(weekly[week]),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {}/7  ", weekly[week]),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:.1}h", weekly_hours[week]),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Weekly ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_upcoming(f: &mut Frame, app: &App, area: Rect) {
    let upcoming = curriculum::upcoming(app.current_day, 5);

    let items: Vec<ListItem> = upcoming
        .iter()
        .map(|info| {
            let done = app.data.is_completed(info.day);
            let (mark, mark_color) = if done {
                ("✓", Color::Green)
            } else {
                ("·", Color::DarkGray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(mark_color)),
                Span::styled(
                    format!("Day {:<3}", info.day),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<36}", info.topic),
                    Style::default().fg(Color::White),
                ),
                Span::styled(info.week_title, Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Coming Up Next ")
        .title_style(Style::default().fg(Color::Magenta));

    if items.is_empty() {
        let paragraph = Paragraph::new("All done - enjoy your final project! 🎉")
            .style(Style::default().fg(Color::Green))
            .block(block);
        f.render_widget(paragraph, area);
    } else {
        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }
}

fn completion_bar(completed: u32) -> String {
    let filled = completed.min(7) as usize;
    let empty = 7 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
