mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::curriculum::{self, CurriculumDay};
use crate::models::{ProgressData, ProgressRow};
use crate::stats::{self, Schedule};
use crate::store::ProgressStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Days,
    DayDetail,
    Notes,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Dashboard => View::Days,
            View::Days => View::Notes,
            View::DayDetail => View::Days,
            View::Notes => View::Dashboard,
        }
    }

    fn prev(&self) -> Self {
        match self {
            View::Dashboard => View::Notes,
            View::Days => View::Dashboard,
            View::DayDetail => View::Days,
            View::Notes => View::Days,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

pub struct App {
    store: ProgressStore,
    pub schedule: Schedule,
    pub data: ProgressData,
    pub rows: Vec<ProgressRow>,
    pub current_day: u8,
    pub view: View,
    pub days: StatefulList<&'static CurriculumDay>,
    pub selected_day: Option<&'static CurriculumDay>,
    pub notes: StatefulList<(u8, String)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ProgressStore, schedule: Schedule) -> Result<Self, Box<dyn std::error::Error>> {
        let (data, _) = store.load()?;
        let rows = stats::all_progress_rows(&data);
        let current_day = schedule.current_day(Local::now().date_naive());
        let notes = StatefulList::with_items(collect_notes(&data));

        Ok(Self {
            store,
            schedule,
            data,
            rows,
            current_day,
            view: View::Dashboard,
            days: StatefulList::with_items(curriculum::all_days().iter().collect()),
            selected_day: None,
            notes,
            should_quit: false,
        })
    }

    pub fn refresh_data(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (data, _) = self.store.load()?;
        self.rows = stats::all_progress_rows(&data);
        self.current_day = self.schedule.current_day(Local::now().date_naive());
        self.notes = StatefulList::with_items(collect_notes(&data));
        self.data = data;
        Ok(())
    }

    fn select_day(&mut self) {
        if let Some(day) = self.days.selected_item().copied() {
            self.selected_day = Some(day);
            self.view = View::DayDetail;
        }
    }

    /// Toggle completion of the highlighted day and reload.
    fn toggle_selected_day(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let day = match self.view {
            View::Days => self.days.selected_item().map(|d| d.day),
            View::DayDetail => self.selected_day.map(|d| d.day),
            _ => None,
        };

        if let Some(day) = day {
            let completed = self.data.is_completed(day);
            self.store.mark_day_complete(day, !completed)?;
            self.refresh_data()?;
        }
        Ok(())
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,

            // Refresh: Ctrl+r
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.refresh_data()?;
            }

            KeyCode::Esc => {
                if self.view == View::DayDetail {
                    self.view = View::Days;
                    self.selected_day = None;
                }
            }

            // Navigation between views: h/l (left/right like vim)
            KeyCode::Char('h') | KeyCode::Left => match self.view {
                View::DayDetail => {
                    self.view = View::Days;
                    self.selected_day = None;
                }
                _ => self.view = self.view.prev(),
            },
            KeyCode::Char('l') | KeyCode::Right => match self.view {
                View::Days => self.select_day(),
                _ => self.view = self.view.next(),
            },

            KeyCode::Tab => {
                self.view = self.view.next();
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
            }

            // List navigation: j/k
            KeyCode::Char('j') | KeyCode::Down => match self.view {
                View::Days => self.days.next(),
                View::Notes => self.notes.next(),
                _ => {}
            },
            KeyCode::Char('k') | KeyCode::Up => match self.view {
                View::Days => self.days.previous(),
                View::Notes => self.notes.previous(),
                _ => {}
            },

            // Jump to top/bottom
            KeyCode::Char('g') => match self.view {
                View::Days if !self.days.items.is_empty() => {
                    self.days.selected = Some(0);
                }
                View::Notes if !self.notes.items.is_empty() => {
                    self.notes.selected = Some(0);
                }
                _ => {}
            },
            KeyCode::Char('G') => match self.view {
                View::Days if !self.days.items.is_empty() => {
                    self.days.selected = Some(self.days.items.len() - 1);
                }
                View::Notes if !self.notes.items.is_empty() => {
                    self.notes.selected = Some(self.notes.items.len() - 1);
                }
                _ => {}
            },

            // Toggle completion of the highlighted day
            KeyCode::Char('c') => match self.view {
                View::Days | View::DayDetail => self.toggle_selected_day()?,
                _ => {}
            },

            KeyCode::Enter => {
                if self.view == View::Days {
                    self.select_day();
                }
            }

            _ => {}
        }
        Ok(())
    }
}

/// Days that have notes, in day order, with their note text.
fn collect_notes(data: &ProgressData) -> Vec<(u8, String)> {
    let mut days: Vec<u8> = data
        .notes
        .keys()
        .filter_map(|k| k.parse::<u8>().ok())
        .collect();
    days.sort_unstable();

    days.into_iter()
        .filter_map(|day| {
            data.notes
                .get(&crate::models::day_key(day))
                .map(|note| (day, note.clone()))
        })
        .collect()
}

pub fn run(store: ProgressStore, schedule: Schedule) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(store, schedule)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
