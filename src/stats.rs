//! Derived statistics over the progress aggregate.
//!
//! Everything here is a pure function of `(ProgressData, catalog)` - no I/O,
//! no mutation - and tolerates a maximally sparse (empty) aggregate.

use chrono::{Duration, NaiveDate};

use crate::curriculum::{DAYS_PER_WEEK, DAYS_TOTAL, WEEKS_TOTAL};
use crate::models::{ProgressData, ProgressRow};

/// Dense 21-row projection of the aggregate, in day order 1..=21.
/// Days without entries come back as incomplete with zero minutes.
pub fn all_progress_rows(data: &ProgressData) -> Vec<ProgressRow> {
    (1..=DAYS_TOTAL)
        .map(|day| ProgressRow {
            day,
            completed: data.is_completed(day),
            completion_date: data.completion_date(day).map(str::to_string),
            time_spent_minutes: data.time_spent_minutes(day),
        })
        .collect()
}

/// Share of the curriculum completed, 0.0..=100.0.
pub fn completion_percentage(data: &ProgressData) -> f64 {
    let completed = data.progress.values().filter(|e| e.completed).count();
    (completed as f64 / DAYS_TOTAL as f64) * 100.0
}

/// Completed-day counts per week bucket (days 1-7 / 8-14 / 15-21).
pub fn weekly_progress(data: &ProgressData) -> [u32; 3] {
    let mut weekly = [0u32; 3];

    for day in 1..=DAYS_TOTAL {
        if data.is_completed(day) {
            let week_idx = ((day - 1) / DAYS_PER_WEEK) as usize;
            if week_idx < WEEKS_TOTAL as usize {
                weekly[week_idx] += 1;
            }
        }
    }

    weekly
}

/// Study time per week bucket, in hours. Time on incomplete days counts:
/// time tracking and completion tracking are independent axes.
pub fn weekly_time_hours(data: &ProgressData) -> [f64; 3] {
    let mut weekly = [0u32; 3];

    for day in 1..=DAYS_TOTAL {
        let week_idx = ((day - 1) / DAYS_PER_WEEK) as usize;
        if week_idx < WEEKS_TOTAL as usize {
            weekly[week_idx] += data.time_spent_minutes(day);
        }
    }

    weekly.map(|minutes| minutes as f64 / 60.0)
}

/// Total recorded study time across all days, in minutes.
pub fn total_study_time(data: &ProgressData) -> u32 {
    (1..=DAYS_TOTAL).map(|day| data.time_spent_minutes(day)).sum()
}

/// Consecutive completed days ending at the most recent completed day.
/// Zero when nothing is completed yet.
pub fn learning_streak(rows: &[ProgressRow]) -> u32 {
    let Some(last) = rows.iter().rposition(|r| r.completed) else {
        return 0;
    };

    let mut streak = 0;
    for row in rows[..=last].iter().rev() {
        if row.completed {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// "Xh YYm" display form of a flat minute count.
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Maps calendar dates to curriculum day numbers. Day 1 falls on the start
/// date; the value one past the end marks the curriculum as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    start: NaiveDate,
}

/// `current_day` value meaning "past day 21".
pub const PAST_END: u8 = DAYS_TOTAL + 1;

impl Schedule {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Curriculum day number for `today`, clamped to 1..=22. Dates before the
    /// start clamp to day 1; dates past the end clamp to [`PAST_END`].
    pub fn current_day(&self, today: NaiveDate) -> u8 {
        let elapsed = (today - self.start).num_days();
        if elapsed < 0 {
            return 1;
        }
        let day = elapsed + 1;
        if day > DAYS_TOTAL as i64 {
            PAST_END
        } else {
            day as u8
        }
    }

    /// Calendar date a curriculum day falls on. None outside 1..=21.
    pub fn scheduled_date(&self, day: u8) -> Option<NaiveDate> {
        if (1..=DAYS_TOTAL).contains(&day) {
            Some(self.start + Duration::days(day as i64 - 1))
        } else {
            None
        }
    }
}
