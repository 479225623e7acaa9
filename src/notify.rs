//! Email reminders for the daily topic and for missed practice days.
//!
//! Only the decision logic and message rendering live here. Actual delivery
//! goes through the [`MailTransport`] seam so the SMTP machinery (and its
//! credentials) stay outside the core.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::curriculum::CurriculumDay;
use crate::models::ProgressRow;
use crate::stats::Schedule;

pub const DEFAULT_REMINDER_TIME: &str = "09:00";
pub const DEFAULT_SENDER: &str = "pythonlearningtracker@gmail.com";

/// How long after the configured reminder time a reminder still fires.
const REMINDER_WINDOW_MINUTES: i64 = 5;

pub type Result<T> = std::result::Result<T, NotifyError>;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// EMAIL_PASSWORD is not set; delivery is impossible but nothing else
    /// is wrong. Reported, never escalated into store or stats failures.
    #[error("email password not configured; set the EMAIL_PASSWORD environment variable")]
    MissingCredentials,

    /// The transport refused or failed to deliver.
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// A rendered, ready-to-send email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Delivery seam. Implementations own connection details and credentials.
pub trait MailTransport {
    fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Sender credentials resolved from the process environment.
pub struct SmtpCredentials {
    pub sender: String,
    /// Consumed by transports that perform the SMTP login.
    #[allow(dead_code)]
    pub password: String,
}

impl SmtpCredentials {
    /// Read EMAIL_PASSWORD from the environment. An absent or empty value
    /// degrades to [`NotifyError::MissingCredentials`].
    pub fn from_env() -> Result<Self> {
        match std::env::var("EMAIL_PASSWORD") {
            Ok(password) if !password.is_empty() => Ok(Self {
                sender: DEFAULT_SENDER.to_string(),
                password,
            }),
            _ => Err(NotifyError::MissingCredentials),
        }
    }
}

/// Daily reminder about the scheduled topic.
pub fn reminder_message(to: &str, day: &CurriculumDay, scheduled: NaiveDate) -> EmailMessage {
    let html_body = format!(
        r#"<html>
<body>
<h2>Python Learning Tracker - Daily Reminder</h2>
<p>Hello Python learner!</p>
<p>This is a friendly reminder about today's learning topic:</p>
<div style="background-color: #f0f8ff; padding: 15px; border-left: 5px solid #3366cc; margin: 10px 0;">
    <h3>Day {}: {}</h3>
    <p><strong>Practice:</strong> {}</p>
    <p><strong>Scheduled for:</strong> {}</p>
</div>
<p>Don't forget to mark your progress in the Python Learning Tracker!</p>
<p>Happy coding!</p>
</body>
</html>"#,
        day.day,
        day.topic,
        day.practice,
        scheduled.format("%B %d, %Y"),
    );

    EmailMessage {
        to: to.to_string(),
        subject: "Python Learning Reminder".to_string(),
        html_body,
    }
}

/// Nudge after a missed practice day, pointing at today's topic.
pub fn missed_day_message(to: &str, day: &CurriculumDay) -> EmailMessage {
    let html_body = format!(
        r#"<html>
<body>
<h2>Python Learning Tracker - Missed Day Alert</h2>
<p>Hello Python learner!</p>
<p>We noticed you missed your Python practice yesterday. Don't worry - it happens to everyone!</p>
<div style="background-color: #fff0f0; padding: 15px; border-left: 5px solid #dc3545; margin: 10px 0;">
    <h3>Today's topic: Day {}: {}</h3>
    <p>Why not catch up today? Remember, consistency is key to learning programming!</p>
</div>
<p>Don't break your learning streak - a little practice every day is better than a long session once a week.</p>
<p>Happy coding!</p>
</body>
</html>"#,
        day.day, day.topic,
    );

    EmailMessage {
        to: to.to_string(),
        subject: "Python Learning - Missed Practice Day".to_string(),
        html_body,
    }
}

/// Send the daily reminder iff `now` falls inside the five-minute window
/// after `reminder_time` ("HH:MM"). A malformed time string is a no-send,
/// not an error. Returns whether a reminder went out.
pub fn check_and_send_daily_reminder(
    transport: &dyn MailTransport,
    to: &str,
    reminder_time: &str,
    now: NaiveDateTime,
    day: &CurriculumDay,
    scheduled: NaiveDate,
) -> Result<bool> {
    let Some(target) = parse_reminder_time(reminder_time) else {
        return Ok(false);
    };

    let reminder_at = now.date().and_time(target);
    let elapsed = now - reminder_at;
    if elapsed >= Duration::zero() && elapsed < Duration::minutes(REMINDER_WINDOW_MINUTES) {
        transport.send(&reminder_message(to, day, scheduled))?;
        return Ok(true);
    }

    Ok(false)
}

/// If yesterday mapped to a curriculum day that was not completed, send the
/// missed-day nudge about today's topic. Returns whether a message went out.
pub fn check_for_missed_days(
    transport: &dyn MailTransport,
    to: &str,
    rows: &[ProgressRow],
    schedule: &Schedule,
    today: NaiveDate,
    current_day: &CurriculumDay,
) -> Result<bool> {
    let yesterday = today - Duration::days(1);

    let missed = rows.iter().any(|row| {
        schedule.scheduled_date(row.day) == Some(yesterday) && !row.completed
    });

    if missed {
        transport.send(&missed_day_message(to, current_day))?;
        return Ok(true);
    }

    Ok(false)
}

fn parse_reminder_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
