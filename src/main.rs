mod curriculum;
mod models;
mod notify;
mod stats;
mod store;
mod tui;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use models::{JsonOutput, ProgressData};
use stats::Schedule;
use store::{ProgressStore, Recovery};

const DEFAULT_DATA_NAME: &str = "progress.json";

#[derive(Parser)]
#[command(name = "pytrack")]
#[command(about = "A CLI progress tracker for a 21-day Python learning curriculum")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the progress file
    Init,

    /// Show one day: topic, practice, resources, and recorded progress
    Day {
        /// Day number (1-21)
        number: u8,
    },

    /// Mark a day as completed (or roll it back with --undo)
    Complete {
        /// Day number (1-21)
        day: u8,

        /// Un-mark the day instead; its completion record is deleted
        #[arg(long)]
        undo: bool,
    },

    /// Record time spent on a day (overwrites any previous value)
    Time {
        /// Day number (1-21)
        day: u8,

        /// Hours part
        #[arg(long, default_value_t = 0)]
        hours: u32,

        /// Minutes part
        #[arg(long, default_value_t = 0)]
        minutes: u32,
    },

    /// Manage per-day notes
    #[command(subcommand)]
    Note(NoteCommands),

    /// Manage per-day resource checklists
    #[command(subcommand)]
    Resource(ResourceCommands),

    /// Record an uploaded exercise solution for a day
    Upload {
        /// Day number (1-21)
        day: u8,

        /// Path to the solution file; only its name and timestamp are recorded
        file: PathBuf,
    },

    /// Show learning statistics
    Stats,

    /// Show the curriculum, optionally a single week
    Curriculum {
        /// Week number (1-3)
        #[arg(long, short)]
        week: Option<u8>,
    },

    /// Send the daily reminder / missed-day nudge if one is due
    Remind {
        /// Recipient email address
        #[arg(long, short)]
        email: String,

        /// Reminder time of day, HH:MM
        #[arg(long, short, default_value = notify::DEFAULT_REMINDER_TIME)]
        time: String,
    },

    /// Launch the interactive terminal dashboard
    Tui,
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Save the note for a day (replaces any existing note)
    Set {
        /// Day number (1-21)
        day: u8,

        /// Note text
        text: String,
    },

    /// Print the note for a day
    Show {
        /// Day number (1-21)
        day: u8,
    },

    /// Print every note, grouped by day
    List,

    /// Print all notes as a plain-text report
    Export,
}

#[derive(Subcommand)]
enum ResourceCommands {
    /// Check a resource off for a day
    Check {
        /// Day number (1-21)
        day: u8,

        /// Resource name as listed in the curriculum
        name: String,
    },

    /// Un-check a resource for a day
    Uncheck {
        /// Day number (1-21)
        day: u8,

        /// Resource name
        name: String,
    },

    /// List a day's resources with their checked state
    List {
        /// Day number (1-21)
        day: u8,
    },
}

fn get_data_path() -> PathBuf {
    if let Ok(path) = std::env::var("PYTRACK_DATA") {
        return PathBuf::from(path);
    }

    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pytrack");

    std::fs::create_dir_all(&config_dir).ok();
    config_dir.join(DEFAULT_DATA_NAME)
}

/// Resolve the day-numbering schedule: PYTRACK_START (%Y-%m-%d) wins, then
/// the earliest recorded completion date, then today.
fn resolve_schedule(data: &ProgressData) -> Schedule {
    if let Ok(raw) = std::env::var("PYTRACK_START") {
        if let Ok(start) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Schedule::new(start);
        }
    }

    let earliest = data
        .progress
        .values()
        .filter_map(|e| e.date_completed.as_deref())
        .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .min();

    Schedule::new(earliest.unwrap_or_else(|| Local::now().date_naive()))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProgressStore::open(get_data_path());

    let (data, recovery) = store.load()?;
    if recovery == Some(Recovery::CorruptFile) {
        eprintln!(
            "Warning: progress file at {} is corrupted; starting from an empty \
             record (the file is replaced on the next change)",
            store.path().display()
        );
    }

    match cli.command {
        Commands::Init => {
            store.initialize()?;
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Progress file initialized at: {}", store.path().display());
            }
        }

        Commands::Day { number } => {
            let info = curriculum::day(number)
                .ok_or(store::StoreError::DayOutOfRange(number))?;
            let used = store.get_resources_used(number)?;
            let note = store.get_note(number)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "day": info,
                        "completed": data.is_completed(number),
                        "completion_date": data.completion_date(number),
                        "time_spent_minutes": data.time_spent_minutes(number),
                        "resources_used": used,
                        "note": note,
                        "upload": data.uploads.get(&models::day_key(number)),
                    })))?
                );
            } else {
                println!("Day {}: {}", info.day, info.topic);
                println!("Week {}: {}", info.week, info.week_title);
                println!();
                println!("Practice: {}", info.practice);
                println!();
                println!("Resources:");
                for resource in info.resources {
                    let mark = if used.iter().any(|u| u == resource) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    println!("  {} {}", mark, resource);
                }
                println!();
                match data.completion_date(number) {
                    Some(date) if data.is_completed(number) => {
                        println!("Status: completed on {}", date);
                    }
                    _ if data.is_completed(number) => println!("Status: completed"),
                    _ => println!("Status: not completed"),
                }
                println!(
                    "Time spent: {}",
                    stats::format_minutes(data.time_spent_minutes(number))
                );
                if let Some(upload) = data.uploads.get(&models::day_key(number)) {
                    println!("Upload: {} ({})", upload.filename, upload.upload_time);
                }
                if !note.is_empty() {
                    println!();
                    println!("Notes:");
                    println!("{}", note);
                }
            }
        }

        Commands::Complete { day, undo } => {
            store.mark_day_complete(day, !undo)?;
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else if undo {
                println!("Day {} marked as incomplete.", day);
            } else {
                println!("Day {} marked as completed.", day);
            }
        }

        Commands::Time { day, hours, minutes } => {
            let updated = store.update_time_spent(day, hours, minutes)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "day": day,
                        "time_spent_minutes": updated.time_spent_minutes(day),
                    })))?
                );
            } else {
                println!(
                    "Time for day {} set to {}.",
                    day,
                    stats::format_minutes(updated.time_spent_minutes(day))
                );
            }
        }

        Commands::Note(note_cmd) => run_note(cli.json, &store, note_cmd)?,

        Commands::Resource(resource_cmd) => run_resource(cli.json, &store, resource_cmd)?,

        Commands::Upload { day, file } => {
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or("upload path has no file name")?;
            if !file.exists() {
                return Err(format!("file not found: {}", file.display()).into());
            }

            store.record_upload(day, filename, Local::now())?;
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Solution for day {} recorded: {}", day, filename);
            }
        }

        Commands::Stats => {
            let schedule = resolve_schedule(&data);
            let today = Local::now().date_naive();
            let current_day = schedule.current_day(today);
            let rows = stats::all_progress_rows(&data);

            let percentage = stats::completion_percentage(&data);
            let completed = rows.iter().filter(|r| r.completed).count();
            let streak = stats::learning_streak(&rows);
            let total_minutes = stats::total_study_time(&data);
            let weekly = stats::weekly_progress(&data);
            let weekly_hours = stats::weekly_time_hours(&data);

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "completion_percentage": percentage,
                        "completed_days": completed,
                        "current_day": current_day,
                        "schedule_start": schedule.start().to_string(),
                        "learning_streak": streak,
                        "total_study_minutes": total_minutes,
                        "weekly_progress": weekly,
                        "weekly_time_hours": weekly_hours,
                    })))?
                );
            } else {
                println!("=== Learning Statistics ===");
                println!("Overall progress: {:.1}% ({}/21 days)", percentage, completed);
                if current_day > curriculum::DAYS_TOTAL {
                    println!("Current day: finished!");
                } else {
                    println!("Current day: Day {}", current_day);
                }
                println!("Learning streak: {} days", streak);
                println!("Total study time: {}", stats::format_minutes(total_minutes));
                println!();
                for week in 0..3 {
                    println!(
                        "Week {} ({}): {}/7 days, {:.1}h",
                        week + 1,
                        curriculum::week_title(week as u8 + 1).unwrap_or("-"),
                        weekly[week],
                        weekly_hours[week]
                    );
                }
            }
        }

        Commands::Curriculum { week } => {
            let weeks: Vec<u8> = match week {
                Some(w) => {
                    if curriculum::week_title(w).is_none() {
                        return Err(format!("week {} is outside the range 1-3", w).into());
                    }
                    vec![w]
                }
                None => (1..=curriculum::WEEKS_TOTAL).collect(),
            };

            if cli.json {
                let payload: Vec<_> = weeks
                    .iter()
                    .map(|&w| {
                        serde_json::json!({
                            "week": w,
                            "title": curriculum::week_title(w),
                            "days": curriculum::days_in_week(w),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string(&JsonOutput::ok(payload))?);
            } else {
                for &w in &weeks {
                    println!(
                        "Week {}: {}",
                        w,
                        curriculum::week_title(w).unwrap_or("-")
                    );
                    println!("{}", "-".repeat(70));
                    for d in curriculum::days_in_week(w) {
                        let mark = if data.is_completed(d.day) { "x" } else { " " };
                        println!("  [{}] Day {:<2} {}", mark, d.day, d.topic);
                        println!("      {}", d.practice);
                    }
                    println!();
                }
                println!("Additional tools:");
                for tool in curriculum::additional_tools() {
                    println!("  - {}", tool);
                }
            }
        }

        Commands::Remind { email, time } => {
            let schedule = resolve_schedule(&data);
            let now = Local::now().naive_local();
            let today = now.date();
            let current_day = schedule.current_day(today);

            let Some(day_info) = curriculum::day(current_day) else {
                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                } else {
                    println!("Curriculum finished - nothing to remind about.");
                }
                return Ok(());
            };

            let creds = match notify::SmtpCredentials::from_env() {
                Ok(creds) => creds,
                Err(e) => {
                    // Degraded mode: delivery is impossible, but that is a
                    // reported condition, not a tracker failure.
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string(&JsonOutput::<()>::err(e.to_string()))?
                        );
                    } else {
                        eprintln!("Cannot send reminders: {}", e);
                    }
                    return Ok(());
                }
            };

            let transport = StdoutTransport { from: creds.sender };
            let scheduled = schedule.scheduled_date(current_day).unwrap_or(today);

            let reminded = notify::check_and_send_daily_reminder(
                &transport, &email, &time, now, day_info, scheduled,
            )?;

            let rows = stats::all_progress_rows(&data);
            let missed = notify::check_for_missed_days(
                &transport, &email, &rows, &schedule, today, day_info,
            )?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "reminder_sent": reminded,
                        "missed_day_notified": missed,
                    })))?
                );
            } else {
                if reminded {
                    println!("Daily reminder sent to {}.", email);
                }
                if missed {
                    println!("Missed-day nudge sent to {}.", email);
                }
                if !reminded && !missed {
                    println!("Nothing due right now.");
                }
            }
        }

        Commands::Tui => {
            let schedule = resolve_schedule(&data);
            tui::run(store, schedule)?;
        }
    }

    Ok(())
}

fn run_note(
    json: bool,
    store: &ProgressStore,
    cmd: NoteCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        NoteCommands::Set { day, text } => {
            store.save_note(day, &text)?;
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Note saved for day {}.", day);
            }
        }

        NoteCommands::Show { day } => {
            let note = store.get_note(day)?;
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&note))?);
            } else if note.is_empty() {
                println!("No note for day {}.", day);
            } else {
                println!("{}", note);
            }
        }

        NoteCommands::List => {
            let (data, _) = store.load()?;
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&data.notes))?);
            } else if data.notes.is_empty() {
                println!("No notes yet. Use 'pytrack note set <day> <text>' to add one.");
            } else {
                for (day, info) in notes_in_day_order(&data) {
                    println!("Day {}: {}", day, info.topic);
                    println!("{}", data.notes[&models::day_key(day)]);
                    println!();
                }
            }
        }

        NoteCommands::Export => {
            let (data, _) = store.load()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(export_notes(&data)))?
                );
            } else {
                print!("{}", export_notes(&data));
            }
        }
    }
    Ok(())
}

fn run_resource(
    json: bool,
    store: &ProgressStore,
    cmd: ResourceCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ResourceCommands::Check { day, name } => {
            store.mark_resource_used(day, &name)?;
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Checked '{}' for day {}.", name, day);
            }
        }

        ResourceCommands::Uncheck { day, name } => {
            store.unmark_resource_used(day, &name)?;
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Unchecked '{}' for day {}.", name, day);
            }
        }

        ResourceCommands::List { day } => {
            let info = curriculum::day(day)
                .ok_or(store::StoreError::DayOutOfRange(day))?;
            let used = store.get_resources_used(day)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "resources": info.resources,
                        "used": used,
                    })))?
                );
            } else {
                for resource in info.resources {
                    let mark = if used.iter().any(|u| u == resource) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    println!("{} {}", mark, resource);
                }
            }
        }
    }
    Ok(())
}

/// Days that have notes, in day order, paired with their catalog entries.
fn notes_in_day_order(data: &ProgressData) -> Vec<(u8, &'static curriculum::CurriculumDay)> {
    let mut days: Vec<u8> = data
        .notes
        .keys()
        .filter_map(|k| k.parse::<u8>().ok())
        .collect();
    days.sort_unstable();

    days.into_iter()
        .filter_map(|day| curriculum::day(day).map(|info| (day, info)))
        .collect()
}

/// Plain-text notes report, one section per day.
fn export_notes(data: &ProgressData) -> String {
    let mut out = String::new();
    for (day, info) in notes_in_day_order(data) {
        out.push_str(&format!("# Day {}: {}\n", day, info.topic));
        out.push_str(&format!("Week {}: {}\n\n", info.week, info.week_title));
        out.push_str(&data.notes[&models::day_key(day)]);
        out.push_str("\n\n");
        out.push_str(&"-".repeat(50));
        out.push_str("\n\n");
    }
    out
}

/// Writes the rendered message to stdout with From/To/Subject headers, in a
/// form that can be piped into `sendmail -t` style tooling.
struct StdoutTransport {
    from: String,
}

impl notify::MailTransport for StdoutTransport {
    fn send(&self, message: &notify::EmailMessage) -> notify::Result<()> {
        println!("From: {}", self.from);
        println!("To: {}", message.to);
        println!("Subject: {}", message.subject);
        println!("Content-Type: text/html");
        println!();
        println!("{}", message.html_body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    mod cli_parsing_tests {
        use super::*;

        #[test]
        fn parse_init_command() {
            let cli = Cli::try_parse_from(["pytrack", "init"]).unwrap();
            assert!(!cli.json);
            assert!(matches!(cli.command, Commands::Init));
        }

        #[test]
        fn parse_init_with_json() {
            let cli = Cli::try_parse_from(["pytrack", "--json", "init"]).unwrap();
            assert!(cli.json);
            assert!(matches!(cli.command, Commands::Init));
        }

        #[test]
        fn parse_day_command() {
            let cli = Cli::try_parse_from(["pytrack", "day", "7"]).unwrap();
            match cli.command {
                Commands::Day { number } => assert_eq!(number, 7),
                _ => panic!("Expected Day command"),
            }
        }

        #[test]
        fn parse_complete() {
            let cli = Cli::try_parse_from(["pytrack", "complete", "3"]).unwrap();
            match cli.command {
                Commands::Complete { day, undo } => {
                    assert_eq!(day, 3);
                    assert!(!undo);
                }
                _ => panic!("Expected Complete command"),
            }
        }

        #[test]
        fn parse_complete_undo() {
            let cli = Cli::try_parse_from(["pytrack", "complete", "3", "--undo"]).unwrap();
            match cli.command {
                Commands::Complete { day, undo } => {
                    assert_eq!(day, 3);
                    assert!(undo);
                }
                _ => panic!("Expected Complete command"),
            }
        }

        #[test]
        fn parse_time_with_defaults() {
            let cli = Cli::try_parse_from(["pytrack", "time", "5"]).unwrap();
            match cli.command {
                Commands::Time { day, hours, minutes } => {
                    assert_eq!(day, 5);
                    assert_eq!(hours, 0);
                    assert_eq!(minutes, 0);
                }
                _ => panic!("Expected Time command"),
            }
        }

        #[test]
        fn parse_time_full() {
            let cli = Cli::try_parse_from([
                "pytrack", "time", "5", "--hours", "1", "--minutes", "30",
            ])
            .unwrap();
            match cli.command {
                Commands::Time { day, hours, minutes } => {
                    assert_eq!(day, 5);
                    assert_eq!(hours, 1);
                    assert_eq!(minutes, 30);
                }
                _ => panic!("Expected Time command"),
            }
        }

        #[test]
        fn parse_note_set() {
            let cli =
                Cli::try_parse_from(["pytrack", "note", "set", "2", "loops are fun"]).unwrap();
            match cli.command {
                Commands::Note(NoteCommands::Set { day, text }) => {
                    assert_eq!(day, 2);
                    assert_eq!(text, "loops are fun");
                }
                _ => panic!("Expected Note Set command"),
            }
        }

        #[test]
        fn parse_note_export() {
            let cli = Cli::try_parse_from(["pytrack", "note", "export"]).unwrap();
            assert!(matches!(cli.command, Commands::Note(NoteCommands::Export)));
        }

        #[test]
        fn parse_resource_check() {
            let cli =
                Cli::try_parse_from(["pytrack", "resource", "check", "1", "W3Schools"]).unwrap();
            match cli.command {
                Commands::Resource(ResourceCommands::Check { day, name }) => {
                    assert_eq!(day, 1);
                    assert_eq!(name, "W3Schools");
                }
                _ => panic!("Expected Resource Check command"),
            }
        }

        #[test]
        fn parse_upload() {
            let cli = Cli::try_parse_from(["pytrack", "upload", "7", "solution.py"]).unwrap();
            match cli.command {
                Commands::Upload { day, file } => {
                    assert_eq!(day, 7);
                    assert_eq!(file, PathBuf::from("solution.py"));
                }
                _ => panic!("Expected Upload command"),
            }
        }

        #[test]
        fn parse_stats_command() {
            let cli = Cli::try_parse_from(["pytrack", "stats"]).unwrap();
            assert!(matches!(cli.command, Commands::Stats));
        }

        #[test]
        fn parse_curriculum_with_week() {
            let cli = Cli::try_parse_from(["pytrack", "curriculum", "--week", "2"]).unwrap();
            match cli.command {
                Commands::Curriculum { week } => assert_eq!(week, Some(2)),
                _ => panic!("Expected Curriculum command"),
            }
        }

        #[test]
        fn parse_remind_defaults_time() {
            let cli =
                Cli::try_parse_from(["pytrack", "remind", "--email", "me@example.com"]).unwrap();
            match cli.command {
                Commands::Remind { email, time } => {
                    assert_eq!(email, "me@example.com");
                    assert_eq!(time, "09:00");
                }
                _ => panic!("Expected Remind command"),
            }
        }

        #[test]
        fn parse_invalid_command_fails() {
            let result = Cli::try_parse_from(["pytrack", "invalid"]);
            assert!(result.is_err());
        }

        #[test]
        fn parse_missing_required_arg_fails() {
            // day requires a number
            assert!(Cli::try_parse_from(["pytrack", "day"]).is_err());

            // note set requires day and text
            assert!(Cli::try_parse_from(["pytrack", "note", "set", "1"]).is_err());

            // remind requires an email
            assert!(Cli::try_parse_from(["pytrack", "remind"]).is_err());
        }
    }

    mod data_path_tests {
        use super::*;
        use std::env;

        #[test]
        fn get_data_path_uses_env_var() {
            let test_path = "/tmp/test_pytrack.json";
            env::set_var("PYTRACK_DATA", test_path);

            let path = get_data_path();
            assert_eq!(path.to_str().unwrap(), test_path);

            env::remove_var("PYTRACK_DATA");
        }

        #[test]
        fn get_data_path_default_includes_progress_json() {
            env::remove_var("PYTRACK_DATA");

            let path = get_data_path();
            let path_str = path.to_str().unwrap();

            assert!(path_str.ends_with("progress.json"));
            assert!(path_str.contains("pytrack"));
        }
    }

    mod schedule_resolution_tests {
        use super::*;
        use crate::models::{day_key, DayEntry};

        #[test]
        fn falls_back_to_earliest_completion_date() {
            std::env::remove_var("PYTRACK_START");

            let mut data = ProgressData::default();
            for (day, date) in [(3, "2025-03-03"), (1, "2025-03-01"), (2, "2025-03-02")] {
                data.progress.insert(
                    day_key(day),
                    DayEntry {
                        completed: true,
                        date_completed: Some(date.to_string()),
                    },
                );
            }

            let schedule = resolve_schedule(&data);
            assert_eq!(
                schedule.start(),
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
            );
        }

        #[test]
        fn empty_aggregate_starts_today() {
            std::env::remove_var("PYTRACK_START");

            let schedule = resolve_schedule(&ProgressData::default());
            assert_eq!(schedule.start(), Local::now().date_naive());
        }
    }

    mod export_tests {
        use super::*;
        use crate::models::day_key;

        #[test]
        fn export_is_empty_without_notes() {
            assert_eq!(export_notes(&ProgressData::default()), "");
        }

        #[test]
        fn export_sections_are_in_day_order() {
            let mut data = ProgressData::default();
            data.notes.insert(day_key(10), "exceptions".to_string());
            data.notes.insert(day_key(2), "operators".to_string());

            let text = export_notes(&data);
            let day2 = text.find("# Day 2:").unwrap();
            let day10 = text.find("# Day 10:").unwrap();
            assert!(day2 < day10);
            assert!(text.contains("operators"));
            assert!(text.contains("exceptions"));
            assert!(text.contains("Week 1: Python Basics"));
            assert!(text.contains("Week 2: Intermediate Python"));
        }
    }
}
