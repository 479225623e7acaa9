//! Single-file JSON persistence for the progress aggregate.
//!
//! Every operation is a whole-aggregate read-modify-write: load the file,
//! change one field, write the file back. The store owns its file path, so
//! multiple stores (or test doubles) can coexist in one process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::curriculum::DAYS_TOTAL;
use crate::models::{day_key, DayEntry, ProgressData, UploadInfo};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error. Write failures are never masked.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Day number outside the curriculum
    #[error("day {0} is outside the curriculum range 1-21")]
    DayOutOfRange(u8),
}

/// Why `load` handed back a fresh aggregate instead of stored state.
///
/// The caller decides how loudly to report it. A recovered aggregate is not
/// written back over the file until the next successful mutation, so a
/// damaged file can still be copied away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    MissingFile,
    CorruptFile,
}

pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the empty aggregate on first run, load it otherwise.
    /// Idempotent: repeated calls never reset existing data.
    pub fn initialize(&self) -> Result<ProgressData> {
        let (data, recovery) = self.load()?;
        if recovery == Some(Recovery::MissingFile) {
            self.save(&data)?;
        }
        Ok(data)
    }

    /// Load the aggregate. A missing or unparseable file yields a fresh empty
    /// aggregate together with the [`Recovery`] reason instead of an error.
    pub fn load(&self) -> Result<(ProgressData, Option<Recovery>)> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok((ProgressData::default(), Some(Recovery::MissingFile)));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(data) => Ok((data, None)),
            Err(_) => Ok((ProgressData::default(), Some(Recovery::CorruptFile))),
        }
    }

    /// Write the whole aggregate. Goes through a sibling temp file plus rename
    /// so a reader never observes a partially written file.
    pub fn save(&self, data: &ProgressData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Mark a day completed (stamped with today's date) or delete its progress
    /// entry entirely when un-marking. Absence of the entry is what
    /// "incomplete" means; no `completed: false` stub is ever stored.
    pub fn mark_day_complete(&self, day: u8, completed: bool) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        if completed {
            data.progress.insert(
                day_key(day),
                DayEntry {
                    completed: true,
                    date_completed: Some(Local::now().format("%Y-%m-%d").to_string()),
                },
            );
        } else {
            data.progress.remove(&day_key(day));
        }

        self.save(&data)?;
        Ok(data)
    }

    /// Overwrite the time spent on a day with `hours * 60 + minutes`.
    /// A set, not an add: re-running with the same values is a no-op.
    pub fn update_time_spent(&self, day: u8, hours: u32, minutes: u32) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        let total_minutes = hours * 60 + minutes;
        data.time_spent.insert(day_key(day), total_minutes);

        self.save(&data)?;
        Ok(data)
    }

    pub fn save_note(&self, day: u8, text: &str) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        data.notes.insert(day_key(day), text.to_string());

        self.save(&data)?;
        Ok(data)
    }

    pub fn get_note(&self, day: u8) -> Result<String> {
        let data = self.load_checked(day)?;
        Ok(data.notes.get(&day_key(day)).cloned().unwrap_or_default())
    }

    /// Record a resource as used for a day. Append-if-absent, so repeated
    /// calls leave a single entry.
    pub fn mark_resource_used(&self, day: u8, resource: &str) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        let used = data.resources_used.entry(day_key(day)).or_default();
        if !used.iter().any(|r| r == resource) {
            used.push(resource.to_string());
        }

        self.save(&data)?;
        Ok(data)
    }

    /// Remove a resource from a day's used list, if present.
    pub fn unmark_resource_used(&self, day: u8, resource: &str) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        if let Some(used) = data.resources_used.get_mut(&day_key(day)) {
            used.retain(|r| r != resource);
        }

        self.save(&data)?;
        Ok(data)
    }

    pub fn get_resources_used(&self, day: u8) -> Result<Vec<String>> {
        let data = self.load_checked(day)?;
        Ok(data
            .resources_used
            .get(&day_key(day))
            .cloned()
            .unwrap_or_default())
    }

    /// Record upload metadata for a day's exercise solution.
    pub fn record_upload(
        &self,
        day: u8,
        filename: &str,
        uploaded_at: DateTime<Local>,
    ) -> Result<ProgressData> {
        let mut data = self.load_checked(day)?;

        data.uploads.insert(
            day_key(day),
            UploadInfo {
                filename: filename.to_string(),
                upload_time: uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        );

        self.save(&data)?;
        Ok(data)
    }

    fn load_checked(&self, day: u8) -> Result<ProgressData> {
        check_day(day)?;
        let (data, _) = self.load()?;
        Ok(data)
    }
}

/// Reject day numbers outside the curriculum before touching storage.
pub fn check_day(day: u8) -> Result<()> {
    if (1..=DAYS_TOTAL).contains(&day) {
        Ok(())
    } else {
        Err(StoreError::DayOutOfRange(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store on a unique throwaway file, removed up-front so each test
    /// starts from the missing-file state.
    fn temp_store(name: &str) -> ProgressStore {
        let path = std::env::temp_dir().join(format!(
            "pytrack-store-test-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        ProgressStore::open(path)
    }

    fn cleanup(store: &ProgressStore) {
        let _ = fs::remove_file(store.path());
    }

    mod initialize_tests {
        use super::*;

        #[test]
        fn creates_empty_aggregate_and_file() {
            let store = temp_store("init-creates");
            let data = store.initialize().unwrap();

            assert_eq!(data, ProgressData::default());
            assert!(store.path().exists());

            // File content has the five categories
            let raw = fs::read_to_string(store.path()).unwrap();
            let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
            for key in ["progress", "notes", "uploads", "time_spent", "resources_used"] {
                assert!(value.get(key).is_some(), "missing '{}'", key);
            }
            cleanup(&store);
        }

        #[test]
        fn is_idempotent() {
            let store = temp_store("init-idempotent");
            store.initialize().unwrap();
            store.mark_day_complete(3, true).unwrap();

            // Re-initializing must not reset existing data
            let data = store.initialize().unwrap();
            assert!(data.is_completed(3));
            cleanup(&store);
        }
    }

    mod load_tests {
        use super::*;

        #[test]
        fn missing_file_recovers_to_empty() {
            let store = temp_store("load-missing");
            let (data, recovery) = store.load().unwrap();
            assert_eq!(data, ProgressData::default());
            assert_eq!(recovery, Some(Recovery::MissingFile));
        }

        #[test]
        fn corrupt_file_recovers_to_empty_with_signal() {
            let store = temp_store("load-corrupt");
            fs::write(store.path(), "{ this is not json").unwrap();

            let (data, recovery) = store.load().unwrap();
            assert_eq!(data, ProgressData::default());
            assert_eq!(recovery, Some(Recovery::CorruptFile));
            cleanup(&store);
        }

        #[test]
        fn corrupt_file_is_not_clobbered_by_load() {
            let store = temp_store("load-preserves-corrupt");
            fs::write(store.path(), "not json at all").unwrap();

            store.load().unwrap();

            // The damaged bytes are still there until a mutation saves.
            let raw = fs::read_to_string(store.path()).unwrap();
            assert_eq!(raw, "not json at all");
            cleanup(&store);
        }

        #[test]
        fn round_trips_saved_data() {
            let store = temp_store("load-roundtrip");
            store.initialize().unwrap();
            store.update_time_spent(4, 1, 30).unwrap();

            let (data, recovery) = store.load().unwrap();
            assert_eq!(recovery, None);
            assert_eq!(data.time_spent_minutes(4), 90);
            cleanup(&store);
        }
    }

    mod completion_tests {
        use super::*;

        #[test]
        fn mark_complete_sets_flag_and_date() {
            let store = temp_store("complete-sets");
            store.initialize().unwrap();

            let data = store.mark_day_complete(5, true).unwrap();
            assert!(data.is_completed(5));

            let date = data.completion_date(5).unwrap();
            // %Y-%m-%d shape
            assert_eq!(date.len(), 10);
            assert_eq!(date.as_bytes()[4], b'-');
            assert_eq!(date.as_bytes()[7], b'-');
            cleanup(&store);
        }

        #[test]
        fn unmark_deletes_the_entry_entirely() {
            let store = temp_store("complete-unmark");
            store.initialize().unwrap();

            store.mark_day_complete(5, true).unwrap();
            let data = store.mark_day_complete(5, false).unwrap();

            // Round-trips to the empty state: no stub with completed=false
            assert!(!data.progress.contains_key("5"));
            assert_eq!(data.progress.len(), 0);
            cleanup(&store);
        }

        #[test]
        fn unmark_when_never_marked_is_a_noop() {
            let store = temp_store("complete-unmark-noop");
            store.initialize().unwrap();

            let data = store.mark_day_complete(9, false).unwrap();
            assert!(data.progress.is_empty());
            cleanup(&store);
        }

        #[test]
        fn rejects_out_of_range_days() {
            let store = temp_store("complete-range");
            store.initialize().unwrap();

            assert!(matches!(
                store.mark_day_complete(0, true),
                Err(StoreError::DayOutOfRange(0))
            ));
            assert!(matches!(
                store.mark_day_complete(22, true),
                Err(StoreError::DayOutOfRange(22))
            ));

            // Nothing was created for the bad day
            let (data, _) = store.load().unwrap();
            assert!(data.progress.is_empty());
            cleanup(&store);
        }
    }

    mod time_tests {
        use super::*;

        #[test]
        fn stores_flat_minutes() {
            let store = temp_store("time-flat");
            store.initialize().unwrap();

            let data = store.update_time_spent(2, 1, 15).unwrap();
            assert_eq!(data.time_spent_minutes(2), 75);
            cleanup(&store);
        }

        #[test]
        fn overwrites_instead_of_accumulating() {
            let store = temp_store("time-overwrite");
            store.initialize().unwrap();

            store.update_time_spent(2, 1, 0).unwrap();
            let data = store.update_time_spent(2, 0, 30).unwrap();
            assert_eq!(data.time_spent_minutes(2), 30);
            cleanup(&store);
        }

        #[test]
        fn idempotent_under_reapplication() {
            let store = temp_store("time-idempotent");
            store.initialize().unwrap();

            store.update_time_spent(2, 2, 5).unwrap();
            let data = store.update_time_spent(2, 2, 5).unwrap();
            assert_eq!(data.time_spent_minutes(2), 125);
            cleanup(&store);
        }

        #[test]
        fn time_without_completion_is_allowed() {
            let store = temp_store("time-orthogonal");
            store.initialize().unwrap();

            let data = store.update_time_spent(6, 0, 45).unwrap();
            assert_eq!(data.time_spent_minutes(6), 45);
            assert!(!data.is_completed(6));
            cleanup(&store);
        }
    }

    mod note_tests {
        use super::*;

        #[test]
        fn save_and_get_note() {
            let store = temp_store("note-roundtrip");
            store.initialize().unwrap();

            store.save_note(10, "try-except was confusing").unwrap();
            assert_eq!(store.get_note(10).unwrap(), "try-except was confusing");
            cleanup(&store);
        }

        #[test]
        fn missing_note_defaults_to_empty() {
            let store = temp_store("note-default");
            store.initialize().unwrap();
            assert_eq!(store.get_note(10).unwrap(), "");
            cleanup(&store);
        }

        #[test]
        fn save_overwrites_previous_note() {
            let store = temp_store("note-overwrite");
            store.initialize().unwrap();

            store.save_note(10, "first").unwrap();
            store.save_note(10, "second").unwrap();
            assert_eq!(store.get_note(10).unwrap(), "second");
            cleanup(&store);
        }
    }

    mod resource_tests {
        use super::*;

        #[test]
        fn mark_resource_used_is_idempotent() {
            let store = temp_store("resource-idempotent");
            store.initialize().unwrap();

            store.mark_resource_used(1, "W3Schools").unwrap();
            store.mark_resource_used(1, "W3Schools").unwrap();

            let used = store.get_resources_used(1).unwrap();
            assert_eq!(used, vec!["W3Schools".to_string()]);
            cleanup(&store);
        }

        #[test]
        fn keeps_insertion_order() {
            let store = temp_store("resource-order");
            store.initialize().unwrap();

            store.mark_resource_used(1, "Mosh's Video").unwrap();
            store.mark_resource_used(1, "W3Schools").unwrap();

            let used = store.get_resources_used(1).unwrap();
            assert_eq!(used, vec!["Mosh's Video".to_string(), "W3Schools".to_string()]);
            cleanup(&store);
        }

        #[test]
        fn unmark_removes_only_that_resource() {
            let store = temp_store("resource-unmark");
            store.initialize().unwrap();

            store.mark_resource_used(1, "W3Schools").unwrap();
            store.mark_resource_used(1, "Mosh's Video").unwrap();
            store.unmark_resource_used(1, "W3Schools").unwrap();

            let used = store.get_resources_used(1).unwrap();
            assert_eq!(used, vec!["Mosh's Video".to_string()]);
            cleanup(&store);
        }

        #[test]
        fn mark_then_unmark_round_trips_to_empty() {
            let store = temp_store("resource-roundtrip");
            store.initialize().unwrap();

            store.mark_resource_used(1, "W3Schools").unwrap();
            store.unmark_resource_used(1, "W3Schools").unwrap();

            assert!(store.get_resources_used(1).unwrap().is_empty());
            cleanup(&store);
        }

        #[test]
        fn resources_default_to_empty() {
            let store = temp_store("resource-default");
            store.initialize().unwrap();
            assert!(store.get_resources_used(15).unwrap().is_empty());
            cleanup(&store);
        }
    }

    mod upload_tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn records_filename_and_timestamp() {
            let store = temp_store("upload-records");
            store.initialize().unwrap();

            let at = Local.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
            let data = store.record_upload(7, "guessing_game.py", at).unwrap();

            let upload = data.uploads.get("7").unwrap();
            assert_eq!(upload.filename, "guessing_game.py");
            assert_eq!(upload.upload_time, "2025-03-01 18:30:00");
            cleanup(&store);
        }

        #[test]
        fn later_upload_replaces_earlier() {
            let store = temp_store("upload-replaces");
            store.initialize().unwrap();

            let first = Local.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
            let second = Local.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
            store.record_upload(7, "v1.py", first).unwrap();
            let data = store.record_upload(7, "v2.py", second).unwrap();

            assert_eq!(data.uploads.len(), 1);
            assert_eq!(data.uploads.get("7").unwrap().filename, "v2.py");
            cleanup(&store);
        }
    }

    mod check_day_tests {
        use super::*;

        #[test]
        fn accepts_curriculum_range() {
            assert!(check_day(1).is_ok());
            assert!(check_day(21).is_ok());
        }

        #[test]
        fn rejects_outside_range() {
            assert!(check_day(0).is_err());
            assert!(check_day(22).is_err());
            assert!(check_day(255).is_err());
        }
    }
}
