pub mod dashboard;
pub mod day_detail;
pub mod days;
pub mod notes;
