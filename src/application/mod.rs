//! Application layer - Use cases and orchestration

pub mod diagnose;
pub mod history;
pub mod init;
pub mod manage_config;
pub mod record_mood;

pub use diagnose::DiagnoseService;
pub use history::HistoryService;
pub use manage_config::ConfigService;
pub use record_mood::{MoodInput, RecordMoodService};
