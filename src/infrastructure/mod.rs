//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod prompt;
pub mod repository;
pub mod store;

pub use config::Config;
pub use prompt::{acquire_mood, MoodSource, ScriptedSource, TerminalPrompt};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{EntryStore, FileEntryStore, MemoryEntryStore};
