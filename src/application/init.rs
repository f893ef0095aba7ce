//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path, diary: Option<&str>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let mut config = Config::new();
    if let Some(diary) = diary {
        config.diary = diary.to_string();
    }
    repo.save_config(&config)?;

    let store = repo.entry_store(&config);
    store.ensure_exists()?;
    tracing::info!(
        root = %repo.root().display(),
        diary = %store.path().display(),
        "initialized journal"
    );

    println!("Initialized moodlog journal at {}", repo.root().display());
    println!("Diary: {}", config.diary);

    Ok(config)
}
