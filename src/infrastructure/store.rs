//! Diary storage
//!
//! The diary is an append-only text file, one `YYYY-MM-DD: <score>` line per entry.
//! Every operation opens the file, does its work and lets the handle drop, so no
//! handle outlives a call regardless of how the caller exits.
//!
//! There is no locking: two processes recording at once can both pass the
//! duplicate check and both append.

use crate::domain::entry::parse_diary;
use crate::domain::MoodEntry;
use crate::error::Result;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Ordered, append-only storage of diary entries
pub trait EntryStore {
    /// All entries in append order
    fn load(&self) -> Result<Vec<MoodEntry>>;

    /// Add one entry at the end; earlier entries are never rewritten
    fn append(&self, entry: &MoodEntry) -> Result<()>;
}

/// Diary kept in a plain text file
#[derive(Debug, Clone)]
pub struct FileEntryStore {
    path: PathBuf,
}

impl FileEntryStore {
    pub fn new(path: PathBuf) -> Self {
        FileEntryStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the diary (and parent directories) if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        self.open_for_append().map(drop)
    }

    fn open_for_append(&self) -> Result<fs::File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&self.path)?;
        Ok(file)
    }
}

impl EntryStore for FileEntryStore {
    fn load(&self) -> Result<Vec<MoodEntry>> {
        let mut contents = String::new();
        self.open_for_append()?.read_to_string(&mut contents)?;

        let entries = parse_diary(&contents)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded diary");
        Ok(entries)
    }

    fn append(&self, entry: &MoodEntry) -> Result<()> {
        let mut file = self.open_for_append()?;

        // A hand-edited diary may lack its final newline.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        file.write_all(entry.to_line().as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), line = %entry, "appended diary line");
        Ok(())
    }
}

/// Diary held in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: RefCell<Vec<MoodEntry>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        MemoryEntryStore::default()
    }

    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        MemoryEntryStore {
            entries: RefCell::new(entries),
        }
    }
}

impl EntryStore for MemoryEntryStore {
    fn load(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn append(&self, entry: &MoodEntry) -> Result<()> {
        self.entries.borrow_mut().push(*entry);
        Ok(())
    }
}
