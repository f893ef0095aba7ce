//! File system repository

use crate::error::{MoodlogError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::{Config, FileEntryStore};
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "MOODLOG_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "{} is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_moodlog_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| MoodlogError::NotMoodlogDirectory(start.to_path_buf()))
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Diary store configured for this journal
    pub fn entry_store(&self, config: &Config) -> FileEntryStore {
        FileEntryStore::new(config.diary_path(&self.root))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(CONFIG_DIR))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".moodlog").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        match repo.initialize().unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_moodlog() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            MoodlogError::NotMoodlogDirectory(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotMoodlogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_prefers_env_root() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        std::env::set_var(ROOT_ENV, temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_discover_env_root_without_moodlog_dir_fails() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(ROOT_ENV, temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("MOODLOG_ROOT")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut config = Config::new();
        config.diary = "data/diary.txt".to_string();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.diary, "data/diary.txt");
    }

    #[test]
    fn test_entry_store_uses_configured_diary() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let mut config = Config::new();
        config.diary = "data/diary.txt".to_string();
        let store = repo.entry_store(&config);
        assert_eq!(store.path(), temp.path().join("data/diary.txt"));
    }
}
