//! Where save data lives.

use super::SaveError;
use crate::core::constants::SAVE_SLOT_NAME;
use directories::ProjectDirs;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A named place that holds at most one serialized save.
pub trait SaveSlot {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, SaveError>;
    fn save(&self, data: &str) -> Result<(), SaveError>;
    fn clear(&self) -> Result<(), SaveError>;
}

/// A save file on disk, by default in the platform config directory.
#[derive(Debug, Clone)]
pub struct FileSaveSlot {
    path: PathBuf,
}

impl FileSaveSlot {
    /// Uses `weaponshop_save.json` in the platform config directory,
    /// creating the directory if needed.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "weaponshop").ok_or(SaveError::NoConfigDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            path: config_dir.join(SAVE_SLOT_NAME),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSlot for FileSaveSlot {
    fn load(&self) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, data: &str) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write a sibling file first so a crash mid-write leaves the old save.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slot for tests and the simulator.
#[derive(Debug, Default)]
pub struct MemorySaveSlot {
    data: RefCell<Option<String>>,
}

impl MemorySaveSlot {
    pub fn with_data(data: &str) -> Self {
        Self {
            data: RefCell::new(Some(data.to_string())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.data.borrow().clone()
    }
}

impl SaveSlot for MemorySaveSlot {
    fn load(&self) -> Result<Option<String>, SaveError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, data: &str) -> Result<(), SaveError> {
        *self.data.borrow_mut() = Some(data.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SaveError> {
        *self.data.borrow_mut() = None;
        Ok(())
    }
}
