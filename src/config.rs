use crate::error::{Result, StudyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".flashstudy.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the database files, relative to the project root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_set_file")]
    pub set_file: String,

    #[serde(default = "default_note_file")]
    pub note_file: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_set_file() -> String {
    "study_set_database".to_string()
}

fn default_note_file() -> String {
    "note_database".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            set_file: default_set_file(),
            note_file: default_note_file(),
        }
    }
}

impl StudyConfig {
    /// Load the nearest config file at or above `start_path`.
    ///
    /// Returns the parsed config and the directory it was found in.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: StudyConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| StudyError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Like [`StudyConfig::load`], but falls back to defaults rooted at
    /// `start_path` when no config file exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::load(start_path) {
            Ok(found) => Ok(found),
            Err(StudyError::NotFound(_)) => Ok((Self::default(), start_path.to_path_buf())),
            Err(e) => Err(e),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(StudyError::NotFound(CONFIG_FILE_NAME.to_string()));
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.storage.data_dir)
    }

    pub fn set_file_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.storage.set_file)
    }

    pub fn note_file_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.storage.note_file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
