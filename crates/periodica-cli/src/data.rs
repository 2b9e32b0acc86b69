use crate::error::{CliError, Result};
use directories::ProjectDirs;
use periodica::core::catalog::{
    BUNDLED_COMPOUNDS_TOML, BUNDLED_ELEMENTS_CSV, BUNDLED_QUESTIONS_TOML,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const ELEMENTS_FILE: &str = "elements.csv";
pub const COMPOUNDS_FILE: &str = "compounds.toml";
pub const QUESTIONS_FILE: &str = "questions.toml";

const BUNDLED_FILES: [(&str, &str); 3] = [
    (ELEMENTS_FILE, BUNDLED_ELEMENTS_CSV),
    (COMPOUNDS_FILE, BUNDLED_COMPOUNDS_TOML),
    (QUESTIONS_FILE, BUNDLED_QUESTIONS_TOML),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    Overwritten,
    Skipped,
}

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    #[cfg(test)]
    pub fn with_custom_path(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of `file_name` inside the data directory if it exists.
    pub fn catalog_file(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.base_path.join(file_name);
        path.is_file().then_some(path)
    }

    /// Writes the bundled catalogs into the data directory.
    ///
    /// Existing files are left untouched unless `force` is set, so local edits
    /// survive a repeated `init`.
    pub fn init_data(
        &self,
        force: bool,
        mut progress_callback: impl FnMut(&Path, InitOutcome),
    ) -> Result<()> {
        info!("Preparing data directory at {:?}", &self.base_path);
        fs::create_dir_all(&self.base_path)?;

        for (file_name, content) in BUNDLED_FILES {
            let path = self.base_path.join(file_name);
            let outcome = match (path.exists(), force) {
                (true, false) => {
                    debug!("Keeping existing {:?}", &path);
                    InitOutcome::Skipped
                }
                (exists, _) => {
                    fs::write(&path, content)?;
                    if exists {
                        InitOutcome::Overwritten
                    } else {
                        InitOutcome::Written
                    }
                }
            };
            progress_callback(&path, outcome);
        }

        info!("Data directory ready at {:?}", &self.base_path);
        Ok(())
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let config_path = Self::get_path_config_file()?;
        Self::write_path_config(&config_path, path)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn write_path_config(config_path: &Path, data_path: &Path) -> Result<()> {
        if !data_path.is_absolute() {
            return Err(CliError::Argument(format!(
                "Data path must be absolute: {}",
                data_path.display()
            )));
        }
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, data_path.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    fn read_path_config(config_path: &Path) -> Result<Option<PathBuf>> {
        let custom_path_str = fs::read_to_string(config_path)?.trim().to_string();
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(custom_path_str)))
        }
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => match Self::read_path_config(&config_path)? {
                Some(path) => Ok(path),
                None => Self::get_default_data_path(),
            },
            _ => Self::get_default_data_path(),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "periodica", "periodica")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}
