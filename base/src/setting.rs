use directories::ProjectDirs;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::{util, CLI_NAME};

static DEFAULT_DB_FILE: &str = "booking.db";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not locate program directories")]
    Directories,
    #[error("Could not read the config file {0:?}: {1}")]
    Read(PathBuf, io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Path is not valid UTF-8: {0:?}")]
    Path(PathBuf),
    #[error("Could not create the data directory: {0}")]
    DataDir(io::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub db: String,
    #[serde(default)]
    pub pool: Pool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when opening or acquiring a connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for Pool {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_max_connections() -> u32 {
    16
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

fn project_dirs() -> Result<ProjectDirs, SettingsError> {
    ProjectDirs::from("com", "github", CLI_NAME).ok_or(SettingsError::Directories)
}

pub fn load(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => path,
        None => project_dirs()?.config_dir().join("config.toml"),
    };
    tracing::info! {?path, "Loading config file"};
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(SettingsError::Read(path, e)),
    };
    let mut set: Settings = toml::from_str(content.as_str())?;
    set = generate_default(set)?;
    tracing::trace! {settings = ?set, "Loaded settings"};
    Ok(set)
}

pub fn generate_default(mut set: Settings) -> Result<Settings, SettingsError> {
    if set.db == String::default() {
        let data_dir = project_dirs()?.data_dir().to_path_buf();
        util::mkdirp(&data_dir).map_err(SettingsError::DataDir)?;
        set.db = format!(
            "sqlite://{}?mode=rwc",
            util::path_to_str(&data_dir.join(DEFAULT_DB_FILE))?
        );
    }
    Ok(set)
}
