use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, internal_prelude::*};

/// The environment variable that can be set to point to a specific config file.
pub const DEISCTL_CONFIG_PATH_ENV: &str = "DEISCTL_CONFIG_PATH";

/// The name of the configuration file that's searched for in the configuration directories.
pub const CONFIG_FILE_NAME: &str = "deisctl.yml";

/// All user-configurable settings.
#[derive(PartialEq, Eq, Clone, Debug, Deserialize, Serialize)]
pub struct Settings {
    /// The command that's executed if no command has been given on the command line.
    #[serde(default = "default_command")]
    pub default_command: String,
}

fn default_command() -> String {
    "help".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_command: default_command(),
        }
    }
}

pub fn default_configuration_directory() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deisctl"))
}

/// Get the config directories in the order they're searched.
/// The current directory is always the last resort.
pub fn configuration_directories() -> Vec<PathBuf> {
    if let Some(config_dir) = default_configuration_directory() {
        vec![config_dir, PathBuf::from(".")]
    } else {
        vec![PathBuf::from(".")]
    }
}

impl Settings {
    /// Try to read an existing config file, while using default values for non-existing fields.
    /// If successful, this returns the settings and whether a config file has been found.
    ///
    /// An explicitly requested file (via parameter or [DEISCTL_CONFIG_PATH_ENV]) must exist.
    pub fn read(from_file: &Option<PathBuf>) -> Result<(Settings, bool), Error> {
        let from_file = from_file
            .clone()
            .or_else(|| std::env::var(DEISCTL_CONFIG_PATH_ENV).map(PathBuf::from).ok());

        if let Some(path) = &from_file {
            return Ok((Settings::read_file(path)?, true));
        };

        for directory in configuration_directories() {
            let path = directory.join(CONFIG_FILE_NAME);
            trace!("Checking path: {path:?}");

            if path.is_file() {
                info!("Found config file at: {path:?}");
                return Ok((Settings::read_file(&path)?, true));
            }
        }

        debug!("No config file found. Using default config.");
        Ok((Settings::default(), false))
    }

    fn read_file(path: &Path) -> Result<Settings, Error> {
        let file = File::open(path)
            .map_err(|err| Error::IoPathError(path.to_path_buf(), "opening config file", err))?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).map_err(|err| Error::ConfigDeserialization(err.to_string()))
    }
}
