use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::{Path, PathBuf};
use utility::{Error, Result};

/// CONFIG_LOCATION_ENV is the name of the env variable used
/// to configure the location of the kubeless config folder.
/// When not set, DEFAULT_DIR location is used.
pub const CONFIG_LOCATION_ENV: &str = "KUBELESS_CONFIG";

pub const DEFAULT_DIR: &str = "~/.kubeless";
pub const DEFAULT_FILE: &str = "config.yml";

/// ConfigFile defaults for the kubeless CLI, every key is optional.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ConfigFile {
    ///server url of the API server
    #[serde(default)]
    pub server: String, //`yaml:"server,omitempty"`
    ///namespace used when --namespace is not given
    #[serde(default)]
    pub namespace: String, //`yaml:"namespace,omitempty"`
}

/// config_dir returns the path to the kubeless config directory,
/// KUBELESS_CONFIG when it is set and not empty, ~/.kubeless otherwise
pub fn config_dir() -> Result<String> {
    match std::env::var(CONFIG_LOCATION_ENV) {
        Ok(overrid) if !overrid.is_empty() => Ok(overrid),
        Ok(_) | Err(VarError::NotPresent) => Ok(DEFAULT_DIR.into()),
        Err(e) => Err(Error::Config(format!("{} {:?}", CONFIG_LOCATION_ENV, e))),
    }
}

/// config_file_path the expanded path of the config file
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    let dir = shellexpand::tilde(&dir);
    Ok(PathBuf::from(dir.into_owned()).join(DEFAULT_FILE).clean())
}

impl ConfigFile {
    /// load reads the config file from its default location
    pub fn load() -> Result<ConfigFile> {
        let path = config_file_path()?;
        ConfigFile::load_from(&path)
    }

    /// load_from reads the config file at path, a missing or empty file gives the defaults
    pub fn load_from(path: &Path) -> Result<ConfigFile> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConfigFile::default())
            }
            Err(err) => return Err(Error::Io(err)),
        };
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml::from_str(content.as_str())
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
