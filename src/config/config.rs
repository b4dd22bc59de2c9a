use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CONFIG_FILE: &str = "log_rank.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("programming-task-example-data.log")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: default_log_path(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

impl Config {
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reads the default log path from `log_rank.toml` in the working
    /// directory, if there is one.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                info!("config loaded from {}", path.display());
                return config;
            }
            Err(LoadError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!("{} failed to load: {}", path.display(), err),
        }

        debug!("falling back to default config");
        Config::default()
    }

    /// Applies the `-f` flag on top of whatever the file provided.
    pub fn with_log_path(mut self, log_path: Option<PathBuf>) -> Self {
        if let Some(path) = log_path {
            self.log_path = path;
        }
        self
    }
}
