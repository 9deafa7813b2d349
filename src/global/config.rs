use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use eyre::{Result, WrapErr};
use log::{debug, warn};

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "hex2bin.toml";

const INPUT_VAR: &str = "HEX2BIN_INPUT";
const OUTPUT_VAR: &str = "HEX2BIN_OUTPUT";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text file of hex tokens to read
    pub input: PathBuf,
    /// Binary file to write
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.bin"),
        }
    }
}

impl Config {

    /// Reads a config from a TOML file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file at {:?}", path))?;
        toml::from_str(&config_str)
            .wrap_err_with(|| format!("Failed to parse config TOML at {:?}", path))
    }

    /// Loads the configuration and applies environment overrides.
    ///
    /// An explicit `path` must exist and parse. Without one, `hex2bin.toml` in the
    /// working directory is used if present; if it can't be read or parsed the
    /// defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// Same as [`Config::load`], with the environment lookup supplied by the caller.
    pub fn load_with<F>(path: Option<&Path>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path).unwrap_or_else(|err| {
                        warn!("Error loading config: {:#}. Using defaults.", err);
                        Self::default()
                    })
                } else {
                    debug!("No {} found, using defaults", CONFIG_FILE);
                    Self::default()
                }
            }
        };

        config.apply_overrides(var);
        debug!("Resolved config: input={:?} output={:?}", config.input, config.output);
        Ok(config)
    }

    // Override with environment variables if they are set and non-empty
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var(INPUT_VAR).filter(|v| !v.is_empty()) {
            self.input = PathBuf::from(val);
        }
        if let Some(val) = var(OUTPUT_VAR).filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(val);
        }
    }
}
