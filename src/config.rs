use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::generator::{Mode, check_range};

pub const DEFAULT_COUNT: usize = 1000;
pub const DEFAULT_OUTPUT: &str = "inputs.txt";

/// Partially specified options, as read from a TOML file or the command line.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub count: Option<usize>,
    pub mode: Option<Mode>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Fill every unset option from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            count: self.count.or(fallback.count),
            mode: self.mode.or(fallback.mode),
            min: self.min.or(fallback.min),
            max: self.max.or(fallback.max),
            output: self.output.or(fallback.output),
            seed: self.seed.or(fallback.seed),
        }
    }
}

/// Fully resolved generator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    pub count: usize,
    pub mode: Mode,
    pub min: i64,
    pub max: i64,
    pub output: PathBuf,
    /// `None` means seed from the clock at run time.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        let mode = Mode::default();
        let (min, max) = mode.preset_range();
        Self {
            count: DEFAULT_COUNT,
            mode,
            min,
            max,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

impl GenConfig {
    pub fn resolve(settings: Settings) -> Result<Self> {
        let mode = settings.mode.unwrap_or_default();
        let (preset_min, preset_max) = mode.preset_range();
        let config = Self {
            count: settings.count.unwrap_or(DEFAULT_COUNT),
            mode,
            min: settings.min.unwrap_or(preset_min),
            max: settings.max.unwrap_or(preset_max),
            output: settings
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            seed: settings.seed,
        };
        check_range(config.mode, config.min, config.max)?;
        Ok(config)
    }
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}
