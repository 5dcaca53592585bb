use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::generator::Mode;

/// What a completed run produced, including the seed needed to replay it.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub seed: u64,
    pub output: PathBuf,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub duration_ms: u128,
}

impl RunReport {
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize run report")?;
        fs::write(path, json).with_context(|| format!("failed to write report {}", path.display()))
    }
}
