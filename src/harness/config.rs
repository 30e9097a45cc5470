use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{ProbeError, ProbeResult};

// Largest accepted pause multiplier; keeps every scaled pause well inside `Duration`.
const MAX_TIME_SCALE: f64 = 1000.0;

/// A named group of perturbation steps. Selected phases always run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Rewrite the settings file with three scripted revisions.
    Config,
    /// Rewrite the player texture with four solid colors.
    Textures,
    /// Create, delete, recreate and delete a temporary texture.
    Churn,
    /// A burst of randomized settings writes with short pauses.
    Rapid,
}

impl Phase {
    /// Every phase, in execution order.
    pub const ALL: [Phase; 4] = [Phase::Config, Phase::Textures, Phase::Churn, Phase::Rapid];

    /// Lowercase name as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Config => "config",
            Phase::Textures => "textures",
            Phase::Churn => "churn",
            Phase::Rapid => "rapid",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProbeError::invalid_argument(format!("unknown phase \"{s}\"")))
    }
}

/// Harness settings, loadable from JSON. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Root holding `config/settings.json` and `textures/`.
    pub assets_dir: PathBuf,
    /// Multiplier applied to every pause. `0` runs the sequence back to back.
    pub time_scale: f64,
    /// Number of writes in the rapid burst.
    pub rapid_changes: u32,
    /// Seed for the rapid burst's values.
    pub seed: u64,
    /// Phases to run.
    pub phases: Vec<Phase>,
}

/// Command-line values layered over a [`HarnessConfig`]. `None` and an empty list keep the
/// config's value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOverrides {
    /// Replaces `assets_dir`.
    pub assets_dir: Option<PathBuf>,
    /// Replaces `time_scale`.
    pub time_scale: Option<f64>,
    /// Replaces `rapid_changes`.
    pub rapid_changes: Option<u32>,
    /// Replaces `seed`.
    pub seed: Option<u64>,
    /// Replaces `phases` when non-empty.
    pub phases: Vec<Phase>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("examples").join("assets"),
            time_scale: 1.0,
            rapid_changes: 10,
            seed: 0,
            phases: Phase::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> ProbeResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open harness config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        Ok(cfg)
    }

    /// Check value ranges. Does not touch the filesystem.
    pub fn validate(&self) -> ProbeResult<()> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ProbeError::validation(
                "time_scale must be a finite, non-negative number",
            ));
        }
        if self.time_scale > MAX_TIME_SCALE {
            return Err(ProbeError::validation(format!(
                "time_scale must be at most {MAX_TIME_SCALE}"
            )));
        }
        if self.rapid_changes == 0 {
            return Err(ProbeError::validation("rapid_changes must be at least 1"));
        }
        if self.phases.is_empty() {
            return Err(ProbeError::validation("at least one phase must be selected"));
        }
        Ok(())
    }

    /// Fail unless the assets root exists and is a directory.
    pub fn check_assets_dir(&self) -> ProbeResult<()> {
        if !self.assets_dir.is_dir() {
            return Err(ProbeError::validation(format!(
                "assets directory '{}' not found; start the application under test first",
                self.assets_dir.display()
            )));
        }
        Ok(())
    }

    /// Replace every field `overrides` sets. A non-empty phase list replaces the whole list.
    pub fn apply_overrides(&mut self, overrides: RunOverrides) {
        if let Some(assets_dir) = overrides.assets_dir {
            self.assets_dir = assets_dir;
        }
        if let Some(time_scale) = overrides.time_scale {
            self.time_scale = time_scale;
        }
        if let Some(rapid_changes) = overrides.rapid_changes {
            self.rapid_changes = rapid_changes;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if !overrides.phases.is_empty() {
            self.phases = overrides.phases;
        }
    }

    /// Selected phases, deduplicated, in execution order.
    pub fn ordered_phases(&self) -> Vec<Phase> {
        let mut phases = self.phases.clone();
        phases.sort();
        phases.dedup();
        phases
    }

    /// The watched settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.assets_dir.join("config").join("settings.json")
    }

    /// A file under the textures directory.
    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        self.assets_dir.join("textures").join(file_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/harness/config.rs"]
mod tests;
