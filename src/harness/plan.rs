use std::{
    fmt,
    path::PathBuf,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::{
    foundation::core::Rgb8,
    foundation::error::{ProbeError, ProbeResult},
    foundation::rng::Rng64,
    harness::config::{HarnessConfig, Phase},
    harness::settings::SettingsDoc,
};

const SETTINGS_PAUSE_SECS: f64 = 1.5;
const TEXTURE_PAUSE_SECS: f64 = 1.5;
const CHURN_PAUSE_SECS: f64 = 1.0;
const RAPID_PAUSE_SECS: f64 = 0.2;
const BETWEEN_PHASES_SECS: f64 = 2.0;

const PLAYER_TEXTURE: &str = "player.png";
const TEMP_TEXTURE: &str = "temp_test.png";

const TEXTURE_CYCLE: [(&str, Rgb8); 4] = [
    ("red", Rgb8::new(255, 0, 0)),
    ("green", Rgb8::new(0, 255, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("yellow", Rgb8::new(255, 255, 0)),
];
const CHURN_FIRST: (&str, Rgb8) = ("gray", Rgb8::new(128, 128, 128));
const CHURN_SECOND: (&str, Rgb8) = ("orange", Rgb8::new(255, 128, 0));

/// One filesystem action or pause.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Log a progress message.
    Announce(String),
    /// Overwrite the settings file.
    WriteSettings {
        /// Target file.
        path: PathBuf,
        /// Document to write.
        doc: SettingsDoc,
    },
    /// Overwrite a texture with a solid 2x2 PNG.
    WriteTexture {
        /// Target file.
        path: PathBuf,
        /// Fill color.
        color: Rgb8,
        /// Human-readable color name.
        label: &'static str,
    },
    /// Delete a file written earlier in the plan.
    Remove {
        /// Target file.
        path: PathBuf,
    },
    /// Block for the given (already scaled) duration.
    Pause(Duration),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Announce(msg) => write!(f, "announce  {msg}"),
            Step::WriteSettings { path, doc } => {
                write!(f, "settings  {} (version {})", path.display(), doc.version)
            }
            Step::WriteTexture { path, color, label } => {
                write!(f, "texture   {} ({label} {color})", path.display())
            }
            Step::Remove { path } => write!(f, "remove    {}", path.display()),
            Step::Pause(d) => write!(f, "pause     {:.3}s", d.as_secs_f64()),
        }
    }
}

struct PlanBuilder<'a> {
    cfg: &'a HarnessConfig,
    steps: Vec<Step>,
    // Wall-clock seconds the plan expects to have reached at the next step.
    clock_secs: f64,
}

impl PlanBuilder<'_> {
    fn announce(&mut self, msg: impl Into<String>) {
        self.steps.push(Step::Announce(msg.into()));
    }

    fn pause(&mut self, secs: f64) -> ProbeResult<()> {
        let d = Duration::try_from_secs_f64(secs * self.cfg.time_scale)
            .map_err(|e| ProbeError::validation(format!("pause of {secs}s cannot be scaled: {e}")))?;
        self.clock_secs += d.as_secs_f64();
        self.steps.push(Step::Pause(d));
        Ok(())
    }

    fn texture(&mut self, file_name: &str, (label, color): (&'static str, Rgb8)) {
        self.steps.push(Step::WriteTexture {
            path: self.cfg.texture_path(file_name),
            color,
            label,
        });
    }

    fn remove(&mut self, file_name: &str) {
        self.steps.push(Step::Remove {
            path: self.cfg.texture_path(file_name),
        });
    }

    fn config_phase(&mut self) -> ProbeResult<()> {
        self.announce("testing settings file changes");
        for (i, doc) in SettingsDoc::scripted().into_iter().enumerate() {
            self.announce(format!("writing settings revision {}", i + 1));
            self.steps.push(Step::WriteSettings {
                path: self.cfg.settings_path(),
                doc,
            });
            self.pause(SETTINGS_PAUSE_SECS)?;
        }
        Ok(())
    }

    fn textures_phase(&mut self) -> ProbeResult<()> {
        self.announce("testing texture changes");
        for entry in TEXTURE_CYCLE {
            self.announce(format!("changing texture to {}", entry.0));
            self.texture(PLAYER_TEXTURE, entry);
            self.pause(TEXTURE_PAUSE_SECS)?;
        }
        Ok(())
    }

    fn churn_phase(&mut self) -> ProbeResult<()> {
        self.announce("testing file deletion and recreation");
        self.announce("creating temporary texture");
        self.texture(TEMP_TEXTURE, CHURN_FIRST);
        self.pause(CHURN_PAUSE_SECS)?;
        self.announce("deleting temporary texture");
        self.remove(TEMP_TEXTURE);
        self.pause(CHURN_PAUSE_SECS)?;
        self.announce("recreating temporary texture");
        self.texture(TEMP_TEXTURE, CHURN_SECOND);
        self.pause(CHURN_PAUSE_SECS)?;
        self.remove(TEMP_TEXTURE);
        Ok(())
    }

    fn rapid_phase(&mut self) -> ProbeResult<()> {
        let total = self.cfg.rapid_changes;
        self.announce(format!("testing rapid changes ({total} writes)"));
        let mut rng = Rng64::new(self.cfg.seed);
        for i in 0..total {
            let doc = SettingsDoc::rapid(i, &mut rng, self.clock_secs);
            self.announce(format!("rapid change {}/{total}", i + 1));
            self.steps.push(Step::WriteSettings {
                path: self.cfg.settings_path(),
                doc,
            });
            self.pause(RAPID_PAUSE_SECS)?;
        }
        Ok(())
    }
}

/// Expand `cfg` into the ordered step list. Pure: `now` only seeds the rapid-burst timestamps.
pub fn build_plan(cfg: &HarnessConfig, now: SystemTime) -> ProbeResult<Vec<Step>> {
    cfg.validate()?;

    let mut b = PlanBuilder {
        cfg,
        steps: Vec::new(),
        clock_secs: now
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64(),
    };

    for (i, phase) in cfg.ordered_phases().into_iter().enumerate() {
        if i > 0 {
            b.pause(BETWEEN_PHASES_SECS)?;
        }
        match phase {
            Phase::Config => b.config_phase()?,
            Phase::Textures => b.textures_phase()?,
            Phase::Churn => b.churn_phase()?,
            Phase::Rapid => b.rapid_phase()?,
        }
        b.announce(format!("{phase} phase completed"));
    }
    b.announce("all phases complete; check the application's console for reload events");

    Ok(b.steps)
}

/// Sum of every pause in `steps`.
pub fn total_pause(steps: &[Step]) -> Duration {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Pause(d) => Some(*d),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/harness/plan.rs"]
mod tests;
