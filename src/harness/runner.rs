use std::time::{Duration, SystemTime};

use crate::{
    foundation::error::ProbeResult,
    foundation::fs::{remove_file, write_file},
    harness::config::HarnessConfig,
    harness::plan::{Step, build_plan},
    harness::settings::write_settings,
    png::encode::encode_solid_png,
};

/// Where pauses go. The harness never sleeps except through this seam.
pub trait Clock {
    /// Block for `d`.
    fn pause(&mut self, d: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&mut self, d: Duration) {
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}

/// Records pauses without sleeping, for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingClock {
    /// Pauses in the order they were requested.
    pub pauses: Vec<Duration>,
}

impl Clock for RecordingClock {
    fn pause(&mut self, d: Duration) {
        self.pauses.push(d);
    }
}

/// Totals from one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Settings file writes.
    pub settings_writes: u32,
    /// Texture file writes.
    pub texture_writes: u32,
    /// Files deleted.
    pub removals: u32,
    /// Sum of requested pauses.
    pub paused: Duration,
}

/// Executes steps in order against the real filesystem.
#[derive(Debug)]
pub struct Runner<C> {
    clock: C,
}

impl<C: Clock> Runner<C> {
    /// Wrap a clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Give the clock back (e.g. to inspect a [`RecordingClock`]).
    pub fn into_clock(self) -> C {
        self.clock
    }

    /// Run every step, stopping at the first failure.
    #[tracing::instrument(skip_all, fields(steps = steps.len()))]
    pub fn run(&mut self, steps: &[Step]) -> ProbeResult<RunReport> {
        let mut report = RunReport::default();
        for step in steps {
            self.step(step, &mut report)?;
        }
        tracing::info!(
            settings_writes = report.settings_writes,
            texture_writes = report.texture_writes,
            removals = report.removals,
            paused_secs = report.paused.as_secs_f64(),
            "perturbation sequence complete"
        );
        Ok(report)
    }

    fn step(&mut self, step: &Step, report: &mut RunReport) -> ProbeResult<()> {
        match step {
            Step::Announce(msg) => tracing::info!("{msg}"),
            Step::WriteSettings { path, doc } => {
                write_settings(path, doc)?;
                report.settings_writes += 1;
                tracing::debug!(path = %path.display(), version = %doc.version, "wrote settings");
            }
            Step::WriteTexture { path, color, label } => {
                let bytes = encode_solid_png(*color)?;
                write_file(path, &bytes)?;
                report.texture_writes += 1;
                tracing::debug!(path = %path.display(), %color, label, "wrote texture");
            }
            Step::Remove { path } => {
                remove_file(path)?;
                report.removals += 1;
                tracing::debug!(path = %path.display(), "removed file");
            }
            Step::Pause(d) => {
                self.clock.pause(*d);
                report.paused += *d;
            }
        }
        Ok(())
    }
}

/// Validate `cfg`, check the assets directory exists, build the plan and run it.
pub fn run_harness<C: Clock>(cfg: &HarnessConfig, clock: C) -> ProbeResult<RunReport> {
    cfg.validate()?;
    cfg.check_assets_dir()?;

    let steps = build_plan(cfg, SystemTime::now())?;
    Runner::new(clock).run(&steps)
}

#[cfg(test)]
#[path = "../../tests/unit/harness/runner.rs"]
mod tests;
