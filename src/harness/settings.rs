use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::{error::ProbeResult, fs::write_file, rng::Rng64};

/// One JSON payload for the watched settings file.
///
/// The optional fields vary between revisions so a reloader sees keys appear and disappear,
/// not just values change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsDoc {
    /// Player movement speed.
    pub player_speed: f64,
    /// Jump height.
    pub jump_height: f64,
    /// Gravity constant.
    pub gravity: f64,
    /// Revision label.
    pub version: String,
    /// Debug toggle.
    pub debug_mode: bool,
    /// Scripted revision number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_iteration: Option<u32>,
    /// Key that only exists in the second scripted revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_feature: Option<String>,
    /// Key that only exists in the third scripted revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Index within a rapid burst.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rapid_change_id: Option<u32>,
    /// Seconds since the Unix epoch at which the write was scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl SettingsDoc {
    fn base(player_speed: f64, jump_height: f64, gravity: f64, version: &str, debug: bool) -> Self {
        Self {
            player_speed,
            jump_height,
            gravity,
            version: version.to_owned(),
            debug_mode: debug,
            test_iteration: None,
            new_feature: None,
            difficulty: None,
            rapid_change_id: None,
            timestamp: None,
        }
    }

    /// The three fixed revisions written by the `config` phase, in order.
    pub fn scripted() -> [Self; 3] {
        [
            Self {
                test_iteration: Some(1),
                ..Self::base(7.5, 12.0, 9.8, "1.0.1", true)
            },
            Self {
                test_iteration: Some(2),
                new_feature: Some("hot_reload_test".to_owned()),
                ..Self::base(3.0, 15.0, 12.0, "1.0.2", false)
            },
            Self {
                test_iteration: Some(3),
                difficulty: Some("normal".to_owned()),
                ..Self::base(5.0, 10.0, 9.8, "1.0.3", true)
            },
        ]
    }

    /// Randomized revision `index` of a rapid burst.
    pub fn rapid(index: u32, rng: &mut Rng64, timestamp: f64) -> Self {
        let player_speed = rng.uniform(1.0, 10.0);
        let jump_height = rng.uniform(5.0, 20.0);
        let gravity = rng.uniform(5.0, 15.0);
        let debug_mode = rng.coin();
        Self {
            rapid_change_id: Some(index),
            timestamp: Some(timestamp),
            ..Self::base(
                player_speed,
                jump_height,
                gravity,
                &format!("stress-test-{index}"),
                debug_mode,
            )
        }
    }
}

/// Pretty-print `doc` (two-space indent) over `path`.
pub fn write_settings(path: &Path, doc: &SettingsDoc) -> ProbeResult<()> {
    let json = serde_json::to_vec_pretty(doc)?;
    write_file(path, &json)
}

#[cfg(test)]
#[path = "../../tests/unit/harness/settings.rs"]
mod tests;
