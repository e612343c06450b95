//! Joystick configuration.
//!
//! Loaded from JSON strings/files (file IO left to the app). Owned by
//! the configuration layer; the pipeline only reads it.

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed, FRACUNIT};

/// Per-player analog stick tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JoystickConfig {
    /// Radial deadzone as a 16.16 fraction of the full axis range.
    #[serde(default = "default_deadzone")]
    pub deadzone: Fixed,
    /// Quantized sticks: the device layer already reduced the axes to
    /// {-1, 0, 1} scaled to full range, so the radial deadzone pass
    /// is skipped entirely.
    #[serde(default)]
    pub gamepad_style: bool,
}

fn default_deadzone() -> Fixed {
    FRACUNIT / 4
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            deadzone: default_deadzone(),
            gamepad_style: false,
        }
    }
}

impl JoystickConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
