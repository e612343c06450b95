//! Control identifiers and the raw-input seam.
//!
//! The binding table itself (which physical key/axis maps to which
//! control) lives in the device layer; the pipeline only queries
//! resolved controls through [`InputSource`].

use serde::{Deserialize, Serialize};

/// Abstract game controls, resolved through the player's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameControl {
    Up,
    Down,
    Left,
    Right,
    Accelerate,
    Brake,
    Drift,
    Spindash,
    Item,
    LookBack,
    Respawn,
    Vote,
    /// Scripting-reserved buttons.
    Custom1,
    Custom2,
    Custom3,
}

/// Menu-layer buttons, honored by the director/freecam handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuButton {
    /// Pages the spectated view forward.
    A,
    /// Pages the spectated view backward.
    X,
    /// Re-enables director mode while spectating.
    R,
    /// Toggles the freecam.
    C,
}

/// Raw input device queries for one local player.
///
/// Analog results lie in `[-JOY_AXIS_RANGE, JOY_AXIS_RANGE]`. Digital
/// controls report level state; menu buttons report edge presses.
pub trait InputSource {
    fn is_held(&self, slot: usize, control: GameControl) -> bool;
    fn analog(&self, slot: usize, control: GameControl) -> i32;
    fn menu_button_pressed(&self, slot: usize, button: MenuButton) -> bool;
}
