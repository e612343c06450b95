//! Per-tick command record.
//!
//! [`TicCommand`] is the single instruction one local player produces
//! per simulation tick. It is consumed by the simulation and shipped
//! over network/replay channels, so it is serde round-trippable and
//! every signed magnitude field stays within its declared bound after
//! finalization.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Full range of a raw analog axis; values lie in
/// `[-JOY_AXIS_RANGE, JOY_AXIS_RANGE]`.
pub const JOY_AXIS_RANGE: i32 = 1023;

/// Bound on `forward_move` after finalization.
pub const MAX_PLAYER_MOVE: i16 = 50;

/// Bound on `turning` and `throw_dir` after finalization.
pub const FULL_TURN: i16 = 800;

/// Bits dropped when storing the predicted heading into `angle`.
pub const ANGLE_REDUCE: u32 = 16;

/// `latency` keeps this many low bits of the level tick counter.
pub const LATENCY_MASK: u32 = 0xFF;

/// Splitscreen limit; player slots and views index arrays of this size.
pub const MAX_LOCAL_PLAYERS: usize = 4;

bitflags! {
    /// Discrete action buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Buttons: u32 {
        const ACCELERATE = 1 << 0;
        const BRAKE = 1 << 1;
        const ATTACK = 1 << 2;
        const DRIFT = 1 << 3;
        const SPINDASH = 1 << 4;
        const LOOKBACK = 1 << 5;
        const RESPAWN = 1 << 6;
        const EBRAKE = 1 << 7;
        const VOTE = 1 << 8;
        // Reserved for the scripting layer.
        const CUSTOM1 = 1 << 9;
        const CUSTOM2 = 1 << 10;
        const CUSTOM3 = 1 << 11;
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Buttons::empty()
    }
}

bitflags! {
    /// Out-of-band command flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CommandFlags: u8 {
        /// A text-entry surface (menu, chat, console) owns this
        /// player's keys.
        const TYPING = 1 << 0;
        /// Keystroke echo is visible to other players.
        const KEYSTROKE = 1 << 1;
    }
}

impl Default for CommandFlags {
    fn default() -> Self {
        CommandFlags::empty()
    }
}

/// One player's instruction for one simulation tick.
///
/// Allocated by the caller, fully overwritten by the pipeline (zeroed
/// then populated), then handed to the simulation/transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicCommand {
    pub forward_move: i16,
    pub turning: i16,
    /// Item throw aim: positive is forward.
    pub throw_dir: i16,
    pub aiming: i16,
    pub buttons: Buttons,
    pub flags: CommandFlags,
    /// Reduced-precision heading (predicted view angle shifted down by
    /// [`ANGLE_REDUCE`]).
    pub angle: i16,
    /// Level tick the command was generated on, masked to
    /// [`LATENCY_MASK`]. Used server-side for control lag measurement.
    pub latency: u8,
}
