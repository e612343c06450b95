//! Game/player state seams and per-player persistent state.
//!
//! The pipeline never owns game state; it reads it through the traits
//! here and mutates exactly two things: the director/freecam toggles
//! (through [`GameSession`]) and the steering/heading accumulators
//! (through [`SteeringStore`]).

use crate::command::{TicCommand, MAX_LOCAL_PLAYERS};
use crate::fixed::Angle;

/// Immutable-for-the-call parameters of one build.
#[derive(Debug, Clone, Copy)]
pub struct PlayerInputContext {
    /// Local player slot.
    pub slot: usize,
    /// Splitscreen view this player's camera occupies.
    pub view: usize,
    /// Elapsed simulation micro-ticks since the previous sample.
    pub realtics: u32,
}

/// Global game state queries plus the two observer-mode toggles.
pub trait GameSession {
    fn playback_active(&self) -> bool;
    fn freecam_active(&self) -> bool;
    fn paused(&self) -> bool;
    fn auto_paused(&self) -> bool;
    fn in_level(&self) -> bool;
    /// Whether the local player has actually joined the game (false on
    /// the title screen and in menus, where the level may still tick).
    fn joined_game(&self) -> bool;
    fn mirrored_mode(&self) -> bool;
    fn level_time(&self) -> u32;
    /// A menu, chat box, or console is capturing this player's keys.
    fn typing_active(&self, slot: usize) -> bool;
    fn keystrokes_visible(&self) -> bool;
    /// Whether the player shown on this view belongs to the local party.
    fn view_is_party_local(&self, view: usize) -> bool;

    /// Pages the given view to another player's viewpoint.
    fn adjust_view(&mut self, view: usize, delta: i32);
    fn set_director(&mut self, enabled: bool);
    fn toggle_freecam(&mut self);
}

/// Per-player simulation state queries.
pub trait PlayerStatus {
    fn is_spectator(&self) -> bool;
    fn is_object_placing(&self) -> bool;
    fn uses_bot_movement(&self) -> bool;
    /// Dead and waiting to re-enter the level.
    fn awaiting_respawn(&self) -> bool;
    fn is_dead(&self) -> bool;
    /// The player's body exists and is inside a hit-stun window.
    fn in_hit_stun(&self) -> bool;
}

/// Steering accumulator step and turn curve, supplied by the
/// simulation. Both are pure functions of their arguments.
pub trait SteeringModel {
    /// Advances the steering accumulator one micro-tick toward the
    /// commanded `turning` value.
    fn update_steering(&self, steering: i32, turning: i16) -> i32;
    /// Angle delta (pre-reduction) produced by the accumulator.
    fn turn_value(&self, steering: i32) -> i16;
}

/// Scripting override point.
///
/// The hook receives exclusive access to the one record it may edit;
/// it must never observe or mutate any other player's state. Its
/// output is clamped afterward, so out-of-range writes cannot reach
/// the transmitted record.
pub trait CommandHook {
    fn player_cmd(&mut self, slot: usize, cmd: &mut TicCommand);
}

/// Hook that leaves the command untouched.
#[derive(Debug, Default)]
pub struct NullHook;

impl CommandHook for NullHook {
    fn player_cmd(&mut self, _slot: usize, _cmd: &mut TicCommand) {}
}

/// Persistent steering/heading state for every local player.
///
/// Owned by the simulation for the lifetime of the session. Steering
/// accumulators are indexed by player slot, predicted headings by
/// view; only the angle predictor writes to either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteeringStore {
    steering: [i32; MAX_LOCAL_PLAYERS],
    angle: [Angle; MAX_LOCAL_PLAYERS],
}

impl SteeringStore {
    pub fn steering(&self, slot: usize) -> i32 {
        self.steering[slot]
    }

    pub fn set_steering(&mut self, slot: usize, value: i32) {
        self.steering[slot] = value;
    }

    pub fn angle(&self, view: usize) -> Angle {
        self.angle[view]
    }

    pub fn set_angle(&mut self, view: usize, value: Angle) {
        self.angle[view] = value;
    }

    pub fn add_angle(&mut self, view: usize, delta: Angle) {
        self.angle[view] = self.angle[view].wrapping_add(delta);
    }
}
