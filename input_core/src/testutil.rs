//! Shared fakes for unit tests.

use std::collections::{HashMap, HashSet};

use crate::bindings::{GameControl, InputSource, MenuButton};
use crate::command::JOY_AXIS_RANGE;
use crate::session::{GameSession, PlayerStatus, SteeringModel};

pub(crate) struct FakeSession {
    pub playback: bool,
    pub freecam: bool,
    pub paused: bool,
    pub auto_paused: bool,
    pub in_level: bool,
    pub joined: bool,
    pub mirrored: bool,
    pub level_time: u32,
    pub typing: bool,
    pub keystrokes: bool,
    pub party_local: bool,
    pub view_deltas: Vec<(usize, i32)>,
    pub director: Option<bool>,
    pub freecam_toggles: u32,
}

impl Default for FakeSession {
    fn default() -> Self {
        Self {
            playback: false,
            freecam: false,
            paused: false,
            auto_paused: false,
            in_level: true,
            joined: true,
            mirrored: false,
            level_time: 0,
            typing: false,
            keystrokes: false,
            party_local: false,
            view_deltas: Vec::new(),
            director: None,
            freecam_toggles: 0,
        }
    }
}

impl GameSession for FakeSession {
    fn playback_active(&self) -> bool {
        self.playback
    }

    fn freecam_active(&self) -> bool {
        self.freecam
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn auto_paused(&self) -> bool {
        self.auto_paused
    }

    fn in_level(&self) -> bool {
        self.in_level
    }

    fn joined_game(&self) -> bool {
        self.joined
    }

    fn mirrored_mode(&self) -> bool {
        self.mirrored
    }

    fn level_time(&self) -> u32 {
        self.level_time
    }

    fn typing_active(&self, _slot: usize) -> bool {
        self.typing
    }

    fn keystrokes_visible(&self) -> bool {
        self.keystrokes
    }

    fn view_is_party_local(&self, _view: usize) -> bool {
        self.party_local
    }

    fn adjust_view(&mut self, view: usize, delta: i32) {
        self.view_deltas.push((view, delta));
    }

    fn set_director(&mut self, enabled: bool) {
        self.director = Some(enabled);
    }

    fn toggle_freecam(&mut self) {
        self.freecam_toggles += 1;
    }
}

#[derive(Default)]
pub(crate) struct FakePlayer {
    pub spectator: bool,
    pub object_placing: bool,
    pub bot: bool,
    pub awaiting_respawn: bool,
    pub dead: bool,
    pub hit_stun: bool,
}

impl PlayerStatus for FakePlayer {
    fn is_spectator(&self) -> bool {
        self.spectator
    }

    fn is_object_placing(&self) -> bool {
        self.object_placing
    }

    fn uses_bot_movement(&self) -> bool {
        self.bot
    }

    fn awaiting_respawn(&self) -> bool {
        self.awaiting_respawn
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn in_hit_stun(&self) -> bool {
        self.hit_stun
    }
}

#[derive(Default)]
pub(crate) struct FakeInput {
    pub analogs: HashMap<GameControl, i32>,
    pub held: HashSet<GameControl>,
    pub menu: HashSet<MenuButton>,
}

impl FakeInput {
    pub fn full_right() -> Self {
        let mut input = Self::default();
        input.analogs.insert(GameControl::Right, JOY_AXIS_RANGE);
        input
    }
}

impl InputSource for FakeInput {
    fn is_held(&self, _slot: usize, control: GameControl) -> bool {
        self.held.contains(&control)
    }

    fn analog(&self, _slot: usize, control: GameControl) -> i32 {
        self.analogs.get(&control).copied().unwrap_or(0)
    }

    fn menu_button_pressed(&self, _slot: usize, button: MenuButton) -> bool {
        self.menu.contains(&button)
    }
}

/// Eases the accumulator halfway toward the commanded turn each
/// micro-tick; deliberately non-linear across ticks so prediction
/// tests can tell a per-tick loop from a single multiplied step.
pub(crate) struct SmoothSteering;

impl SteeringModel for SmoothSteering {
    fn update_steering(&self, steering: i32, turning: i16) -> i32 {
        steering + (i32::from(turning) - steering) / 2
    }

    fn turn_value(&self, steering: i32) -> i16 {
        (steering / 4) as i16
    }
}
