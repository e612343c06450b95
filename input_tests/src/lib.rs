//! Test harness for driving the whole tic-command pipeline.
//!
//! Bundles fake implementations of every seam (`GameSession`,
//! `PlayerStatus`, `InputSource`, `SteeringModel`, `CommandHook`) so
//! integration tests read as scenarios instead of setup.

use std::collections::{HashMap, HashSet};

use input_core::prelude::*;

/// Scriptable global game state. Mutations performed by the pipeline
/// (view paging, director/freecam toggles) are recorded for asserts.
pub struct TestSession {
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

impl Default for TestSession {
    fn default() -> Self {
        Self {
            playback: false,
            freecam: false,
            paused: false,
            auto_paused: false,
            in_level: true,
            joined: true,
            mirrored: false,
            level_time: 100,
            typing: false,
            keystrokes: false,
            party_local: false,
            view_deltas: Vec::new(),
            director: None,
            freecam_toggles: 0,
        }
    }
}

impl GameSession for TestSession {
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

/// Scriptable per-player state.
#[derive(Default)]
pub struct TestPlayer {
    pub spectator: bool,
    pub object_placing: bool,
    pub bot: bool,
    pub awaiting_respawn: bool,
    pub dead: bool,
    pub hit_stun: bool,
}

impl PlayerStatus for TestPlayer {
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

/// Scriptable raw device state.
#[derive(Default)]
pub struct TestInput {
    analogs: HashMap<GameControl, i32>,
    held: HashSet<GameControl>,
    menu: HashSet<MenuButton>,
}

impl TestInput {
    pub fn analog(mut self, control: GameControl, value: i32) -> Self {
        self.analogs.insert(control, value);
        self
    }

    pub fn hold(mut self, control: GameControl) -> Self {
        self.held.insert(control);
        self
    }

    pub fn press_menu(mut self, button: MenuButton) -> Self {
        self.menu.insert(button);
        self
    }
}

impl InputSource for TestInput {
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

/// Steering model that eases the accumulator halfway toward the
/// commanded turn each micro-tick. Non-linear across ticks, like the
/// simulation's real steering filter.
pub struct EasedSteering;

impl SteeringModel for EasedSteering {
    fn update_steering(&self, steering: i32, turning: i16) -> i32 {
        steering + (i32::from(turning) - steering) / 2
    }

    fn turn_value(&self, steering: i32) -> i16 {
        (steering / 4) as i16
    }
}

/// Hook that counts invocations and optionally overwrites fields.
#[derive(Default)]
pub struct RecordingHook {
    pub calls: u32,
    pub force_forward: Option<i16>,
    pub force_turning: Option<i16>,
}

impl CommandHook for RecordingHook {
    fn player_cmd(&mut self, _slot: usize, cmd: &mut TicCommand) {
        self.calls += 1;
        if let Some(v) = self.force_forward {
            cmd.forward_move = v;
        }
        if let Some(v) = self.force_turning {
            cmd.turning = v;
        }
    }
}

/// Everything one scenario needs, with sensible live-gameplay defaults.
pub struct Harness {
    pub game: TestSession,
    pub player: TestPlayer,
    pub input: TestInput,
    pub joy: JoystickConfig,
    pub store: SteeringStore,
    pub hook: RecordingHook,
    pub slot: usize,
    pub view: usize,
    pub realtics: u32,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            game: TestSession::default(),
            player: TestPlayer::default(),
            input: TestInput::default(),
            joy: JoystickConfig::default(),
            store: SteeringStore::default(),
            hook: RecordingHook::default(),
            slot: 0,
            view: 0,
            realtics: 1,
        }
    }
}

impl Harness {
    /// Runs one tick of the pipeline and returns the finished record.
    pub fn build(&mut self) -> TicCommand {
        let mut cmd = TicCommand::default();
        build_command(
            &mut cmd,
            PlayerInputContext {
                slot: self.slot,
                view: self.view,
                realtics: self.realtics,
            },
            &mut self.game,
            &self.player,
            &self.input,
            &self.joy,
            &mut self.store,
            &EasedSteering,
            &mut self.hook,
        );
        cmd
    }
}

/// Installs a test subscriber so `tracing` output lands in the test
/// log when a scenario fails.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("trace")
        .with_test_writer()
        .try_init();
}
