//! Tic-command construction and input mode arbitration.
//!
//! One call per local player per simulation tick, run to completion
//! with no suspension points. Exactly one priority branch executes
//! per tick; [`select_branch`] spells the order out so it can be
//! audited and tested in isolation.

use tracing::trace;

use crate::bindings::{GameControl, InputSource, MenuButton};
use crate::command::{Buttons, CommandFlags, TicCommand, ANGLE_REDUCE};
use crate::config::JoystickConfig;
use crate::deadzone::JoyVector;
use crate::session::{
    CommandHook, GameSession, PlayerInputContext, PlayerStatus, SteeringModel, SteeringStore,
};

/// Terminal branch of the per-tick priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Replay playback, freecam, or spectating. Observer controls
    /// stay usable even while the game is paused.
    Observer,
    /// Paused or auto-paused: the record stays zeroed, nothing else
    /// runs, persistent state is untouched.
    Paused,
    /// In a level but waiting to re-enter: no input accepted.
    AwaitingRespawn,
    /// Normal gameplay.
    Live,
}

/// Ordered guard list deciding which branch handles this tick.
pub fn select_branch(game: &dyn GameSession, player: &dyn PlayerStatus) -> Branch {
    if game.playback_active() || game.freecam_active() || player.is_spectator() {
        return Branch::Observer;
    }

    if game.paused() || game.auto_paused() {
        return Branch::Paused;
    }

    if game.in_level() && player.awaiting_respawn() {
        return Branch::AwaitingRespawn;
    }

    Branch::Live
}

/// Borrows every collaborator for the duration of one build.
pub(crate) struct CommandBuilder<'a> {
    pub(crate) cmd: &'a mut TicCommand,
    pub(crate) ctx: PlayerInputContext,
    pub(crate) game: &'a mut dyn GameSession,
    pub(crate) player: &'a dyn PlayerStatus,
    pub(crate) input: &'a dyn InputSource,
    pub(crate) joy: &'a JoystickConfig,
    pub(crate) steering: &'a mut SteeringStore,
    pub(crate) model: &'a dyn SteeringModel,
    pub(crate) hook: &'a mut dyn CommandHook,
    pub(crate) axes: JoyVector,
}

impl CommandBuilder<'_> {
    /// Text entry owns the keys: only the typing flags are set, all
    /// movement input is skipped.
    fn typing_input(&mut self) -> bool {
        if !self.game.typing_active(self.ctx.slot) {
            return false;
        }

        self.cmd.flags |= CommandFlags::TYPING;

        if self.game.keystrokes_visible() {
            self.cmd.flags |= CommandFlags::KEYSTROKE;
        }

        true
    }

    pub(crate) fn toggle_freecam_input(&mut self) {
        if self.input.menu_button_pressed(self.ctx.slot, MenuButton::C) {
            self.game.toggle_freecam();
        }
    }

    /// Director-mode controls: view paging, spectator fire, director
    /// re-enable, freecam toggle. Claims the tick when they apply.
    fn director_input(&mut self) -> bool {
        if self.game.freecam_active() || self.game.view_is_party_local(self.ctx.view) {
            return false;
        }

        if self.input.menu_button_pressed(self.ctx.slot, MenuButton::A) {
            self.game.adjust_view(self.ctx.view, 1);
            self.game.set_director(false);
        }

        if self.input.menu_button_pressed(self.ctx.slot, MenuButton::X) {
            self.game.adjust_view(self.ctx.view, -1);
            self.game.set_director(false);
        }

        if self.player.is_spectator() {
            // Duplicate of the item binding so spectators can fire.
            if self.input.is_held(self.ctx.slot, GameControl::Item) {
                self.cmd.buttons |= Buttons::ATTACK;
            }

            if self.input.menu_button_pressed(self.ctx.slot, MenuButton::R) {
                self.game.set_director(true);
            }
        }

        self.toggle_freecam_input();

        true
    }

    pub(crate) fn regular_input(&mut self) {
        self.analog_input();
        self.common_button_input();
    }

    pub(crate) fn run(mut self) {
        let branch = select_branch(self.game, self.player);
        trace!(slot = self.ctx.slot, ?branch, "building tic command");

        match branch {
            Branch::Observer => {
                if !self.typing_input() && !self.director_input() {
                    self.regular_input();

                    if self.game.freecam_active() {
                        self.toggle_freecam_input();
                    }
                }
            }

            Branch::Paused | Branch::AwaitingRespawn => {}

            Branch::Live => {
                // A human can become bot-controlled at the very end of
                // a race, so director controls keep priority over the
                // bot check. Both calls run for their side effects.
                let overlay = self.typing_input() || self.director_input();

                if self.player.uses_bot_movement() {
                    // Bot commands come from the bot layer, not here.
                    return;
                }

                if !overlay {
                    self.regular_input();
                }

                self.cmd.angle = (self.steering.angle(self.ctx.view) >> ANGLE_REDUCE) as i16;

                self.finalize();
                self.angle_prediction();
            }
        }
    }
}

/// Builds one player's command for this tick.
///
/// The record is fully overwritten: zeroed first, then populated by
/// whichever priority branch claims the tick.
#[allow(clippy::too_many_arguments)]
pub fn build_command(
    cmd: &mut TicCommand,
    ctx: PlayerInputContext,
    game: &mut dyn GameSession,
    player: &dyn PlayerStatus,
    input: &dyn InputSource,
    joy: &JoystickConfig,
    steering: &mut SteeringStore,
    model: &dyn SteeringModel,
    hook: &mut dyn CommandHook,
) {
    *cmd = TicCommand::default();

    CommandBuilder {
        cmd,
        ctx,
        game,
        player,
        input,
        joy,
        steering,
        model,
        hook,
        axes: JoyVector::default(),
    }
    .run();
}
