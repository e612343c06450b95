//! Analog axis mapping.
//!
//! Only the turning axis goes through the radial deadzone pass. The
//! vertical axis is read afterwards and used raw: it only aims item
//! throws and works the vote screen, so it behaves as a near-digital
//! axis by design.

use crate::bindings::GameControl;
use crate::builder::CommandBuilder;
use crate::command::{Buttons, FULL_TURN, JOY_AXIS_RANGE, MAX_PLAYER_MOVE};
use crate::deadzone;

impl CommandBuilder<'_> {
    fn handle_axis_deadzone(&mut self) {
        // Quantized sticks arrive as {-1, 0, 1} scaled to full range
        // straight from the device layer; nothing to normalize.
        if self.joy.gamepad_style {
            return;
        }

        self.axes = deadzone::normalize(self.axes, self.joy.deadzone);
    }

    /// Observer movement: spectators, object placement, and freecam
    /// move with digital-feeling forward/back and page their camera
    /// aim with the stick while looking back.
    fn observer_analog_input(&mut self) -> bool {
        if !self.player.is_spectator()
            && !self.player.is_object_placing()
            && !self.game.freecam_active()
        {
            return false;
        }

        if self.input.is_held(self.ctx.slot, GameControl::Accelerate) {
            self.cmd.buttons |= Buttons::ACCELERATE;
        }

        if self.input.is_held(self.ctx.slot, GameControl::Brake) {
            self.cmd.buttons |= Buttons::BRAKE;
        }

        if self.input.is_held(self.ctx.slot, GameControl::LookBack) {
            // Look-back repurposes the vertical axis into camera aim.
            self.cmd.aiming -= ((self.axes.y * i32::from(FULL_TURN)) / JOY_AXIS_RANGE) as i16;
        } else {
            if self.axes.y < 0 {
                self.cmd.forward_move += MAX_PLAYER_MOVE;
            }

            if self.axes.y > 0 {
                self.cmd.forward_move -= MAX_PLAYER_MOVE;
            }
        }

        true
    }

    /// Normal driving: accel/brake are independent analog controls,
    /// and the vertical axis aims item throws instead of moving.
    fn drive_analog_input(&mut self) {
        let value = self.input.analog(self.ctx.slot, GameControl::Accelerate);
        if value != 0 {
            self.cmd.buttons |= Buttons::ACCELERATE;
            self.cmd.forward_move += ((value * i32::from(MAX_PLAYER_MOVE)) / JOY_AXIS_RANGE) as i16;
        }

        let value = self.input.analog(self.ctx.slot, GameControl::Brake);
        if value != 0 {
            self.cmd.buttons |= Buttons::BRAKE;
            self.cmd.forward_move -= ((value * i32::from(MAX_PLAYER_MOVE)) / JOY_AXIS_RANGE) as i16;
        }

        if self.axes.y != 0 {
            self.cmd.throw_dir -= ((self.axes.y * i32::from(FULL_TURN)) / JOY_AXIS_RANGE) as i16;
        }
    }

    pub(crate) fn analog_input(&mut self) {
        self.axes.x = self.input.analog(self.ctx.slot, GameControl::Right)
            - self.input.analog(self.ctx.slot, GameControl::Left);
        self.axes.y = 0;
        self.handle_axis_deadzone();

        // The vertical axis deliberately skips the radial pass above.
        self.axes.y = self.input.analog(self.ctx.slot, GameControl::Down)
            - self.input.analog(self.ctx.slot, GameControl::Up);

        if self.game.mirrored_mode() {
            self.axes.x = -self.axes.x;
        }

        if self.axes.x != 0 {
            self.cmd.turning -= ((self.axes.x * i32::from(FULL_TURN)) / JOY_AXIS_RANGE) as i16;
        }

        if self.observer_analog_input() {
            return;
        }

        self.drive_analog_input();
    }

    /// Digital controls are OR'd into the button mask independent of
    /// any analog state.
    pub(crate) fn common_button_input(&mut self) {
        let table = [
            (GameControl::Drift, Buttons::DRIFT),
            (GameControl::Spindash, Buttons::SPINDASH),
            (GameControl::Item, Buttons::ATTACK),
            (GameControl::LookBack, Buttons::LOOKBACK),
            (GameControl::Respawn, Buttons::RESPAWN.union(Buttons::EBRAKE)),
            (GameControl::Vote, Buttons::VOTE),
            (GameControl::Custom1, Buttons::CUSTOM1),
            (GameControl::Custom2, Buttons::CUSTOM2),
            (GameControl::Custom3, Buttons::CUSTOM3),
        ];

        for (control, buttons) in table {
            if self.input.is_held(self.ctx.slot, control) {
                self.cmd.buttons |= buttons;
            }
        }
    }
}
