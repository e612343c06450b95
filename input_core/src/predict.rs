//! Camera angle prediction.
//!
//! Turning is excluded from the transmitted command so the
//! authoritative heading cannot be trivially tampered with. The local
//! camera reconstructs a smooth heading here by running the same
//! steering model the simulation uses.

use crate::builder::CommandBuilder;
use crate::command::ANGLE_REDUCE;
use crate::fixed::Angle;

impl CommandBuilder<'_> {
    pub(crate) fn angle_prediction(&mut self) {
        // The chase camera freezes in these states; the local camera
        // has to freeze too or it jerks when control resumes.
        if self.player.is_dead() {
            return;
        }

        if self.player.in_hit_stun() {
            return;
        }

        let mut realtics = self.ctx.realtics;

        // One step per elapsed micro-tick. The steering accumulator is
        // stateful and non-linear, so the per-tick deltas cannot be
        // collapsed into a single multiplied step.
        while realtics > 0 {
            let steering = self
                .model
                .update_steering(self.steering.steering(self.ctx.slot), self.cmd.turning);
            self.steering.set_steering(self.ctx.slot, steering);

            let delta = ((i32::from(self.model.turn_value(steering))) << ANGLE_REDUCE) as Angle;
            self.steering.add_angle(self.ctx.view, delta);

            realtics -= 1;
        }
    }
}
