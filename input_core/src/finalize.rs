//! Command finalization: scripting hook, range clamps, latency stamp.

use crate::builder::CommandBuilder;
use crate::command::{FULL_TURN, LATENCY_MASK, MAX_PLAYER_MOVE};

impl CommandBuilder<'_> {
    pub(crate) fn finalize(&mut self) {
        // Without this guard the hook would fire on menus and the
        // title screen.
        if !self.game.joined_game() || !self.game.in_level() {
            return;
        }

        // The hook gets this player's record and nothing else.
        self.hook.player_cmd(self.ctx.slot, self.cmd);

        // Clamp after the hook so a misbehaving or adversarial script
        // cannot push out-of-range values into the transmitted record.
        self.cmd.forward_move = self.cmd.forward_move.clamp(-MAX_PLAYER_MOVE, MAX_PLAYER_MOVE);
        self.cmd.turning = self.cmd.turning.clamp(-FULL_TURN, FULL_TURN);
        self.cmd.throw_dir = self.cmd.throw_dir.clamp(-FULL_TURN, FULL_TURN);

        // Level tick this command was generated on, for control lag
        // measurement server-side. Stamped after the hook so scripts
        // cannot forge it.
        self.cmd.latency = (self.game.level_time() & LATENCY_MASK) as u8;
    }
}
