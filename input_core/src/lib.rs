//! `input_core`
//!
//! Turns a local player's raw input-device state into one immutable
//! per-tick command record for a lockstep kart racer.
//!
//! Design goals:
//! - Bit-identical output on every machine (no floats, no ambient state).
//! - Exactly one priority branch runs per tick, auditable in isolation.
//! - Traits at the seams: device layer, game state, steering model,
//!   scripting hook.
//! - No `unsafe`.

pub mod analog;
pub mod bindings;
pub mod builder;
pub mod command;
pub mod config;
pub mod deadzone;
pub mod finalize;
pub mod fixed;
pub mod predict;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::bindings::*;
    pub use crate::builder::*;
    pub use crate::command::*;
    pub use crate::config::*;
    pub use crate::deadzone::*;
    pub use crate::session::*;
}
