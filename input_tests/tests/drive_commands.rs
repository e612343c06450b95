//! Normal-driving scenarios: axis mapping, button mapping, hook
//! clamping, and the transport round-trip of a finished record.

use input_core::fixed::FRACUNIT;
use input_core::prelude::*;
use input_tests::{Harness, TestInput};

#[test]
fn full_deflection_right_maps_to_full_turn() {
    // Raw horizontal axis at R with a half-range deadzone must still
    // normalize to R and produce a full turn.
    let mut h = Harness::default();
    h.joy.deadzone = FRACUNIT / 2;
    h.input = TestInput::default().analog(GameControl::Right, JOY_AXIS_RANGE);

    let cmd = h.build();

    assert_eq!(cmd.turning, -FULL_TURN);
    assert_eq!(cmd.latency, (h.game.level_time & LATENCY_MASK) as u8);
    assert_eq!(h.hook.calls, 1);
}

#[test]
fn mirrored_mode_flips_the_turn() {
    let mut h = Harness::default();
    h.game.mirrored = true;
    h.joy.deadzone = FRACUNIT / 2;
    h.input = TestInput::default().analog(GameControl::Right, JOY_AXIS_RANGE);

    assert_eq!(h.build().turning, FULL_TURN);
}

#[test]
fn deflection_inside_deadzone_is_ignored() {
    let mut h = Harness::default();
    h.joy.deadzone = FRACUNIT / 4; // 255 axis units
    h.input = TestInput::default().analog(GameControl::Right, 200);

    assert_eq!(h.build().turning, 0);
}

#[test]
fn gamepad_style_skips_the_radial_pass() {
    // The same partial deflection that the deadzone would swallow
    // passes through untouched on a pre-quantized pad.
    let mut h = Harness::default();
    h.joy.deadzone = FRACUNIT / 2;
    h.joy.gamepad_style = true;
    h.input = TestInput::default().analog(GameControl::Right, 300);

    let cmd = h.build();

    assert_eq!(cmd.turning, -((300 * i32::from(FULL_TURN) / JOY_AXIS_RANGE) as i16));
}

#[test]
fn left_and_right_axes_oppose() {
    let mut h = Harness::default();
    h.input = TestInput::default()
        .analog(GameControl::Right, JOY_AXIS_RANGE)
        .analog(GameControl::Left, JOY_AXIS_RANGE);

    assert_eq!(h.build().turning, 0);
}

#[test]
fn analog_accelerate_sets_button_and_forward_move() {
    let mut h = Harness::default();
    h.input = TestInput::default().analog(GameControl::Accelerate, JOY_AXIS_RANGE);

    let cmd = h.build();

    assert!(cmd.buttons.contains(Buttons::ACCELERATE));
    assert_eq!(cmd.forward_move, MAX_PLAYER_MOVE);
}

#[test]
fn brake_subtracts_from_forward_move() {
    let mut h = Harness::default();
    h.input = TestInput::default()
        .analog(GameControl::Accelerate, JOY_AXIS_RANGE)
        .analog(GameControl::Brake, JOY_AXIS_RANGE);

    let cmd = h.build();

    assert!(cmd.buttons.contains(Buttons::ACCELERATE | Buttons::BRAKE));
    assert_eq!(cmd.forward_move, 0);
}

#[test]
fn half_throttle_scales_linearly() {
    let mut h = Harness::default();
    h.input = TestInput::default().analog(GameControl::Accelerate, JOY_AXIS_RANGE / 2);

    let cmd = h.build();

    assert_eq!(
        cmd.forward_move,
        ((JOY_AXIS_RANGE / 2) * i32::from(MAX_PLAYER_MOVE) / JOY_AXIS_RANGE) as i16
    );
}

#[test]
fn vertical_axis_feeds_throw_direction() {
    let mut h = Harness::default();
    h.input = TestInput::default().analog(GameControl::Up, JOY_AXIS_RANGE);

    let cmd = h.build();

    // Pushing forward aims the throw forward.
    assert_eq!(cmd.throw_dir, FULL_TURN);
    assert_eq!(cmd.forward_move, 0);
}

#[test]
fn digital_buttons_or_into_the_mask() {
    let mut h = Harness::default();
    h.input = TestInput::default()
        .hold(GameControl::Drift)
        .hold(GameControl::Respawn)
        .hold(GameControl::Custom1);

    let cmd = h.build();

    assert_eq!(
        cmd.buttons,
        Buttons::DRIFT | Buttons::RESPAWN | Buttons::EBRAKE | Buttons::CUSTOM1
    );
}

#[test]
fn spectator_lookback_repurposes_vertical_axis_into_aim() {
    let mut h = Harness::default();
    h.player.spectator = true;
    h.game.party_local = true;
    h.input = TestInput::default()
        .hold(GameControl::LookBack)
        .analog(GameControl::Down, JOY_AXIS_RANGE);

    let cmd = h.build();

    assert_eq!(cmd.aiming, -FULL_TURN);
    assert_eq!(cmd.forward_move, 0);
    assert!(cmd.buttons.contains(Buttons::LOOKBACK));
}

#[test]
fn spectator_vertical_axis_is_digital_forward_back() {
    let mut h = Harness::default();
    h.player.spectator = true;
    h.game.party_local = true;

    h.input = TestInput::default().analog(GameControl::Up, JOY_AXIS_RANGE);
    assert_eq!(h.build().forward_move, MAX_PLAYER_MOVE);

    h.input = TestInput::default().analog(GameControl::Down, JOY_AXIS_RANGE);
    assert_eq!(h.build().forward_move, -MAX_PLAYER_MOVE);
}

#[test]
fn scripted_override_is_clamped_after_the_hook() {
    let mut h = Harness::default();
    h.hook.force_forward = Some(i16::MAX);
    h.hook.force_turning = Some(i16::MIN);

    let cmd = h.build();

    assert_eq!(h.hook.calls, 1);
    assert_eq!(cmd.forward_move, MAX_PLAYER_MOVE);
    assert_eq!(cmd.turning, -FULL_TURN);
}

#[test]
fn finished_record_roundtrips_through_transport_encoding() {
    let mut h = Harness::default();
    h.input = TestInput::default()
        .analog(GameControl::Right, JOY_AXIS_RANGE)
        .analog(GameControl::Accelerate, JOY_AXIS_RANGE)
        .hold(GameControl::Drift);

    let cmd = h.build();

    let json = serde_json::to_string(&cmd).unwrap();
    let back: TicCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmd);
}
