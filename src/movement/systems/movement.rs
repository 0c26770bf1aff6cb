//! Movement domain: forces, drag, jumping and the horizontal speed cap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, MovementTuning, Player, PlayerState, PlayerStateController};

/// Scale applied to the movement force in each state.
pub(crate) fn force_multiplier(state: PlayerState, tuning: &MovementTuning) -> f32 {
    match state {
        PlayerState::Move => 1.0,
        PlayerState::Slide => tuning.slide_multiplier,
        PlayerState::Jump => tuning.air_multiplier,
        PlayerState::Idle | PlayerState::SlideIdle => 1.0,
    }
}

/// Linear drag for a state, or `None` to keep whatever the body has.
pub(crate) fn drag_for_state(state: PlayerState, tuning: &MovementTuning) -> Option<f32> {
    match state {
        PlayerState::Move => Some(tuning.ground_drag),
        PlayerState::Slide => Some(tuning.slide_drag),
        PlayerState::Jump => Some(tuning.air_drag),
        PlayerState::Idle | PlayerState::SlideIdle => None,
    }
}

/// Rescale the XZ part of `velocity` down to `max_speed`, keeping Y intact.
pub(crate) fn clamp_horizontal_speed(velocity: Vec3, max_speed: f32) -> Vec3 {
    let flat = Vec3::new(velocity.x, 0.0, velocity.z);
    if flat.length() <= max_speed {
        return velocity;
    }
    let limited = flat.normalize_or_zero() * max_speed;
    Vec3::new(limited.x, velocity.y, limited.z)
}

/// Count down toward the jump becoming available again.
pub(crate) fn tick_jump_cooldown(state: &mut MovementState, dt: f32) {
    if state.jump_ready {
        return;
    }
    state.jump_cooldown_timer -= dt;
    if state.jump_cooldown_timer <= 0.0 {
        state.jump_cooldown_timer = 0.0;
        state.jump_ready = true;
        debug!("Jump ready");
    }
}

pub(crate) fn update_jump_cooldown(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        tick_jump_cooldown(&mut state, dt);
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(Forces, &mut MovementState), With<Player>>,
) {
    for (mut forces, mut state) in &mut query {
        if !state.jump_requested {
            continue;
        }
        state.jump_requested = false;

        // Reset vertical speed before the impulse
        let velocity = forces.linear_velocity_mut();
        velocity.y = 0.0;

        // Rotation is locked, so the body's up axis is world up
        forces.apply_linear_impulse(Vec3::Y * tuning.jump_force);
        debug!("Jump: impulse={}", tuning.jump_force);
    }
}

pub(crate) fn apply_drag(
    tuning: Res<MovementTuning>,
    mut query: Query<(&PlayerStateController, &mut LinearDamping), With<Player>>,
) {
    for (controller, mut damping) in &mut query {
        if let Some(drag) = drag_for_state(controller.current(), &tuning)
            && damping.0 != drag
        {
            damping.0 = drag;
        }
    }
}

/// Runs in the fixed timestep; avian integrates the accumulated force right after.
pub(crate) fn apply_movement_force(
    tuning: Res<MovementTuning>,
    mut query: Query<(Forces, &MovementState, &PlayerStateController), With<Player>>,
) {
    for (mut forces, state, controller) in &mut query {
        if state.move_direction == Vec3::ZERO {
            continue;
        }
        let multiplier = force_multiplier(controller.current(), &tuning);
        forces.apply_force(state.move_direction * tuning.movement_speed * multiplier);
    }
}

pub(crate) fn limit_horizontal_speed(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        let limited = clamp_horizontal_speed(velocity.0, tuning.movement_speed);
        if limited != velocity.0 {
            velocity.0 = limited;
        }
    }
}
