//! Movement domain: input sampling and edge-triggered actions.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::movement::{
    MovementBindings, MovementInput, MovementState, MovementTuning, Orientation,
    OrientationPivot, Player,
};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<MovementBindings>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.slide_just_pressed = keyboard.just_pressed(bindings.slide);
    input.movement_just_pressed = keyboard.just_pressed(bindings.movement);
    input.jump_held = keyboard.pressed(bindings.jump);
}

/// World-space direction for an input axis, relative to an orientation's
/// forward and right vectors. Normalized, or zero when there is no input.
pub(crate) fn movement_direction(forward: Vec3, right: Vec3, axis: Vec2) -> Vec3 {
    (forward * axis.y + right * axis.x).normalize_or_zero()
}

/// What the edge-triggered keys do this frame. At most one fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MovementAction {
    StartSlide,
    StopSlide,
    Jump,
    None,
}

pub(crate) fn resolve_action(input: &MovementInput, state: &MovementState) -> MovementAction {
    if input.slide_just_pressed {
        MovementAction::StartSlide
    } else if input.movement_just_pressed {
        MovementAction::StopSlide
    } else if input.jump_held && state.jump_ready && state.on_ground {
        MovementAction::Jump
    } else {
        MovementAction::None
    }
}

pub(crate) fn handle_movement_actions(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    pivots: Query<&Transform, With<Orientation>>,
    mut query: Query<(Entity, &mut MovementState, &OrientationPivot), With<Player>>,
    mut missing_pivots: Local<HashSet<Entity>>,
) {
    for (entity, mut state, pivot) in &mut query {
        match resolve_action(&input, &state) {
            MovementAction::StartSlide => {
                state.sliding = true;
                debug!("Slide engaged");
            }
            MovementAction::StopSlide => {
                state.sliding = false;
                debug!("Slide released");
            }
            MovementAction::Jump => {
                state.jump_ready = false;
                state.jump_cooldown_timer = tuning.jump_cooldown;
                state.jump_requested = true;
            }
            MovementAction::None => {}
        }

        state.move_direction = match pivots.get(pivot.0) {
            Ok(transform) => {
                movement_direction(*transform.forward(), *transform.right(), input.axis)
            }
            Err(_) => {
                if missing_pivots.insert(entity) {
                    warn!(
                        "Orientation pivot {:?} of {:?} is missing, ignoring movement input",
                        pivot.0, entity
                    );
                }
                Vec3::ZERO
            }
        };
    }
}
