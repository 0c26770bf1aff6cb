//! Debug domain: overlay toggling and refresh.

use std::fmt::Write;

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{MovementState, Player, PlayerStateChanged, PlayerStateController};

pub(crate) fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn record_state_changes(
    mut events: MessageReader<PlayerStateChanged>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in events.read() {
        debug_state.record_transition(event.from, event.to);
    }
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<
        (
            &MovementState,
            &PlayerStateController,
            &LinearVelocity,
            &LinearDamping,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let (Some((state, controller, velocity, damping)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    else {
        return;
    };

    let horizontal_speed = Vec2::new(velocity.x, velocity.z).length();
    let mut info = format!(
        "State: {:?}\nGrounded: {}\nSliding: {}\nJump ready: {}\nSpeed: {:.2} (y {:.2})\nDrag: {:.2}",
        controller.current(),
        state.on_ground,
        state.sliding,
        state.jump_ready,
        horizontal_speed,
        velocity.y,
        damping.0,
    );

    if !debug_state.recent_transitions.is_empty() {
        info.push_str("\n--");
        for (from, to) in &debug_state.recent_transitions {
            let _ = write!(info, "\n{:?} -> {:?}", from, to);
        }
    }

    **text = info;
}
