//! Movement domain: player state classification.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    MovementState, Player, PlayerState, PlayerStateChanged, PlayerStateController,
};

/// Pick the next state. Rules are checked in order and the first match wins;
/// when none match the current state is kept.
pub(crate) fn classify_state(
    moving: bool,
    on_ground: bool,
    sliding: bool,
    jump_ready: bool,
    current: PlayerState,
) -> PlayerState {
    match (moving, on_ground, sliding) {
        (false, true, false) => PlayerState::Idle,
        (true, true, false) => PlayerState::Move,
        (true, true, true) => PlayerState::Slide,
        (false, true, true) => PlayerState::SlideIdle,
        (_, false, _) if !jump_ready => PlayerState::Jump,
        _ => current,
    }
}

pub(crate) fn update_player_state(
    mut state_changes: MessageWriter<PlayerStateChanged>,
    mut query: Query<(Entity, &MovementState, &mut PlayerStateController), With<Player>>,
) {
    for (entity, state, mut controller) in &mut query {
        let next = classify_state(
            state.move_direction != Vec3::ZERO,
            state.on_ground,
            state.sliding,
            state.jump_ready,
            controller.current(),
        );

        // Avoid tripping change detection when nothing changed
        if next == controller.current() {
            continue;
        }

        if let Some(previous) = controller.change(next) {
            debug!("Player state: {:?} -> {:?}", previous, next);
            state_changes.write(PlayerStateChanged {
                entity,
                from: previous,
                to: next,
            });
        }
    }
}
