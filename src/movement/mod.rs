//! Movement domain: player input, state machine, forces and ground contact.
//!
//! Per frame (`Update`):
//! ground probe -> key sampling -> mouse look -> jump cooldown -> key actions -> state
//! -> jump impulse -> drag -> speed cap.
//! The movement force is applied in `FixedUpdate`, ahead of the avian physics step.

use bevy::prelude::*;

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod systems;


pub use components::*;
pub use events::*;
pub use resources::*;

use bootstrap::spawn_player;
use dev::spawn_test_arena;
use systems::{
    apply_drag, apply_jump, apply_movement_force, detect_ground, handle_movement_actions,
    limit_horizontal_speed, orient_with_mouse, read_input, update_jump_cooldown,
    update_player_state,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementBindings>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerStateChanged>()
            .add_systems(Startup, (spawn_test_arena, spawn_player))
            .add_systems(
                Update,
                (
                    detect_ground,
                    read_input,
                    orient_with_mouse,
                    update_jump_cooldown,
                    handle_movement_actions,
                    update_player_state,
                    apply_jump,
                    apply_drag,
                    limit_horizontal_speed,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, apply_movement_force);
    }
}
