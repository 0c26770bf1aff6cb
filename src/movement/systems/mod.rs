//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod look;
pub(crate) mod movement;
pub(crate) mod state;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{handle_movement_actions, read_input};
pub(crate) use look::orient_with_mouse;
pub(crate) use movement::{
    apply_drag, apply_jump, apply_movement_force, limit_horizontal_speed, update_jump_cooldown,
};
pub(crate) use state::update_player_state;
