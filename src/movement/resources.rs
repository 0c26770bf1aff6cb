//! Movement domain: tuning, bindings and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// Base movement force, also the horizontal speed cap
    pub movement_speed: f32,
    pub jump_force: f32,
    /// Seconds before another jump is allowed
    pub jump_cooldown: f32,
    pub air_multiplier: f32,
    pub air_drag: f32,
    pub jump_ready_on_spawn: bool,
    pub slide_multiplier: f32,
    pub slide_drag: f32,
    /// Full height of the player capsule; sizes the collider and the ground ray
    pub player_height: f32,
    pub player_radius: f32,
    pub ground_drag: f32,
    /// Radians of yaw per pixel of mouse motion
    pub look_sensitivity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_speed: 12.0,
            jump_force: 7.0,
            jump_cooldown: 0.25,
            air_multiplier: 0.4,
            air_drag: 0.2,
            jump_ready_on_spawn: true,
            slide_multiplier: 1.6,
            slide_drag: 0.6,
            player_height: 2.0,
            player_radius: 0.5,
            ground_drag: 4.0,
            look_sensitivity: 0.003,
        }
    }
}

impl MovementTuning {
    /// Extra reach below the feet so small bumps still count as ground.
    pub const GROUND_PROBE_MARGIN: f32 = 0.2;

    /// Length of the downward ground ray, measured from the body's center.
    pub fn ground_probe_distance(&self) -> f32 {
        self.player_height * 0.5 + Self::GROUND_PROBE_MARGIN
    }
}

/// Key bindings for the edge-triggered movement actions.
#[derive(Resource, Debug, Clone)]
pub struct MovementBindings {
    pub slide: KeyCode,
    /// Cancels sliding and returns to regular movement
    pub movement: KeyCode,
    pub jump: KeyCode,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            slide: KeyCode::ControlLeft,
            movement: KeyCode::ShiftLeft,
            jump: KeyCode::Space,
        }
    }
}

/// Raw input sampled this frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = horizontal (right positive), y = vertical (forward positive); each in {-1, 0, 1}
    pub axis: Vec2,
    pub slide_just_pressed: bool,
    pub movement_just_pressed: bool,
    pub jump_held: bool,
}
