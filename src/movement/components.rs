//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces; the only layer the ground probe hits
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Yaw pivot whose forward/right axes steer the player.
///
/// Spawned as a child of the player. The player body has its rotation locked,
/// so the pivot's local rotation is also its world rotation.
#[derive(Component, Debug, Default)]
pub struct Orientation {
    pub yaw: f32,
}

/// Link from the player to its orientation pivot entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrientationPivot(pub Entity);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Move,
    Slide,
    SlideIdle,
    Jump,
}

/// Holds the player's current [`PlayerState`].
#[derive(Component, Debug, Default)]
pub struct PlayerStateController {
    current: PlayerState,
}

impl PlayerStateController {
    pub fn new(state: PlayerState) -> Self {
        Self { current: state }
    }

    pub fn current(&self) -> PlayerState {
        self.current
    }

    /// Switch to `next`, returning the previous state when it actually changed.
    pub fn change(&mut self, next: PlayerState) -> Option<PlayerState> {
        if next == self.current {
            return None;
        }
        let previous = self.current;
        self.current = next;
        Some(previous)
    }
}

/// Per-player locomotion state sampled and updated every frame.
#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    pub sliding: bool,
    pub jump_ready: bool,
    /// Seconds until `jump_ready` flips back on; only meaningful while not ready.
    pub jump_cooldown_timer: f32,
    /// Set by input sampling, consumed by `apply_jump`.
    pub jump_requested: bool,
    /// Normalized world-space movement direction, zero when there is no input.
    pub move_direction: Vec3,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            sliding: false,
            jump_ready: true,
            jump_cooldown_timer: 0.0,
            jump_requested: false,
            move_direction: Vec3::ZERO,
        }
    }
}
