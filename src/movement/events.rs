//! Movement domain: messages emitted by locomotion systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::PlayerState;

/// Fired whenever a player's state controller switches state
#[derive(Debug, Clone, Copy)]
pub struct PlayerStateChanged {
    pub entity: Entity,
    pub from: PlayerState,
    pub to: PlayerState,
}

impl Message for PlayerStateChanged {}
