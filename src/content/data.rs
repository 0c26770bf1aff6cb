//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization only; gameplay reads the resources built from them.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Player tuning (player_tuning.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub player: TuningDef,
}

/// Overrides for [`MovementTuning`]. Any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningDef {
    pub movement_speed: f32,
    pub jump_force: f32,
    pub jump_cooldown: f32,
    pub air_multiplier: f32,
    pub air_drag: f32,
    pub jump_ready_on_spawn: bool,
    pub slide_multiplier: f32,
    pub slide_drag: f32,
    pub player_height: f32,
    pub player_radius: f32,
    pub ground_drag: f32,
    pub look_sensitivity: f32,
}

impl Default for TuningDef {
    fn default() -> Self {
        MovementTuning::default().into()
    }
}

impl From<MovementTuning> for TuningDef {
    fn from(tuning: MovementTuning) -> Self {
        Self {
            movement_speed: tuning.movement_speed,
            jump_force: tuning.jump_force,
            jump_cooldown: tuning.jump_cooldown,
            air_multiplier: tuning.air_multiplier,
            air_drag: tuning.air_drag,
            jump_ready_on_spawn: tuning.jump_ready_on_spawn,
            slide_multiplier: tuning.slide_multiplier,
            slide_drag: tuning.slide_drag,
            player_height: tuning.player_height,
            player_radius: tuning.player_radius,
            ground_drag: tuning.ground_drag,
            look_sensitivity: tuning.look_sensitivity,
        }
    }
}

impl From<TuningDef> for MovementTuning {
    fn from(def: TuningDef) -> Self {
        Self {
            movement_speed: def.movement_speed,
            jump_force: def.jump_force,
            jump_cooldown: def.jump_cooldown,
            air_multiplier: def.air_multiplier,
            air_drag: def.air_drag,
            jump_ready_on_spawn: def.jump_ready_on_spawn,
            slide_multiplier: def.slide_multiplier,
            slide_drag: def.slide_drag,
            player_height: def.player_height,
            player_radius: def.player_radius,
            ground_drag: def.ground_drag,
            look_sensitivity: def.look_sensitivity,
        }
    }
}
