//! Content domain: data-driven tuning loaded from RON files at startup.

use std::path::Path;

use bevy::prelude::*;

mod data;
mod loader;
mod validation;

use loader::load_tuning;
use validation::validate_tuning;

use crate::movement::MovementTuning;

/// Where the player tuning override lives, relative to the working directory.
pub const PLAYER_TUNING_PATH: &str = "assets/data/player_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Must land before the player spawns in Startup
        app.add_systems(PreStartup, load_player_tuning);
    }
}

fn load_player_tuning(mut tuning: ResMut<MovementTuning>) {
    let path = Path::new(PLAYER_TUNING_PATH);
    if !path.exists() {
        info!("No tuning file at {}, using built-in defaults", path.display());
        return;
    }

    match load_tuning(path) {
        Ok(loaded) => {
            for warning in validate_tuning(&loaded) {
                warn!("Tuning: {}", warning);
            }
            *tuning = loaded;
            info!("Loaded player tuning from {}", path.display());
        }
        Err(e) => {
            warn!("{}; keeping default tuning", e);
        }
    }
}
