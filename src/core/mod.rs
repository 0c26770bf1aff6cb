//! Core domain: scene-wide setup that is not tied to the player.

use bevy::prelude::*;

mod systems;

use systems::setup_lighting;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.52, 0.68, 0.86)))
            .add_systems(Startup, setup_lighting);
    }
}
