//! Dev overlay for movement tuning (F1).

use bevy::prelude::*;

mod state;
mod systems;
mod ui;

use state::DebugState;
use systems::{record_state_changes, toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_info, record_state_changes))
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
