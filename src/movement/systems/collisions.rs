//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &mut MovementState), With<Player>>,
) {
    let ray_distance = tuning.ground_probe_distance();

    for (entity, transform, mut state) in &mut query {
        // Only ground-tagged geometry counts, never the player's own collider
        let ground_filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            ray_distance,
            true,
            &ground_filter,
        );

        let was_on_ground = state.on_ground;
        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed: jump_ready={}", state.jump_ready);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: jump_ready={}", state.jump_ready);
        }
    }
}
