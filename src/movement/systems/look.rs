//! Movement domain: mouse-driven yaw of the orientation pivot.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{MovementTuning, Orientation};

pub(crate) fn orient_with_mouse(
    mouse_motion: Res<AccumulatedMouseMotion>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Orientation, &mut Transform)>,
) {
    let delta = mouse_motion.delta;
    if delta.x == 0.0 {
        return;
    }

    for (mut orientation, mut transform) in &mut query {
        orientation.yaw = (orientation.yaw - delta.x * tuning.look_sensitivity)
            .rem_euclid(std::f32::consts::TAU);
        transform.rotation = Quat::from_rotation_y(orientation.yaw);
    }
}
