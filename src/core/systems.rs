//! Core domain: lighting.

use bevy::prelude::*;

pub(crate) fn setup_lighting(mut commands: Commands) {
    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            std::f32::consts::FRAC_PI_6,
            -std::f32::consts::FRAC_PI_4,
            0.0,
        )),
    ));

    // Fill
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 80.0,
            ..default()
        },
        Transform::from_xyz(0.0, 20.0, 0.0),
    ));
}
