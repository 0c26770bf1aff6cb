//! Movement domain: play-test arena.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

struct Block {
    size: Vec3,
    position: Vec3,
    /// Rotation around the X axis, radians
    tilt: f32,
    color: Color,
}

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ramp_color = Color::srgb(0.35, 0.35, 0.45);

    let blocks = [
        // Floor
        Block {
            size: Vec3::new(80.0, 1.0, 80.0),
            position: Vec3::new(0.0, -0.5, 0.0),
            tilt: 0.0,
            color: floor_color,
        },
        // Low platform
        Block {
            size: Vec3::new(6.0, 1.0, 6.0),
            position: Vec3::new(-8.0, 0.5, -10.0),
            tilt: 0.0,
            color: platform_color,
        },
        // Higher platform
        Block {
            size: Vec3::new(6.0, 1.0, 6.0),
            position: Vec3::new(0.0, 2.0, -16.0),
            tilt: 0.0,
            color: platform_color,
        },
        // Long slide ramp
        Block {
            size: Vec3::new(6.0, 0.5, 20.0),
            position: Vec3::new(12.0, 2.5, -8.0),
            tilt: 0.3,
            color: ramp_color,
        },
    ];

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for block in blocks {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::from_size(block.size))),
            MeshMaterial3d(materials.add(block.color)),
            Transform::from_translation(block.position)
                .with_rotation(Quat::from_rotation_x(block.tilt)),
            RigidBody::Static,
            Collider::cuboid(block.size.x, block.size.y, block.size.z),
            ground_layers,
        ));
    }
}
