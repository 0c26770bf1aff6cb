//! Movement domain: player spawn.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, MovementState, MovementTuning, Orientation, OrientationPivot, Player,
    PlayerState, PlayerStateController,
};

const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 3.0, 0.0);

/// Spawn the player body, its orientation pivot and the follow camera.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = tuning.player_radius;
    // Cylinder section between the two hemispheres
    let segment = (tuning.player_height - 2.0 * radius).max(0.0);
    let eye_height = tuning.player_height * 0.4;

    let pivot = commands
        .spawn((
            Orientation::default(),
            Transform::from_xyz(0.0, eye_height, 0.0),
            Visibility::default(),
        ))
        .with_children(|pivot| {
            pivot.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 1.5, 6.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
            ));
        })
        .id();

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState {
                    jump_ready: tuning.jump_ready_on_spawn,
                    ..default()
                },
                PlayerStateController::new(PlayerState::Idle),
                OrientationPivot(pivot),
            ),
            // Rendering
            Mesh3d(meshes.add(Capsule3d::new(radius, segment))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.45, 0.2))),
            Transform::from_translation(SPAWN_POSITION),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(radius, segment),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                LinearDamping(tuning.ground_drag),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Default, GameLayer::Ground]),
            ),
        ))
        .add_child(pivot);

    info!(
        "Spawned player: height={}, radius={}, speed={}, jump_ready={}",
        tuning.player_height, radius, tuning.movement_speed, tuning.jump_ready_on_spawn
    );
}
