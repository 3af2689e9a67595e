//! Vertex marker set: one interactive sphere per lattice vertex of the
//! current solid, grouped under a root entity so visibility and rotation
//! apply to the whole set at once.

use bevy::prelude::*;

use constants::interaction::{HIGHLIGHT_RADIUS_SCALE, MARKER_BASE_COLOUR};

#[derive(Component)]
pub struct MarkerRoot;

#[derive(Component, Default)]
pub struct VertexMarker {
    /// Set once the pointer has hovered this marker. Highlighting is sticky;
    /// nothing clears it until the set is regenerated.
    pub highlighted: bool,
}

/// Mesh handles shared by the current marker set. Both radii are built at
/// generation time so the hover swap never allocates, and both are released
/// when the set is regenerated.
#[derive(Resource)]
pub struct MarkerAssets {
    pub base_mesh: Handle<Mesh>,
    pub enlarged_mesh: Handle<Mesh>,
    pub radius: f32,
}

/// Spawn a marker set for the given vertex positions, in position order.
/// An empty position list produces an empty group, not an error.
///
/// Allocates two shared sphere meshes and one material per marker; the
/// caller is responsible for having released the previous set's assets.
pub fn spawn_marker_set(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    positions: &[Vec3],
    radius: f32,
    visible: bool,
    transform: Transform,
) -> Entity {
    let base_mesh = meshes.add(Sphere::new(radius));
    let enlarged_mesh = meshes.add(Sphere::new(radius * HIGHLIGHT_RADIUS_SCALE));

    commands.insert_resource(MarkerAssets {
        base_mesh: base_mesh.clone(),
        enlarged_mesh,
        radius,
    });

    let visibility = if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((MarkerRoot, transform, visibility))
        .with_children(|parent| {
            for position in positions {
                parent.spawn((
                    VertexMarker::default(),
                    Mesh3d(base_mesh.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: MARKER_BASE_COLOUR,
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_translation(*position),
                ));
            }
        })
        .id()
}
