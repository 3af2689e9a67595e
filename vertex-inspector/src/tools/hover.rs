//! Pointer picking over the marker set.
//!
//! Every pointer move casts a ray through the cursor and tests it against
//! each marker's world-space sphere. Every intersected marker is mutated,
//! not just the nearest hit, and the highlight is sticky: nothing reverts a
//! marker when the pointer leaves it. Both are deliberate carry-overs of
//! the demo's behaviour.

use bevy::prelude::*;
use bevy::window::CursorMoved;

use constants::interaction::MARKER_HIGHLIGHT_COLOUR;

use crate::engine::scene::markers::{MarkerAssets, VertexMarker};
use crate::tools::ray::ray_sphere_hit_t;

pub fn hover_markers(
    mut cursor_moved: EventReader<CursorMoved>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut markers: Query<(
        &GlobalTransform,
        &mut VertexMarker,
        &mut Mesh3d,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    marker_assets: Option<Res<MarkerAssets>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(cursor_position) = cursor_moved.read().last().map(|ev| ev.position) else {
        return;
    };
    let Some(assets) = marker_assets else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
        return;
    };

    highlight_intersected(
        ray.origin,
        ray.direction.as_vec3(),
        &assets,
        &mut materials,
        markers.iter_mut().map(|(transform, marker, mesh, material)| {
            (
                transform.translation(),
                marker.into_inner(),
                mesh.into_inner(),
                material,
            )
        }),
    );
}

/// Apply the hover mutation to every marker the ray passes through: swap to
/// the pre-built enlarged mesh and recolour the marker's material. Already
/// highlighted markers are left as they are. Returns the number of hits.
fn highlight_intersected<'a>(
    ray_origin: Vec3,
    ray_direction: Vec3,
    assets: &MarkerAssets,
    materials: &mut Assets<StandardMaterial>,
    markers: impl Iterator<
        Item = (
            Vec3,
            &'a mut VertexMarker,
            &'a mut Mesh3d,
            &'a MeshMaterial3d<StandardMaterial>,
        ),
    >,
) -> usize {
    let mut hits = 0;
    for (center, marker, mesh, material) in markers {
        if ray_sphere_hit_t(ray_origin, ray_direction, center, assets.radius).is_none() {
            continue;
        }
        hits += 1;

        if marker.highlighted {
            continue;
        }
        marker.highlighted = true;
        mesh.0 = assets.enlarged_mesh.clone();
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = MARKER_HIGHLIGHT_COLOUR;
        }
    }
    hits
}
