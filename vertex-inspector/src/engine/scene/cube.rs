//! The parametric solid and its regeneration policy.
//!
//! The cube mesh and the marker set are replaced, never mutated, whenever a
//! geometry parameter is committed from the panel. Every replaced mesh and
//! material asset is removed from its `Assets` storage in the same step, so
//! no GPU-resident resource outlives the geometry it belonged to.

use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;

use constants::interaction::{
    DEFAULT_MARKER_RADIUS, MARKER_RADIUS_MAX, MARKER_RADIUS_MIN, MARKER_RADIUS_STEP,
};
use constants::solid::{
    CUBE_COLOUR, CUBE_SIZE_MAX, CUBE_SIZE_MIN, DEFAULT_CUBE_SIZE, DEFAULT_SEGMENTS, SEGMENTS_MAX,
    SEGMENTS_MIN,
};

use crate::engine::mesh::box_lattice::{build_box_mesh, surface_lattice};
use crate::engine::scene::markers::{MarkerAssets, MarkerRoot, VertexMarker, spawn_marker_set};

#[derive(Component)]
pub struct SolidCube;

/// Geometry parameters, range-constrained by the panel steppers.
#[derive(Resource)]
pub struct SolidParams {
    pub size: u32,
    pub segments: u32,
    pub marker_radius: f32,
}

impl Default for SolidParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_CUBE_SIZE,
            segments: DEFAULT_SEGMENTS,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

impl SolidParams {
    pub fn size_world(&self) -> f32 {
        self.size as f32
    }

    /// Stepper mutations. Each returns whether the value actually moved,
    /// which is what decides whether a regeneration is committed.
    pub fn step_segments(&mut self, delta: i32) -> bool {
        let stepped = (self.segments as i32 + delta).clamp(SEGMENTS_MIN as i32, SEGMENTS_MAX as i32)
            as u32;
        let changed = stepped != self.segments;
        self.segments = stepped;
        changed
    }

    pub fn step_size(&mut self, delta: i32) -> bool {
        let stepped =
            (self.size as i32 + delta).clamp(CUBE_SIZE_MIN as i32, CUBE_SIZE_MAX as i32) as u32;
        let changed = stepped != self.size;
        self.size = stepped;
        changed
    }

    pub fn step_marker_radius(&mut self, delta: i32) -> bool {
        let stepped = (self.marker_radius + delta as f32 * MARKER_RADIUS_STEP)
            .clamp(MARKER_RADIUS_MIN, MARKER_RADIUS_MAX);
        let changed = (stepped - self.marker_radius).abs() > f32::EPSILON;
        self.marker_radius = stepped;
        changed
    }
}

/// Presentation toggles driven by the panel.
#[derive(Resource)]
pub struct ViewFlags {
    pub cube_visible: bool,
    pub wireframe: bool,
    pub markers_visible: bool,
    pub rotating: bool,
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self {
            cube_visible: false,
            wireframe: true,
            markers_visible: true,
            rotating: true,
        }
    }
}

/// Written once per committed geometry change; one event is one rebuild.
#[derive(Event)]
pub struct RegenerateSolid;

pub fn spawn_solid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<SolidParams>,
    flags: Res<ViewFlags>,
) {
    let mesh = meshes.add(build_box_mesh(params.size_world(), params.segments));
    let material = materials.add(StandardMaterial {
        base_color: CUBE_COLOUR,
        unlit: true,
        ..default()
    });

    let cube = commands
        .spawn((
            SolidCube,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::default(),
            cube_visibility(&flags),
        ))
        .id();
    if flags.wireframe {
        commands
            .entity(cube)
            .insert((Wireframe, WireframeColor { color: CUBE_COLOUR }));
    }

    let positions = surface_lattice(params.size_world(), params.segments);
    spawn_marker_set(
        &mut commands,
        &mut meshes,
        &mut materials,
        &positions,
        params.marker_radius,
        flags.markers_visible,
        Transform::default(),
    );

    info!(
        "spawned solid: size {} segments {} ({} vertex markers)",
        params.size,
        params.segments,
        positions.len()
    );
}

/// The regeneration policy: swap the cube mesh and rebuild the marker set as
/// one step within a single frame, releasing every replaced asset. The new
/// set inherits the solid's current rotation and the current visibility flag.
pub fn regenerate_solid(
    mut events: EventReader<RegenerateSolid>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<SolidParams>,
    flags: Res<ViewFlags>,
    marker_assets: Option<Res<MarkerAssets>>,
    mut cube_query: Query<(&mut Mesh3d, &Transform), With<SolidCube>>,
    root_query: Query<Entity, With<MarkerRoot>>,
    marker_query: Query<&MeshMaterial3d<StandardMaterial>, With<VertexMarker>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let Ok((mut cube_mesh, cube_transform)) = cube_query.single_mut() else {
        return;
    };
    let carried = *cube_transform;

    meshes.remove(&cube_mesh.0);
    cube_mesh.0 = meshes.add(build_box_mesh(params.size_world(), params.segments));

    if let Some(assets) = marker_assets {
        meshes.remove(&assets.base_mesh);
        meshes.remove(&assets.enlarged_mesh);
    }
    for material in &marker_query {
        materials.remove(&material.0);
    }
    for root in &root_query {
        commands.entity(root).despawn();
    }

    let positions = surface_lattice(params.size_world(), params.segments);
    spawn_marker_set(
        &mut commands,
        &mut meshes,
        &mut materials,
        &positions,
        params.marker_radius,
        flags.markers_visible,
        carried,
    );

    info!(
        "regenerated solid: size {} segments {} ({} vertex markers)",
        params.size,
        params.segments,
        positions.len()
    );
}

/// Push the panel toggles onto the scene entities.
pub fn apply_view_flags(
    flags: Res<ViewFlags>,
    mut commands: Commands,
    mut cube_query: Query<(Entity, &mut Visibility), With<SolidCube>>,
    mut root_query: Query<&mut Visibility, (With<MarkerRoot>, Without<SolidCube>)>,
) {
    if !flags.is_changed() {
        return;
    }

    if let Ok((cube, mut visibility)) = cube_query.single_mut() {
        *visibility = cube_visibility(&flags);
        if flags.wireframe {
            commands
                .entity(cube)
                .insert((Wireframe, WireframeColor { color: CUBE_COLOUR }));
        } else {
            commands.entity(cube).remove::<(Wireframe, WireframeColor)>();
        }
    }

    if let Ok(mut visibility) = root_query.single_mut() {
        *visibility = if flags.markers_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn cube_visibility(flags: &ViewFlags) -> Visibility {
    if flags.cube_visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.init_asset::<Mesh>();
        app.init_asset::<StandardMaterial>();
        app.init_resource::<SolidParams>();
        app.init_resource::<ViewFlags>();
        app.add_event::<RegenerateSolid>();
        app.add_systems(Startup, spawn_solid);
        app.add_systems(Update, regenerate_solid);
        app
    }

    fn marker_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&VertexMarker>().iter(world).count()
    }

    fn sorted_marker_positions(app: &mut App) -> Vec<Vec3> {
        let world = app.world_mut();
        let mut positions: Vec<Vec3> = world
            .query::<(&VertexMarker, &Transform)>()
            .iter(world)
            .map(|(_, transform)| transform.translation)
            .collect();
        positions.sort_by(|a, b| {
            (a.x, a.y, a.z)
                .partial_cmp(&(b.x, b.y, b.z))
                .expect("finite positions")
        });
        positions
    }

    fn regenerate_with(app: &mut App, size: u32, segments: u32) {
        {
            let mut params = app.world_mut().resource_mut::<SolidParams>();
            params.size = size;
            params.segments = segments;
        }
        app.world_mut().send_event(RegenerateSolid);
        app.update();
    }

    #[test]
    fn marker_count_tracks_the_lattice() {
        let mut app = test_app();
        app.update();

        // defaults: segments 4 -> 6*16+2
        assert_eq!(marker_count(&mut app), 98);

        for (size, segments) in [(2, 1), (15, 20), (6, 7)] {
            regenerate_with(&mut app, size, segments);
            assert_eq!(
                marker_count(&mut app),
                (6 * segments * segments + 2) as usize,
                "segments {segments}"
            );
        }
    }

    #[test]
    fn plain_box_yields_eight_corner_markers() {
        let mut app = test_app();
        app.update();
        regenerate_with(&mut app, 6, 1);

        let positions = sorted_marker_positions(&mut app);
        assert_eq!(positions.len(), 8);
        for position in &positions {
            assert!((position.x.abs() - 3.0).abs() < 1e-6);
            assert!((position.y.abs() - 3.0).abs() < 1e-6);
            assert!((position.z.abs() - 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn regeneration_is_idempotent_for_identical_params() {
        let mut app = test_app();
        app.update();

        regenerate_with(&mut app, 8, 3);
        let first = sorted_marker_positions(&mut app);

        regenerate_with(&mut app, 8, 3);
        let second = sorted_marker_positions(&mut app);

        assert_eq!(first, second);
    }

    #[test]
    fn regeneration_releases_the_replaced_assets() {
        let mut app = test_app();
        app.update();

        let (old_base, old_enlarged) = {
            let assets = app.world().resource::<MarkerAssets>();
            (assets.base_mesh.clone(), assets.enlarged_mesh.clone())
        };
        let old_cube_mesh = {
            let world = app.world_mut();
            let mesh = world
                .query_filtered::<&Mesh3d, With<SolidCube>>()
                .iter(world)
                .next()
                .expect("cube exists");
            mesh.0.clone()
        };

        regenerate_with(&mut app, 6, 2);

        let meshes = app.world().resource::<Assets<Mesh>>();
        assert!(meshes.get(&old_base).is_none());
        assert!(meshes.get(&old_enlarged).is_none());
        assert!(meshes.get(&old_cube_mesh).is_none());

        // exactly one marker root remains
        let world = app.world_mut();
        assert_eq!(world.query::<&MarkerRoot>().iter(world).count(), 1);
    }

    #[test]
    fn steppers_clamp_to_the_panel_ranges() {
        let mut params = SolidParams::default();

        params.segments = SEGMENTS_MAX;
        assert!(!params.step_segments(1));
        assert_eq!(params.segments, SEGMENTS_MAX);

        params.segments = SEGMENTS_MIN;
        assert!(!params.step_segments(-1));
        assert_eq!(params.segments, SEGMENTS_MIN);

        params.size = CUBE_SIZE_MIN;
        assert!(!params.step_size(-1));
        assert!(params.step_size(1));
        assert_eq!(params.size, CUBE_SIZE_MIN + 1);

        params.marker_radius = MARKER_RADIUS_MIN;
        assert!(!params.step_marker_radius(-1));
        assert!(params.step_marker_radius(1));
    }
}
