pub mod cube;
pub mod markers;

use bevy::prelude::*;

pub use cube::{RegenerateSolid, SolidCube, SolidParams, ViewFlags};
pub use markers::{MarkerAssets, MarkerRoot, VertexMarker};

use cube::{apply_view_flags, regenerate_solid, spawn_solid};

// Registers the parametric cube, its vertex marker set, and the
// regeneration machinery.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolidParams>()
            .init_resource::<ViewFlags>()
            .add_event::<RegenerateSolid>()
            .add_systems(Startup, spawn_solid)
            .add_systems(Update, (regenerate_solid, apply_view_flags).chain());
    }
}
