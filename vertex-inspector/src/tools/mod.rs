pub mod hover;
pub mod ray;
pub mod rotation;

use bevy::prelude::*;

use hover::hover_markers;
use rotation::{spin_solid, sync_rotation_clock};

// Registers pointer picking and the pausable rotation of the scene.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (hover_markers, sync_rotation_clock, spin_solid));
    }
}
