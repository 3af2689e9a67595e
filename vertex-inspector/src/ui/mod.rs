//! Debug panel: boolean toggles and -/+ steppers over the scene parameters.
//!
//! The panel never touches scene entities directly. Toggles flip `ViewFlags`
//! fields, steppers mutate `SolidParams` and commit a `RegenerateSolid`
//! event; the scene systems react through change detection and events.

pub mod interactions;
pub mod panel;
pub mod state;

use bevy::prelude::*;

pub use state::DebugPanelState;

use interactions::{
    apply_panel_visibility, step_button_interaction, toggle_button_interaction,
    toggle_panel_on_key,
};
use panel::{reflect_param_labels, reflect_toggle_labels, spawn_debug_panel};

// Registers the debug panel, its resources, and its systems.
pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugPanelState>()
            .add_systems(Startup, spawn_debug_panel)
            .add_systems(
                Update,
                (
                    toggle_panel_on_key,
                    apply_panel_visibility,
                    toggle_button_interaction,
                    step_button_interaction,
                    reflect_toggle_labels,
                    reflect_param_labels,
                ),
            );
    }
}
