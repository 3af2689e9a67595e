use bevy::prelude::*;

/// Default vertex marker sphere radius in world units
pub const DEFAULT_MARKER_RADIUS: f32 = 0.05;

/// Marker radius panel range and stepper increment
pub const MARKER_RADIUS_MIN: f32 = 0.01;
pub const MARKER_RADIUS_MAX: f32 = 0.50;
pub const MARKER_RADIUS_STEP: f32 = 0.01;

/// Radius multiplier applied to a marker while the pointer hovers it
pub const HIGHLIGHT_RADIUS_SCALE: f32 = 1.5;

/// Marker colours: red at rest, green under the pointer
pub const MARKER_BASE_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const MARKER_HIGHLIGHT_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);
