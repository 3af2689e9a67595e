use bevy::prelude::*;

/// Default cube edge length in world units
pub const DEFAULT_CUBE_SIZE: u32 = 6;

/// Cube size panel range
pub const CUBE_SIZE_MIN: u32 = 2;
pub const CUBE_SIZE_MAX: u32 = 15;

/// Default subdivisions per cube edge
pub const DEFAULT_SEGMENTS: u32 = 4;

/// Segmentation panel range
pub const SEGMENTS_MIN: u32 = 1;
pub const SEGMENTS_MAX: u32 = 20;

/// Fill colour for the cube and its wireframe overlay
pub const CUBE_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Spin rates in radians per second. The X axis runs at half the Y rate.
pub const SPIN_SPEED_X: f32 = 0.075;
pub const SPIN_SPEED_Y: f32 = 0.15;
