use bevy::prelude::*;

/// Debug panel width in logical pixels
pub const PANEL_WIDTH: f32 = 340.0;

/// Key that shows/hides the debug panel
pub const PANEL_TOGGLE_KEY: KeyCode = KeyCode::KeyH;

/// Panel palette
pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const PANEL_HEADER: Color = Color::srgb(0.14, 0.16, 0.20);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_ACTIVE: Color = Color::srgb(0.16, 0.40, 0.22);
pub const BUTTON_BORDER: Color = Color::srgba(0.0, 0.0, 0.0, 0.25);
