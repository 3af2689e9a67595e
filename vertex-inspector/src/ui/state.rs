use bevy::prelude::*;

use constants::panel::PANEL_WIDTH;

// Resources
#[derive(Resource)]
pub struct DebugPanelState {
    pub hidden: bool,
    pub width: f32,
}

impl Default for DebugPanelState {
    fn default() -> Self {
        Self {
            hidden: false,
            width: PANEL_WIDTH,
        }
    }
}

/// The panel's boolean controls, each mapped to one `ViewFlags` field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PanelToggle {
    CubeVisible,
    Wireframe,
    Markers,
    Rotation,
}

impl PanelToggle {
    pub fn label(self) -> &'static str {
        match self {
            PanelToggle::CubeVisible => "Cube Visible",
            PanelToggle::Wireframe => "Wireframe",
            PanelToggle::Markers => "Display Vertices",
            PanelToggle::Rotation => "Rotation",
        }
    }
}

/// The panel's numeric controls, stepped by the -/+ buttons.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PanelParam {
    Segments,
    Size,
    MarkerRadius,
}

impl PanelParam {
    pub fn label(self) -> &'static str {
        match self {
            PanelParam::Segments => "Segmentation",
            PanelParam::Size => "Cube Size",
            PanelParam::MarkerRadius => "Marker Radius",
        }
    }
}

// Components
#[derive(Component)]
pub struct PanelRoot;

#[derive(Component, Clone, Copy)]
pub struct ToggleButton(pub PanelToggle);

#[derive(Component)]
pub struct ToggleStateLabel(pub PanelToggle);

#[derive(Component, Clone, Copy)]
pub struct StepButton {
    pub param: PanelParam,
    pub delta: i32,
}

#[derive(Component)]
pub struct ParamValueLabel(pub PanelParam);
