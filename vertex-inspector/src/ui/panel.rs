use bevy::prelude::*;

use constants::panel::{BUTTON_ACTIVE, BUTTON_BORDER, BUTTON_IDLE, PANEL_BACKGROUND, PANEL_HEADER};

use super::state::*;
use crate::engine::scene::{SolidParams, ViewFlags};

// Spawns the debug panel: a header plus one row per control.
pub fn spawn_debug_panel(
    mut commands: Commands,
    state: Res<DebugPanelState>,
    flags: Res<ViewFlags>,
    params: Res<SolidParams>,
) {
    let display = if state.hidden {
        Display::None
    } else {
        Display::Flex
    };

    commands
        .spawn((
            PanelRoot,
            Name::new("DebugPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Px(state.width),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                display,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Header"),
                    BackgroundColor(PANEL_HEADER),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(8.0)),
                        display: Display::Flex,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        Text::new("Demo"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });

            spawn_toggle_row(parent, PanelToggle::CubeVisible, flags.cube_visible);
            spawn_toggle_row(parent, PanelToggle::Wireframe, flags.wireframe);
            spawn_step_row(parent, PanelParam::Segments, params.segments.to_string());
            spawn_step_row(parent, PanelParam::Size, params.size.to_string());
            spawn_toggle_row(parent, PanelToggle::Rotation, flags.rotating);
            spawn_toggle_row(parent, PanelToggle::Markers, flags.markers_visible);
            spawn_step_row(
                parent,
                PanelParam::MarkerRadius,
                format!("{:.2}", params.marker_radius),
            );
        });
}

fn spawn_toggle_row(parent: &mut ChildSpawnerCommands, toggle: PanelToggle, initial: bool) {
    spawn_row(parent, toggle.label(), |row| {
        row.spawn((
            ToggleButton(toggle),
            Button,
            BackgroundColor(if initial { BUTTON_ACTIVE } else { BUTTON_IDLE }),
            BorderColor(BUTTON_BORDER),
            Node {
                width: Val::Px(56.0),
                height: Val::Px(26.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|button| {
            button.spawn((
                ToggleStateLabel(toggle),
                Text::new(if initial { "On" } else { "Off" }),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));
        });
    });
}

fn spawn_step_row(parent: &mut ChildSpawnerCommands, param: PanelParam, initial: String) {
    spawn_row(parent, param.label(), |row| {
        spawn_step_button(row, param, -1, "-");
        row.spawn((
            ParamValueLabel(param),
            Text::new(initial),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
            Node {
                width: Val::Px(44.0),
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ));
        spawn_step_button(row, param, 1, "+");
    });
}

fn spawn_step_button(row: &mut ChildSpawnerCommands, param: PanelParam, delta: i32, label: &str) {
    row.spawn((
        StepButton { param, delta },
        Button,
        BackgroundColor(BUTTON_IDLE),
        BorderColor(BUTTON_BORDER),
        Node {
            width: Val::Px(26.0),
            height: Val::Px(26.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|button| {
        button.spawn((
            Text::new(label),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

fn spawn_row(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    controls: impl FnOnce(&mut ChildSpawnerCommands),
) {
    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.87, 0.90)),
            ));
            row.spawn(Node {
                display: Display::Flex,
                align_items: AlignItems::Center,
                column_gap: Val::Px(4.0),
                ..default()
            })
            .with_children(controls);
        });
}

// Keep the value labels in sync with the resources they mirror.
pub fn reflect_param_labels(
    params: Res<SolidParams>,
    mut labels: Query<(&ParamValueLabel, &mut Text)>,
) {
    if !params.is_changed() {
        return;
    }
    for (label, mut text) in &mut labels {
        let value = match label.0 {
            PanelParam::Segments => params.segments.to_string(),
            PanelParam::Size => params.size.to_string(),
            PanelParam::MarkerRadius => format!("{:.2}", params.marker_radius),
        };
        if text.0 != value {
            *text = Text::new(value);
        }
    }
}

pub fn reflect_toggle_labels(
    flags: Res<ViewFlags>,
    mut labels: Query<(&ToggleStateLabel, &mut Text)>,
) {
    if !flags.is_changed() {
        return;
    }
    for (label, mut text) in &mut labels {
        let on = match label.0 {
            PanelToggle::CubeVisible => flags.cube_visible,
            PanelToggle::Wireframe => flags.wireframe,
            PanelToggle::Markers => flags.markers_visible,
            PanelToggle::Rotation => flags.rotating,
        };
        let value = if on { "On" } else { "Off" };
        if text.0 != value {
            *text = Text::new(value);
        }
    }
}
