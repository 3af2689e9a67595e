use bevy::prelude::*;

use constants::panel::{BUTTON_ACTIVE, BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED, PANEL_TOGGLE_KEY};

use super::state::*;
use crate::engine::scene::{RegenerateSolid, SolidParams, ViewFlags};

// The panel toggle key shows/hides the whole panel; no other key is bound.
pub fn toggle_panel_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugPanelState>,
) {
    if keyboard.just_pressed(PANEL_TOGGLE_KEY) {
        state.hidden = !state.hidden;
    }
}

pub fn apply_panel_visibility(
    state: Res<DebugPanelState>,
    mut roots: Query<&mut Node, With<PanelRoot>>,
) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut node) = roots.single_mut() {
        node.display = if state.hidden {
            Display::None
        } else {
            Display::Flex
        };
    }
}

// A toggle press flips its flag; the scene systems pick the change up
// through resource change detection.
pub fn toggle_button_interaction(
    mut buttons: Query<
        (&Interaction, &ToggleButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut flags: ResMut<ViewFlags>,
) {
    for (interaction, toggle, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                let flag = flag_mut(&mut flags, toggle.0);
                *flag = !*flag;
                *background = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => {
                let active = flag_value(&flags, toggle.0);
                *background = BackgroundColor(if active { BUTTON_ACTIVE } else { BUTTON_IDLE });
            }
        }
    }
}

// A stepper press is the commit point for geometry parameters: exactly one
// regeneration event per press that actually moved a value, none while the
// value is pinned at a range end.
pub fn step_button_interaction(
    mut buttons: Query<
        (&Interaction, &StepButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut params: ResMut<SolidParams>,
    mut regenerate: EventWriter<RegenerateSolid>,
) {
    for (interaction, step, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                let committed = match step.param {
                    PanelParam::Segments => params.step_segments(step.delta),
                    PanelParam::Size => params.step_size(step.delta),
                    PanelParam::MarkerRadius => params.step_marker_radius(step.delta),
                };
                if committed {
                    regenerate.write(RegenerateSolid);
                }
                *background = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *background = BackgroundColor(BUTTON_IDLE),
        }
    }
}

fn flag_mut(flags: &mut ViewFlags, toggle: PanelToggle) -> &mut bool {
    match toggle {
        PanelToggle::CubeVisible => &mut flags.cube_visible,
        PanelToggle::Wireframe => &mut flags.wireframe,
        PanelToggle::Markers => &mut flags.markers_visible,
        PanelToggle::Rotation => &mut flags.rotating,
    }
}

fn flag_value(flags: &ViewFlags, toggle: PanelToggle) -> bool {
    match toggle {
        PanelToggle::CubeVisible => flags.cube_visible,
        PanelToggle::Wireframe => flags.wireframe,
        PanelToggle::Markers => flags.markers_visible,
        PanelToggle::Rotation => flags.rotating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<SolidParams>();
        app.init_resource::<ViewFlags>();
        app.add_event::<RegenerateSolid>();
        app.add_systems(Update, (toggle_button_interaction, step_button_interaction));
        app
    }

    fn regenerate_events(app: &mut App) -> usize {
        let events = app.world().resource::<Events<RegenerateSolid>>();
        events.iter_current_update_events().count()
    }

    fn press(app: &mut App, bundle: impl Bundle) {
        app.world_mut().spawn((
            bundle,
            Button,
            Interaction::Pressed,
            BackgroundColor(BUTTON_IDLE),
        ));
        app.update();
    }

    #[test]
    fn a_step_press_commits_one_regeneration() {
        let mut app = test_app();
        press(
            &mut app,
            StepButton {
                param: PanelParam::Segments,
                delta: 1,
            },
        );

        assert_eq!(app.world().resource::<SolidParams>().segments, 5);
        assert_eq!(regenerate_events(&mut app), 1);
    }

    #[test]
    fn a_pinned_value_commits_nothing() {
        let mut app = test_app();
        app.world_mut().resource_mut::<SolidParams>().segments = 1;
        press(
            &mut app,
            StepButton {
                param: PanelParam::Segments,
                delta: -1,
            },
        );

        assert_eq!(app.world().resource::<SolidParams>().segments, 1);
        assert_eq!(regenerate_events(&mut app), 0);
    }

    #[test]
    fn a_toggle_press_flips_its_flag() {
        let mut app = test_app();
        assert!(!app.world().resource::<ViewFlags>().cube_visible);

        press(&mut app, ToggleButton(PanelToggle::CubeVisible));
        assert!(app.world().resource::<ViewFlags>().cube_visible);
    }
}
