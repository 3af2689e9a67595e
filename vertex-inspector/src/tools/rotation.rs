//! Two-axis rotation of the solid and its marker set, driven by the virtual
//! clock so that pausing excludes the paused span from the accumulated angle.

use bevy::prelude::*;

use constants::solid::{SPIN_SPEED_X, SPIN_SPEED_Y};

use crate::engine::scene::{MarkerRoot, SolidCube, ViewFlags};

/// Rotation angles as a function of elapsed running time. The X axis turns
/// at half the Y rate.
pub fn spin_angles(elapsed_secs: f32) -> (f32, f32) {
    (elapsed_secs * SPIN_SPEED_X, elapsed_secs * SPIN_SPEED_Y)
}

/// Keep the virtual clock in lockstep with the rotation toggle. Unpausing
/// resumes from the frozen elapsed value, so there is no angle jump.
pub fn sync_rotation_clock(flags: Res<ViewFlags>, mut clock: ResMut<Time<Virtual>>) {
    if !flags.is_changed() {
        return;
    }
    if flags.rotating {
        if clock.is_paused() {
            clock.unpause();
        }
    } else if !clock.is_paused() {
        clock.pause();
    }
}

pub fn spin_solid(
    time: Res<Time>,
    flags: Res<ViewFlags>,
    mut query: Query<&mut Transform, Or<(With<SolidCube>, With<MarkerRoot>)>>,
) {
    if !flags.rotating {
        return;
    }

    let (angle_x, angle_y) = spin_angles(time.elapsed_secs());
    for mut transform in &mut query {
        transform.rotation = Quat::from_euler(EulerRot::XYZ, angle_x, angle_y, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Stand-in for bevy 0.16's private `Time::<Virtual>::advance_with_raw_delta`:
    /// advance the virtual clock, accumulating nothing while paused.
    fn advance_with_raw_delta(clock: &mut Time<Virtual>, raw_delta: Duration) {
        let delta = if clock.is_paused() {
            Duration::ZERO
        } else {
            raw_delta
        };
        clock.advance_by(delta);
    }

    #[test]
    fn axis_rates_keep_a_fixed_ratio() {
        let (angle_x, angle_y) = spin_angles(10.0);
        assert!((angle_y - 2.0 * angle_x).abs() < 1e-6);
        assert!((angle_y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn paused_time_does_not_accumulate() {
        let mut clock = Time::<Virtual>::default();

        advance_with_raw_delta(&mut clock, Duration::from_millis(1500));
        let frozen = clock.elapsed_secs();
        assert!((frozen - 1.5).abs() < 1e-6);

        clock.pause();
        advance_with_raw_delta(&mut clock, Duration::from_secs(10));
        assert_eq!(clock.elapsed_secs(), frozen);

        clock.unpause();
        advance_with_raw_delta(&mut clock, Duration::from_millis(500));
        let resumed = clock.elapsed_secs();
        assert!((resumed - 2.0).abs() < 1e-5);

        // the angle only reflects time spent running
        let (_, angle_y) = spin_angles(resumed);
        assert!((angle_y - 2.0 * SPIN_SPEED_Y).abs() < 1e-5);
    }

    #[test]
    fn resuming_does_not_jump_the_angle() {
        let mut clock = Time::<Virtual>::default();

        advance_with_raw_delta(&mut clock, Duration::from_secs(3));
        let (_, before) = spin_angles(clock.elapsed_secs());

        clock.pause();
        advance_with_raw_delta(&mut clock, Duration::from_secs(60));
        clock.unpause();

        let (_, after) = spin_angles(clock.elapsed_secs());
        assert_eq!(before, after);
    }
}
