use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

const YAW_SENSITIVITY: f32 = 0.005;
const PITCH_SENSITIVITY: f32 = 0.004;
const PITCH_LIMIT: f32 = 1.54;
const DOLLY_MIN: f32 = 1.0;
const DOLLY_MAX: f32 = 60.0;

#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Derive orbit parameters from an eye position looking at a focus point.
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(DOLLY_MIN);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            focus,
            distance,
            yaw,
            pitch,
        }
    }

    fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 10.0,
            yaw: 0.0,
            pitch: 0.5,
        }
    }
}

/// Orbit / dolly / pan controller with damped easing toward the target pose.
/// Runs on real time so pausing the rotation clock never freezes the camera.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time<Real>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left drag orbits around the focus point
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch += mouse_delta.y * PITCH_SENSITIVITY;
        orbit.pitch = orbit.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Right drag pans the focus point in the view plane
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let view_rot = orbit.view_rotation();
        let right = view_rot * Vec3::X;
        let up = view_rot * Vec3::Y;
        let pan_speed = orbit.distance * 0.0015;
        orbit.focus += (-right * mouse_delta.x + up * mouse_delta.y) * pan_speed;
    }

    // Wheel dollies toward/away from the focus point
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.distance = (orbit.distance * (1.0 - scroll_accum * 0.1)).clamp(DOLLY_MIN, DOLLY_MAX);
    }

    let target_rot = orbit.view_rotation();
    let target_pos = orbit.focus + target_rot * (Vec3::Z * orbit.distance);

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}
