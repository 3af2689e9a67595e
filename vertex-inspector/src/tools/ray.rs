use bevy::prelude::*;

// Analytic ray–sphere intersection, returns Some(t) or None.
// The direction does not need to be normalised; t is in direction lengths.
pub fn ray_sphere_hit_t(
    ray_origin: Vec3,
    ray_direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_direction.length_squared();
    if a <= f32::EPSILON {
        return None;
    }

    let half_b = oc.dot(ray_direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-half_b - sqrt_d) / a;
    let t_far = (-half_b + sqrt_d) / a;

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit_returns_entry_distance() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 1.0)
            .expect("hit");
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn offset_ray_misses() {
        let t = ray_sphere_hit_t(
            Vec3::new(0.0, 2.0, 10.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            1.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn grazing_offset_still_hits() {
        let t = ray_sphere_hit_t(
            Vec3::new(0.0, 0.99, 10.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            1.0,
        );
        assert!(t.is_some());
    }

    #[test]
    fn sphere_behind_the_origin_is_ignored() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn origin_inside_returns_exit_distance() {
        let t = ray_sphere_hit_t(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0).expect("hit");
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn unnormalised_direction_scales_t() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z * 2.0, Vec3::ZERO, 1.0)
            .expect("hit");
        assert!((t - 4.5).abs() < 1e-5);
    }
}
