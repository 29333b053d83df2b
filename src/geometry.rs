use glam::{EulerRot, Quat, Vec3};

use crate::types::{EQPoint, normalize};

pub const MAGNITUDE_CEILING: f64 = 8.0;

// B−V range spread across the palette
pub const BV_MIN: f64 = -0.4;
pub const BV_MAX: f64 = 2.0;

// Sprite corners in units of star scale, around local +Z
const SPRITE_TOP: (f32, f32) = (0.0, 0.7);
const SPRITE_LEFT: (f32, f32) = (-0.5, -0.3);
const SPRITE_RIGHT: (f32, f32) = (0.5, -0.3);

#[inline]
pub fn star_scale_factor(magnitude: f64, star_scale: f64) -> f64 {
    (MAGNITUDE_CEILING - magnitude) * star_scale
}

pub fn palette_index(color_index_bv: f64, palette_len: usize) -> usize {
    let max_index = palette_len.saturating_sub(1) as f64;
    let fraction = normalize(color_index_bv, BV_MIN, BV_MAX);
    (max_index * fraction).round().clamp(0.0, max_index) as usize
}

pub fn star_triangle(scale: f32, radius: f32) -> [Vec3; 3] {
    [SPRITE_TOP, SPRITE_LEFT, SPRITE_RIGHT].map(|(x, y)| Vec3::new(x * scale, y * scale, radius))
}

// Yaw around Y by -RA, pitch around X by -Dec, no roll. Applied roll first,
// then pitch, then yaw.
pub fn celestial_rotation(coords: EQPoint) -> Quat {
    Quat::from_euler(EulerRot::YXZ, -coords.ra as f32, -coords.dec as f32, 0.0)
}

pub fn place_on_sphere(triangle: [Vec3; 3], coords: EQPoint) -> [Vec3; 3] {
    let rotation = celestial_rotation(coords);
    triangle.map(|v| rotation * v)
}

// An eighth of the band's circumference
pub fn sky_band_half_length(band_radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * band_radius / 8.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, approx_vec3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn scale_inverts_magnitude() {
        assert!(approx(star_scale_factor(-1.44, 0.5), 4.72, 1e-12));
        assert!(approx(star_scale_factor(7.8, 0.5), 0.1, 1e-12));
        assert!(approx(star_scale_factor(8.0, 0.5), 0.0, 1e-12));
    }

    #[test]
    fn scale_is_monotonically_decreasing_in_magnitude() {
        let mut prev = f64::INFINITY;
        let mut m = -2.0;
        while m <= 8.0 {
            let s = star_scale_factor(m, 0.5);
            assert!(s < prev, "scale should shrink as magnitude grows (m={m})");
            prev = s;
            m += 0.25;
        }
    }

    #[test]
    fn palette_index_hits_ends_and_midpoint() {
        assert_eq!(palette_index(-0.4, 5), 0);
        assert_eq!(palette_index(2.0, 5), 4);
        assert_eq!(palette_index(0.8, 5), 2);
        // 1.5 rounds up
        assert_eq!(palette_index(0.8, 4), 2);
    }

    #[test]
    fn palette_index_clamps_out_of_range_values() {
        assert_eq!(palette_index(-5.0, 5), 0);
        assert_eq!(palette_index(10.0, 5), 4);
        assert_eq!(palette_index(0.3, 1), 0);
        assert_eq!(palette_index(99.0, 1), 0);
    }

    #[test]
    fn triangle_scales_around_z_axis() {
        let [top, left, right] = star_triangle(2.0, 300.0);
        assert!(approx_vec3(top, Vec3::new(0.0, 1.4, 300.0), 1e-6));
        assert!(approx_vec3(left, Vec3::new(-1.0, -0.6, 300.0), 1e-6));
        assert!(approx_vec3(right, Vec3::new(1.0, -0.6, 300.0), 1e-6));
    }

    #[test]
    fn zero_coordinates_leave_triangle_on_positive_z() {
        let tri = star_triangle(4.72, 300.0);
        let placed = place_on_sphere(tri, EQPoint { ra: 0.0, dec: 0.0 });
        for (a, b) in tri.iter().zip(placed.iter()) {
            assert!(approx_vec3(*a, *b, 1e-4));
        }
        let centroid = (placed[0] + placed[1] + placed[2]) / 3.0;
        assert!(centroid.x.abs() < 1e-4);
        assert!((centroid.z - 300.0).abs() < 1e-3);
    }

    #[test]
    fn positive_declination_moves_north() {
        let tri = star_triangle(0.0, 300.0);
        let placed = place_on_sphere(
            tri,
            EQPoint {
                ra: 0.0,
                dec: FRAC_PI_2,
            },
        );
        assert!(approx_vec3(placed[0], Vec3::new(0.0, 300.0, 0.0), 1e-3));
    }

    #[test]
    fn right_ascension_yaws_around_y() {
        let tri = star_triangle(0.0, 300.0);
        let placed = place_on_sphere(
            tri,
            EQPoint {
                ra: FRAC_PI_2,
                dec: 0.0,
            },
        );
        assert!(approx_vec3(placed[0], Vec3::new(-300.0, 0.0, 0.0), 1e-3));
    }

    #[test]
    fn placement_preserves_distance_from_origin() {
        let tri = star_triangle(1.0, 300.0);
        let placed = place_on_sphere(tri, EQPoint { ra: 1.3, dec: -0.7 });
        for (a, b) in tri.iter().zip(placed.iter()) {
            assert!((a.length() - b.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn sky_band_half_length_is_eighth_of_circumference() {
        let h = sky_band_half_length(320.0);
        assert!(approx(h, 2.0 * std::f64::consts::PI * 320.0 / 8.0, 1e-12));
    }
}
