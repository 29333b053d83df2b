use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A star's equatorial position, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EQPoint {
    pub ra: f64,
    pub dec: f64,
}

/// Which faces of a mesh the host should rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SideOrientation {
    Front,
    Back,
}

// Small helpers used by multiple modules

/// Map `value` from `[min, max]` onto `[0, 1]`. Values outside the range map
/// outside `[0, 1]`; callers clamp where they need to.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn normalize_maps_range_endpoints() {
        assert!(approx(normalize(-0.4, -0.4, 2.0), 0.0, 1e-12));
        assert!(approx(normalize(2.0, -0.4, 2.0), 1.0, 1e-12));
        assert!(approx(normalize(0.8, -0.4, 2.0), 0.5, 1e-12));
    }

    #[test]
    fn normalize_stays_in_unit_interval_for_in_range_values() {
        let mut v = -0.4;
        while v <= 2.0 {
            let f = normalize(v, -0.4, 2.0);
            assert!((0.0..=1.0 + 1e-12).contains(&f), "v={v} gave {f}");
            v += 0.05;
        }
    }

    #[test]
    fn normalize_extrapolates_out_of_range() {
        assert!(normalize(-1.0, -0.4, 2.0) < 0.0);
        assert!(normalize(3.0, -0.4, 2.0) > 1.0);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Rgb::new(0.1, 0.2, 0.3).with_alpha(0.0);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.0]);
    }
}
