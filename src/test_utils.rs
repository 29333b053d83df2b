use glam::Vec3;

use crate::data::StarCatalog;
use crate::data::stars::parse_catalog_from_reader;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn approx_vec3(a: Vec3, b: Vec3, eps: f32) -> bool {
    a.abs_diff_eq(b, eps)
}

// Sirius plus one faint red star, with a five-entry blue-to-red palette.
pub const SAMPLE_CATALOG_JSON: &str = r#"{
    "rightAscension": [1.767791, 3.0],
    "declination": [-0.291751, 0.5],
    "apparentMagnitude": [-1.44, 7.8],
    "colorIndexBV": [0.009, 1.85],
    "color": [
        [155, 176, 255],
        [202, 215, 255],
        [255, 244, 234],
        [255, 210, 161],
        [255, 204, 111]
    ]
}"#;

pub fn sample_catalog() -> StarCatalog {
    parse_catalog_from_reader(SAMPLE_CATALOG_JSON.as_bytes()).expect("sample catalog")
}
