//! Material and texture descriptors for the host renderer.

use serde::Serialize;

use crate::config::StarfieldConfig;
use crate::types::Rgb;

#[derive(Debug, Clone, Serialize)]
pub struct Texture {
    pub path: String,
    // 0 samples `uvs`, 1 samples `uvs2`
    pub coordinates_index: u32,
    pub u_offset: f64,
    pub v_offset: f64,
    pub u_scale: f64,
    pub v_scale: f64,
    pub invert_y: bool,
}

impl Texture {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            coordinates_index: 0,
            u_offset: 0.0,
            v_offset: 0.0,
            u_scale: 1.0,
            v_scale: 1.0,
            invert_y: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Material {
    pub name: String,
    pub disable_lighting: bool,
    pub back_face_culling: bool,
    pub alpha: f32,
    pub opacity_texture: Option<Texture>,
    pub emissive_texture: Option<Texture>,
    pub emissive_color: Option<Rgb>,
}

impl Material {
    pub fn unlit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disable_lighting: true,
            back_face_culling: true,
            alpha: 1.0,
            opacity_texture: None,
            emissive_texture: None,
            emissive_color: None,
        }
    }
}

/// Star sprite material. With twinkle on, noise sampled through the second
/// UV set supplies the emissive term; otherwise stars glow flat white.
pub fn star_material(cfg: &StarfieldConfig) -> Material {
    let mut material = Material::unlit("starMaterial");
    material.opacity_texture = Some(Texture::new(&cfg.textures.star_sprite));

    if cfg.twinkle {
        let mut noise = Texture::new(&cfg.textures.twinkle_noise);
        noise.coordinates_index = 1;
        material.emissive_texture = Some(noise);
    } else {
        material.emissive_color = Some(Rgb::WHITE);
    }
    material
}

pub fn sky_band_material(cfg: &StarfieldConfig) -> Material {
    // The image is stored top-down.
    let mut texture = Texture::new(&cfg.textures.sky_band);
    texture.invert_y = false;
    texture.v_scale = -1.0;

    let mut material = Material::unlit("skyBox");
    material.emissive_texture = Some(texture);
    material.alpha = 0.5;
    material
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twinkling_star_material_samples_noise_through_second_uv_set() {
        let m = star_material(&StarfieldConfig::default());
        assert_eq!(m.name, "starMaterial");
        assert!(m.disable_lighting);
        assert_eq!(m.opacity_texture.as_ref().unwrap().path, "star.png");
        assert_eq!(m.opacity_texture.as_ref().unwrap().coordinates_index, 0);

        let noise = m.emissive_texture.as_ref().expect("noise texture");
        assert_eq!(noise.path, "noise.png");
        assert_eq!(noise.coordinates_index, 1);
        assert_eq!(noise.u_offset, 0.0);
        assert!(m.emissive_color.is_none());
    }

    #[test]
    fn steady_star_material_uses_flat_white() {
        let cfg = StarfieldConfig {
            twinkle: false,
            ..Default::default()
        };
        let m = star_material(&cfg);
        assert!(m.emissive_texture.is_none());
        assert_eq!(m.emissive_color, Some(Rgb::WHITE));
        assert!(m.opacity_texture.is_some());
    }

    #[test]
    fn sky_band_material_is_translucent_and_mirrored() {
        let m = sky_band_material(&StarfieldConfig::default());
        assert_eq!(m.name, "skyBox");
        assert_eq!(m.alpha, 0.5);
        assert!(m.back_face_culling);
        assert!(m.disable_lighting);
        let tex = m.emissive_texture.unwrap();
        assert_eq!(tex.path, "eso0932a.png");
        assert_eq!(tex.v_scale, -1.0);
        assert!(!tex.invert_y);
    }

    #[test]
    fn texture_paths_follow_config() {
        let mut cfg = StarfieldConfig::default();
        cfg.textures.star_sprite = "assets/sprite.png".to_owned();
        let m = star_material(&cfg);
        assert_eq!(m.opacity_texture.unwrap().path, "assets/sprite.png");
    }
}
