use crate::error::ConfigError;

// Paths are passed through to the host untouched.
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub star_sprite: String,
    pub twinkle_noise: String,
    pub sky_band: String,
}

impl Default for TextureSet {
    fn default() -> Self {
        Self {
            star_sprite: "star.png".to_owned(),
            twinkle_noise: "noise.png".to_owned(),
            sky_band: "eso0932a.png".to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub star_limit: usize,
    pub star_scale: f64,
    pub radius: f64,
    pub twinkle: bool,
    pub twinkle_step: f64,
    pub sky_band: bool,
    // Added to radius for the band
    pub sky_band_margin: f64,
    pub sky_band_tessellation: u32,
    pub seed: Option<u64>,
    pub textures: TextureSet,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_limit: 5000,
            star_scale: 0.5,
            radius: 300.0,
            twinkle: true,
            twinkle_step: 0.008,
            sky_band: true,
            sky_band_margin: 20.0,
            sky_band_tessellation: 64,
            seed: None,
            textures: TextureSet::default(),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("star_scale", self.star_scale)?;
        positive("radius", self.radius)?;
        if !self.twinkle_step.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "twinkle_step",
            });
        }
        if self.sky_band {
            positive("sky_band_radius", self.sky_band_radius())?;
            positive("sky_band_tessellation", self.sky_band_tessellation as f64)?;
        }
        Ok(())
    }

    pub fn sky_band_radius(&self) -> f64 {
        self.radius + self.sky_band_margin
    }
}
