use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use starfield::logging::init_logging;
use starfield::{StarfieldConfig, TextureSet, build_scene, load_catalog};

#[derive(Parser, Debug)]
#[command(name = "starfield")]
#[command(about = "Build a point-sprite starfield scene from a star catalog", version)]
struct Args {
    /// Star catalog JSON (a `.gz` suffix is decompressed)
    #[arg(long, default_value = "star-data.json")]
    catalog: PathBuf,

    /// Maximum number of stars to draw
    #[arg(long, default_value_t = 5000)]
    star_limit: usize,

    /// Size multiplier applied to the magnitude-derived star scale
    #[arg(long, default_value_t = 0.5)]
    star_scale: f64,

    /// Celestial sphere radius
    #[arg(long, default_value_t = 300.0)]
    radius: f64,

    /// Draw stars with a flat emissive color instead of animated noise
    #[arg(long)]
    no_twinkle: bool,

    /// Noise texture offset added per frame
    #[arg(long, default_value_t = 0.008)]
    twinkle_step: f64,

    /// Leave out the sky band backdrop
    #[arg(long)]
    no_sky_band: bool,

    /// Seed for per-star noise UVs; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Frames of twinkle animation to run before writing the scene
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Star sprite opacity texture
    #[arg(long, default_value = "star.png")]
    star_texture: String,

    /// Twinkle noise texture
    #[arg(long, default_value = "noise.png")]
    noise_texture: String,

    /// Sky band backdrop texture
    #[arg(long, default_value = "eso0932a.png")]
    sky_texture: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output scene JSON path
    #[arg(short = 'o', long = "out")]
    out: PathBuf,
}

impl Args {
    fn to_config(&self) -> StarfieldConfig {
        StarfieldConfig {
            star_limit: self.star_limit,
            star_scale: self.star_scale,
            radius: self.radius,
            twinkle: !self.no_twinkle,
            twinkle_step: self.twinkle_step,
            sky_band: !self.no_sky_band,
            seed: self.seed,
            textures: TextureSet {
                star_sprite: self.star_texture.clone(),
                twinkle_noise: self.noise_texture.clone(),
                sky_band: self.sky_texture.clone(),
            },
            ..StarfieldConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let cfg = args.to_config();

    let catalog = load_catalog(&args.catalog)
        .inspect_err(|e| {
            error!(
                path = %args.catalog.display(),
                error = %e,
                "star catalog failed to load"
            )
        })
        .with_context(|| format!("loading {}", args.catalog.display()))?;

    let mut scene = build_scene(&catalog, &cfg).context("building scene")?;

    for _ in 0..args.frames {
        scene.advance_frame();
    }

    scene
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        out = %args.out.display(),
        stars = scene.star_count(),
        frames = args.frames,
        "scene written"
    );
    Ok(())
}
