//! Star catalog to celestial-sphere scene: point-sprite star mesh, twinkle
//! animation, and the sky band backdrop, described for a host renderer.

pub mod animator;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod sky_band;
pub mod starfield;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::{StarfieldConfig, TextureSet};
pub use data::{StarCatalog, load_catalog};
pub use error::{CatalogError, ConfigError};
pub use scene::{SceneAssets, build_scene};
