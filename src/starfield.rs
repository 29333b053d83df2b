//! Star point sprites: one small triangle per catalog star, placed on the
//! celestial sphere and tinted by its B−V color index.

use glam::Vec3;
use rand::Rng;
use tracing::{debug, info};

use crate::animator::TwinkleAnimator;
use crate::config::StarfieldConfig;
use crate::data::{StarCatalog, StarRecord};
use crate::geometry::{palette_index, place_on_sphere, star_scale_factor, star_triangle};
use crate::material::{Material, star_material};
use crate::mesh::{Mesh, VertexData};
use crate::scene::NodeId;
use crate::types::{Rgba, SideOrientation};

pub const STAR_MESH_NAME: &str = "starMesh";

/// Stars draw after the sky band.
pub const STAR_ALPHA_INDEX: i32 = 100;

// Sprite texture corners for the top, left and right vertices.
const SPRITE_UVS: [f32; 6] = [0.5, 1.0, 0.0, 0.0, 1.0, 0.0];

/// Everything derived for a single star before it goes into the buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarVisual {
    pub scale: f64,
    pub color: Rgba,
    pub vertices: [Vec3; 3],
}

impl StarVisual {
    // The catalog guarantees a non-empty palette, so the lookup can't miss.
    pub fn new(star: StarRecord, catalog: &StarCatalog, cfg: &StarfieldConfig) -> Self {
        let palette = catalog.palette();
        let scale = star_scale_factor(star.magnitude, cfg.star_scale);
        let color = palette[palette_index(star.color_index_bv, palette.len())].with_alpha(0.0);
        let triangle = star_triangle(scale as f32, cfg.radius as f32);
        Self {
            scale,
            color,
            vertices: place_on_sphere(triangle, star.coords),
        }
    }
}

pub struct StarField {
    pub mesh: Mesh,
    pub material: Material,
    pub animator: Option<TwinkleAnimator>,
}

/// Number of stars actually drawn.
pub fn star_count(catalog: &StarCatalog, cfg: &StarfieldConfig) -> usize {
    catalog.len().min(cfg.star_limit)
}

/// Fill vertex buffers with one unconnected triangle per star.
///
/// Every star gets its own random `uvs2` pair, shared by its three vertices,
/// so each samples a different spot of the twinkle noise.
pub fn build_star_vertex_data<R: Rng + ?Sized>(
    catalog: &StarCatalog,
    cfg: &StarfieldConfig,
    rng: &mut R,
) -> VertexData {
    let count = star_count(catalog, cfg);
    let mut vd = VertexData::with_capacity(count * 3, count * 3);

    for (i, star) in catalog.stars().take(count).enumerate() {
        let visual = StarVisual::new(star, catalog, cfg);

        for v in visual.vertices {
            vd.push_position(v);
            vd.push_color(visual.color);
        }
        vd.uvs.extend_from_slice(&SPRITE_UVS);

        let u: f32 = rng.random();
        let v: f32 = rng.random();
        vd.uvs2.extend_from_slice(&[u, v, u, v, u, v]);

        let base = (i * 3) as u32;
        vd.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    debug!(
        vertices = vd.vertex_count(),
        triangles = vd.triangle_count(),
        "star vertex data built"
    );
    vd
}

/// Star mesh, its material, and the twinkle animator when enabled.
pub fn build_star_field<R: Rng + ?Sized>(
    catalog: &StarCatalog,
    cfg: &StarfieldConfig,
    node: NodeId,
    rng: &mut R,
) -> StarField {
    let count = star_count(catalog, cfg);
    if count < catalog.len() {
        info!(
            limit = cfg.star_limit,
            catalog = catalog.len(),
            "star limit truncates catalog"
        );
    }

    let mesh = Mesh {
        name: STAR_MESH_NAME.to_owned(),
        node,
        alpha_index: STAR_ALPHA_INDEX,
        side: SideOrientation::Front,
        vertex_data: build_star_vertex_data(catalog, cfg, rng),
    };
    let material = star_material(cfg);
    let animator = cfg.twinkle.then(|| TwinkleAnimator::new(cfg.twinkle_step));

    StarField {
        mesh,
        material,
        animator,
    }
}
