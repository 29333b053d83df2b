use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use glam::{Mat4, Quat, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::animator::TwinkleAnimator;
use crate::config::StarfieldConfig;
use crate::data::StarCatalog;
use crate::error::ConfigError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::sky_band::{SkyBand, build_sky_band};
use crate::starfield::{STAR_MESH_NAME, build_star_field};
use crate::types::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct TransformNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub rotation: Quat,
}

/// Flat arena of transform nodes. Parents are always added before their
/// children, so the hierarchy can't form a cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneGraph {
    nodes: Vec<TransformNode>,
}

impl SceneGraph {
    pub fn add_node(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TransformNode {
            name: name.into(),
            parent,
            rotation: Quat::IDENTITY,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &TransformNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rotate a node about `axis` in its own local frame.
    pub fn rotate(&mut self, id: NodeId, axis: Vec3, angle: f32) {
        let node = &mut self.nodes[id.0];
        let turn = Quat::from_axis_angle(axis.normalize(), angle);
        node.rotation = (node.rotation * turn).normalize();
    }

    pub fn local_matrix(&self, id: NodeId) -> Mat4 {
        Mat4::from_quat(self.node(id).rotation)
    }

    /// Local-to-world transform: ancestors apply after their descendants.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = self.local_matrix(id);
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            m = self.local_matrix(p) * m;
            parent = self.node(p).parent;
        }
        m
    }
}

/// Everything the host renderer needs for the starfield scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneAssets {
    pub clear_color: Rgb,
    /// Seed the per-star noise UVs were drawn with.
    pub seed: u64,
    pub graph: SceneGraph,
    pub stars: Mesh,
    pub star_material: Material,
    pub sky_band: Option<SkyBand>,
    pub animator: Option<TwinkleAnimator>,
}

/// Build the full scene from a loaded catalog.
pub fn build_scene(
    catalog: &StarCatalog,
    cfg: &StarfieldConfig,
) -> Result<SceneAssets, ConfigError> {
    cfg.validate()?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut graph = SceneGraph::default();
    let star_node = graph.add_node(STAR_MESH_NAME, None);
    let field = build_star_field(catalog, cfg, star_node, &mut rng);

    let sky_band = cfg.sky_band.then(|| build_sky_band(cfg, &mut graph));

    info!(
        seed,
        stars = field.mesh.vertex_data.triangle_count(),
        twinkle = field.animator.is_some(),
        sky_band = sky_band.is_some(),
        "scene built"
    );

    Ok(SceneAssets {
        clear_color: Rgb::BLACK,
        seed,
        graph,
        stars: field.mesh,
        star_material: field.material,
        sky_band,
        animator: field.animator,
    })
}

impl SceneAssets {
    pub fn star_count(&self) -> usize {
        self.stars.vertex_data.triangle_count()
    }

    /// Per-frame hook: one twinkle step, pushed into the star material.
    pub fn advance_frame(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.tick();
            animator.apply(&mut self.star_material);
        }
    }

    /// Time-based variant of [`SceneAssets::advance_frame`].
    pub fn advance(&mut self, delta: Duration) {
        if let Some(animator) = self.animator.as_mut() {
            animator.advance(delta);
            animator.apply(&mut self.star_material);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()
    }
}
