//! The sky band: a wide open cylinder just outside the star sphere, textured
//! with the Milky Way and tilted through a short chain of transform nodes.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Serialize;
use tracing::debug;

use crate::config::StarfieldConfig;
use crate::geometry::sky_band_half_length;
use crate::material::{Material, sky_band_material};
use crate::mesh::{Mesh, VertexData};
use crate::scene::{NodeId, SceneGraph};
use crate::types::SideOrientation;

pub const SKY_BAND_ALPHA_INDEX: i32 = 0;

// Local tilts, innermost first. Each node rotates in its own frame.
const TUBE_TILT: (Vec3, f32) = (Vec3::NEG_Z, 0.57);
const CHILD_TILT: (Vec3, f32) = (Vec3::X, 0.48);
const PARENT_TILT: (Vec3, f32) = (Vec3::NEG_Y, 0.22);

#[derive(Debug, Clone, Serialize)]
pub struct SkyBand {
    pub mesh: Mesh,
    pub material: Material,
    pub parent: NodeId,
    pub child: NodeId,
}

// Where u = 0 sits on each ring: axis × -Y, or axis × +X for a vertical
// axis. The backdrop texture's alignment depends on this seam.
fn ring_start_normal(axis: Vec3) -> Vec3 {
    let reference = if (axis.y.abs() - 1.0).abs() > 1e-6 {
        Vec3::NEG_Y
    } else {
        Vec3::X
    };
    axis.cross(reference).normalize()
}

/// Open cylinder from `start` to `end`, outward-facing.
///
/// Each end ring has `tessellation + 1` vertices; the seam vertex is repeated
/// so `u` runs 0..=1 around the tube. `v` is 0 at `start` and 1 at `end`.
pub fn tube_vertex_data(start: Vec3, end: Vec3, radius: f32, tessellation: u32) -> VertexData {
    let axis = (end - start).normalize();
    let n = ring_start_normal(axis);
    let b = axis.cross(n);

    let ring = tessellation as usize + 1;
    let mut vd = VertexData::with_capacity(ring * 2, tessellation as usize * 6);

    for (v, center) in [(0.0, start), (1.0, end)] {
        for j in 0..=tessellation {
            let u = j as f32 / tessellation as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let dir = n * cos + b * sin;
            vd.push_position(center + dir * radius);
            vd.push_normal(dir);
            vd.uvs.extend_from_slice(&[u, v]);
        }
    }

    let far = ring as u32;
    for j in 0..tessellation {
        let (p0, p1) = (j, j + 1);
        let (q0, q1) = (far + j, far + j + 1);
        vd.indices.extend_from_slice(&[p0, p1, q0, p1, q1, q0]);
    }
    vd
}

/// Build the band and register its transform chain in `graph`.
pub fn build_sky_band(cfg: &StarfieldConfig, graph: &mut SceneGraph) -> SkyBand {
    let radius = cfg.sky_band_radius() as f32;
    let h = sky_band_half_length(cfg.sky_band_radius()) as f32;

    let mut vertex_data = tube_vertex_data(
        Vec3::new(0.0, 0.0, h),
        Vec3::new(0.0, 0.0, -h),
        radius,
        cfg.sky_band_tessellation,
    );
    // Seen from inside.
    vertex_data.flip_faces();

    let parent = graph.add_node("tubeParentXform", None);
    let child = graph.add_node("tubeChildXform", Some(parent));
    let tube = graph.add_node("tube", Some(child));
    graph.rotate(tube, TUBE_TILT.0, TUBE_TILT.1);
    graph.rotate(child, CHILD_TILT.0, CHILD_TILT.1);
    graph.rotate(parent, PARENT_TILT.0, PARENT_TILT.1);

    debug!(
        radius,
        half_length = h,
        vertices = vertex_data.vertex_count(),
        "sky band built"
    );

    SkyBand {
        mesh: Mesh {
            name: "tube".to_owned(),
            node: tube,
            alpha_index: SKY_BAND_ALPHA_INDEX,
            side: SideOrientation::Back,
            vertex_data,
        },
        material: sky_band_material(cfg),
        parent,
        child,
    }
}
