//! Flat vertex buffers and the mesh record handed to the host renderer.

use glam::Vec3;
use serde::Serialize;

use crate::scene::NodeId;
use crate::types::{Rgba, SideOrientation};

// xyz triples, rgba quads and uv pairs; unused attributes stay empty
#[derive(Debug, Clone, Default, Serialize)]
pub struct VertexData {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
    pub colors: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub uvs2: Vec<f32>,
}

impl VertexData {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(indices),
            colors: Vec::with_capacity(vertices * 4),
            normals: Vec::new(),
            uvs: Vec::with_capacity(vertices * 2),
            uvs2: Vec::with_capacity(vertices * 2),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn push_position(&mut self, p: Vec3) {
        self.positions.extend_from_slice(&p.to_array());
    }

    pub fn push_normal(&mut self, n: Vec3) {
        self.normals.extend_from_slice(&n.to_array());
    }

    pub fn push_color(&mut self, c: Rgba) {
        self.colors.extend_from_slice(&c.to_array());
    }

    pub fn position(&self, vertex: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[vertex * 3..vertex * 3 + 3])
    }

    pub fn flip_faces(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for n in &mut self.normals {
            *n = -*n;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Mesh {
    pub name: String,
    pub node: NodeId,
    // higher draws later
    pub alpha_index: i32,
    pub side: SideOrientation,
    pub vertex_data: VertexData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> VertexData {
        let mut vd = VertexData::default();
        for p in [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE] {
            vd.push_position(p);
            vd.push_normal(Vec3::Z);
        }
        vd.indices.extend_from_slice(&[0, 1, 2, 1, 3, 2]);
        vd
    }

    #[test]
    fn counts_follow_buffer_lengths() {
        let vd = quad();
        assert_eq!(vd.vertex_count(), 4);
        assert_eq!(vd.triangle_count(), 2);
        assert_eq!(vd.position(3), Vec3::ONE);
    }

    #[test]
    fn flip_faces_reverses_winding_and_normals() {
        let mut vd = quad();
        vd.flip_faces();
        assert_eq!(vd.indices, vec![0, 2, 1, 1, 2, 3]);
        assert!(vd.normals.chunks(3).all(|n| n == [0.0, 0.0, -1.0]));
    }

    #[test]
    fn push_color_appends_rgba() {
        let mut vd = VertexData::default();
        vd.push_color(Rgba {
            r: 1.0,
            g: 0.5,
            b: 0.25,
            a: 0.0,
        });
        assert_eq!(vd.colors, vec![1.0, 0.5, 0.25, 0.0]);
    }
}
