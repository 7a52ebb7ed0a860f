//! `GeometryData`, the indexed triangle mesh every generator in this crate produces.
//!
//! Attributes are stored as a struct of arrays so they can be handed to a
//! rendering backend without reshuffling:
//!
//! ```text
//! vertices: [p0, p1, p2, ...]      Point3<Real>
//! normals:  [n0, n1, n2, ...]      Vector3<Real>, unit length
//! uvs:      [t0, t1, t2, ...]      Point2<Real>
//! indices:  [a0, b0, c0, a1, ...]  u32 triples, CCW seen from outside
//! ```

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point2, Point3, Vector3};

mod vertex;
pub use vertex::Vertex;

#[cfg(feature = "hashmap")]
mod manifold;

/// How far a normal's length may stray from `1` before [`GeometryData::validate`] rejects it.
/// Independent of the welding [`tolerance`](crate::float_types::tolerance).
pub const NORMAL_LENGTH_TOLERANCE: Real = 1e-4;

/// An indexed triangle mesh with per-vertex normals and texture coordinates.
///
/// Returned by value; the caller owns every buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    pub vertices: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uvs: Vec<Point2<Real>>,
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// An empty mesh.
    pub const fn new() -> Self {
        GeometryData {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// An empty mesh with room for `vertex_count` vertices and `triangle_count` triangles.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        GeometryData {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex.position);
        self.normals.push(vertex.normal);
        self.uvs.push(vertex.uv);
        index
    }

    /// Append one triangle. Winding `a -> b -> c` is the front face.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Iterate over the index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Position, normal and uv of vertex `index`.
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        Some(Vertex {
            position: *self.vertices.get(index)?,
            normal: *self.normals.get(index)?,
            uv: *self.uvs.get(index)?,
        })
    }

    /// Check the structural invariants of the mesh and report the first violation.
    ///
    /// - `vertices`, `normals` and `uvs` have equal length
    /// - `indices` is made of complete triples
    /// - every index is in range
    /// - every coordinate is finite
    /// - every normal has unit length within [`NORMAL_LENGTH_TOLERANCE`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.normals.len() != self.vertices.len() || self.uvs.len() != self.vertices.len() {
            return Err(ValidationError::MismatchedAttributeLengths {
                vertices: self.vertices.len(),
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(ValidationError::IncompleteTriangle(self.indices.len()));
        }

        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            return Err(ValidationError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            });
        }

        for (i, p) in self.vertices.iter().enumerate() {
            let uv = self.uvs[i];
            let n = self.normals[i];
            if !p.coords.iter().all(|c| c.is_finite())
                || !uv.coords.iter().all(|c| c.is_finite())
                || !n.iter().all(|c| c.is_finite())
            {
                return Err(ValidationError::InvalidCoordinate(*p));
            }

            let length = n.norm();
            if (length - 1.0).abs() > NORMAL_LENGTH_TOLERANCE {
                return Err(ValidationError::NonUnitNormal { vertex: i, length });
            }
        }

        Ok(())
    }

    /// Axis-aligned bounds of all vertices. An empty mesh yields a zero-size box at the origin.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.vertices).unwrap_or_default()
    }

    /// Twice-area normal of triangle `[a, b, c]`: `(b - a) × (c - a)`.
    #[inline]
    pub fn face_normal(&self, [a, b, c]: [u32; 3]) -> Vector3<Real> {
        let pa = self.vertices[a as usize];
        let pb = self.vertices[b as usize];
        let pc = self.vertices[c as usize];
        (pb - pa).cross(&(pc - pa))
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> Real {
        self.triangles()
            .map(|tri| self.face_normal(tri).norm() * 0.5)
            .sum()
    }

    /// Signed volume enclosed by the triangles (divergence theorem).
    ///
    /// Positive when the surface is closed and wound counter-clockwise seen
    /// from outside; only meaningful for closed surfaces.
    pub fn signed_volume(&self) -> Real {
        self.triangles()
            .map(|[a, b, c]| {
                let pa = self.vertices[a as usize].coords;
                let pb = self.vertices[b as usize].coords;
                let pc = self.vertices[c as usize].coords;
                pa.dot(&pb.cross(&pc))
            })
            .sum::<Real>()
            / 6.0
    }

    /// Sum of the area-weighted face normals touching each vertex.
    ///
    /// Zero-area triangles contribute nothing.
    pub(crate) fn accumulate_face_normals(&self) -> Vec<Vector3<Real>> {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];
        for tri in self.triangles() {
            let weighted_normal = self.face_normal(tri);
            for index in tri {
                accumulated[index as usize] += weighted_normal;
            }
        }
        accumulated
    }

    /// Normalize `accumulated` into `self.normals`.
    ///
    /// A vertex whose accumulated normal vanishes (or overflowed) falls back to
    /// the direction of its position from the origin, and to `+Z` if that
    /// vanishes too.
    pub(crate) fn set_normals_from_accumulated(&mut self, accumulated: Vec<Vector3<Real>>) {
        self.normals = accumulated
            .into_iter()
            .zip(&self.vertices)
            .map(|(normal, position)| {
                unit_direction(&normal)
                    .or_else(|| unit_direction(&position.coords))
                    .unwrap_or_else(Vector3::z)
            })
            .collect();
    }

    /// Recompute smooth vertex normals as the normalized, area-weighted average
    /// of the adjacent face normals.
    pub fn compute_vertex_normals(&mut self) {
        let accumulated = self.accumulate_face_normals();
        self.set_normals_from_accumulated(accumulated);
    }

    /// Reverse the winding of every triangle and negate every normal.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for normal in &mut self.normals {
            *normal = -*normal;
        }
    }

    /// Interleaved vertex buffer `[x, y, z, nx, ny, nz, u, v]` per vertex.
    pub fn interleaved(&self) -> Vec<Real> {
        let mut out = Vec::with_capacity(self.vertices.len() * 8);
        for ((p, n), uv) in self.vertices.iter().zip(&self.normals).zip(&self.uvs) {
            out.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, uv.x, uv.y]);
        }
        out
    }
}

/// `v / |v|`, or `None` if `v` is zero or not finite.
///
/// Scales by the largest component first so that huge but finite vectors do
/// not overflow while computing the norm.
fn unit_direction(v: &Vector3<Real>) -> Option<Vector3<Real>> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    let scale = v.amax();
    if scale < EPSILON * Real::EPSILON {
        return None;
    }
    (v / scale).try_normalize(0.0)
}
