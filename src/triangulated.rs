//! A trait for any shape which can be represented by triangles

use crate::geometry::{GeometryData, Vertex};

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions, normals and uvs.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}

impl Triangulated3D for GeometryData {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for tri in self.triangles() {
            // validate() guarantees these lookups; skip rather than panic on a malformed mesh
            let [Some(a), Some(b), Some(c)] = tri.map(|i| self.vertex(i as usize)) else {
                continue;
            };
            f([a, b, c]);
        }
    }
}
