use crate::geometry::GeometryData;
use crate::triangulated::Triangulated3D;
use core2::io::Cursor;
use nalgebra::Vector3;

/// Per-facet normal for STL: the triangle's own orientation, falling back to
/// the first vertex normal for zero-area facets.
fn facet_normal(tri: &[crate::geometry::Vertex; 3]) -> Vector3<f32> {
    let e1 = tri[1].position - tri[0].position;
    let e2 = tri[2].position - tri[0].position;
    e1.cross(&e2).try_normalize(0.0).unwrap_or(tri[0].normal)
}

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use supershape::shapes::SuperShape;
/// let mesh = SuperShape::sphere(1.0).generate(8, 4);
/// let text = mesh.to_stl_ascii("my_solid");
/// assert!(text.starts_with("solid my_solid"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.position;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The resulting `Vec<u8>` can then be written to a file or handled in memory:
///
/// ```rust
/// # use supershape::shapes::SuperShape;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mesh  = SuperShape::default().generate(32, 32);
/// let bytes = mesh.to_stl_binary("my_solid")?;
/// assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
/// # Ok(())
/// # }
/// ```
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        triangles.push(Triangle {
            normal: Normal::new([n.x, n.y, n.z]),
            vertices: tri.map(|v| {
                let p = v.position;
                Vertex::new([p.x, p.y, p.z])
            }),
        });
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl GeometryData {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
