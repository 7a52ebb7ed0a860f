use super::GeometryData;
use crate::float_types::{Real, tolerance};
use hashbrown::HashMap;
use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct QuantizedPoint(i64, i64, i64);

fn quantize_point(p: &Point3<Real>, factor: Real) -> QuantizedPoint {
    QuantizedPoint(
        (p.x * factor).round() as i64,
        (p.y * factor).round() as i64,
        (p.z * factor).round() as i64,
    )
}

impl GeometryData {
    /// Count edges that are not shared by exactly two triangles.
    ///
    /// Positions are welded by quantizing at `1 / tolerance()`, so duplicated
    /// seam and pole vertices count as one point. Triangles that collapse under
    /// welding are ignored.
    pub fn boundary_edge_count(&self) -> usize {
        let factor = 1.0 / tolerance();
        let welded: Vec<QuantizedPoint> = self
            .vertices
            .iter()
            .map(|p| quantize_point(p, factor))
            .collect();

        let mut edge_counts: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();

        for tri in self.triangles() {
            let [a, b, c] = tri.map(|i| welded[i as usize]);
            if a == b || b == c || c == a {
                continue;
            }

            for (p0, p1) in [(a, b), (b, c), (c, a)] {
                // Order them so (p0, p1) and (p1, p0) become the same key
                let key = if p0 < p1 { (p0, p1) } else { (p1, p0) };
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }

        edge_counts.values().filter(|&&count| count != 2).count()
    }

    /// Checks if the mesh is a closed surface
    ///
    /// ### Returns
    /// Returns `true` if it has at least one triangle and every welded edge appears exactly 2 times
    pub fn is_closed(&self) -> bool {
        self.triangle_count() > 0 && self.boundary_edge_count() == 0
    }
}
