//! 3D supershapes: two superformulas swept against each other over a sphere-like grid.

use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::geometry::{GeometryData, Vertex};
use crate::superformula::Superformula;
use log::{debug, warn};
use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smallest resolution on either axis that still encloses a volume.
pub const MIN_RESOLUTION: i32 = 3;
/// Largest resolution on either axis; larger requests are clamped.
pub const MAX_RESOLUTION: i32 = 2048;
/// Resolution used for both axes when none is given.
pub const DEFAULT_RESOLUTION: i32 = 300;

/// Parameters of a supershape.
///
/// `theta` shapes the longitude profile (around the Z axis) and `phi` the
/// latitude profile (from pole to pole). `r2` scales the latitude profile and
/// `r1` scales the whole surface, so the circle parameters give a sphere of
/// radius `r1 · r2`. A point on the surface is
///
/// ```text
/// ρφ = r2 · Rφ(φ)        φ ∈ [-π/2, π/2]
///                        θ ∈ [-π, π]
///
/// x = r1 · Rθ(θ) cos θ · ρφ cos φ
/// y = r1 · Rθ(θ) sin θ · ρφ cos φ
/// z = r1 · ρφ sin φ
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperShape {
    pub r1: Real,
    pub theta: Superformula,
    pub r2: Real,
    pub phi: Superformula,
}

impl SuperShape {
    /// Build from the two flattened superformula parameter sets.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r1: Real,
        a1: Real,
        b1: Real,
        m1: Real,
        n11: Real,
        n21: Real,
        n31: Real,
        r2: Real,
        a2: Real,
        b2: Real,
        m2: Real,
        n12: Real,
        n22: Real,
        n32: Real,
    ) -> Self {
        SuperShape {
            r1,
            theta: Superformula::new(a1, b1, m1, n11, n21, n31),
            r2,
            phi: Superformula::new(a2, b2, m2, n12, n22, n32),
        }
    }

    /// Both superformulas reduce to the unit circle, leaving a sphere of `radius`.
    pub const fn sphere(radius: Real) -> Self {
        SuperShape {
            r1: 1.0,
            theta: Superformula::circle(),
            r2: radius,
            phi: Superformula::circle(),
        }
    }

    /// The fourteen parameters in `(r1, a1, b1, m1, n11, n21, n31, r2, a2, b2, m2, n12, n22, n32)` order.
    pub const fn parameters(&self) -> [Real; 14] {
        let t = &self.theta;
        let p = &self.phi;
        [
            self.r1, t.a, t.b, t.m, t.n1, t.n2, t.n3, self.r2, p.a, p.b, p.m, p.n1, p.n2, p.n3,
        ]
    }

    /// Tessellate the surface into `res_theta × res_phi` cells.
    ///
    /// ## Grid layout
    /// ```text
    /// (res_theta + 1) × (res_phi + 1) vertices, row-major by φ:
    ///     index(i, j) = j · (res_theta + 1) + i
    ///     uv(i, j)    = (i / res_theta, j / res_phi)
    ///
    /// column res_theta  duplicates column 0 (same position and normal, u = 1)
    /// rows 0 and res_phi are the poles: every vertex of the row is the same point
    /// ```
    ///
    /// Each cell becomes two triangles `(v00, v10, v11)` and `(v00, v11, v01)`,
    /// counter-clockwise seen from outside, so there are always
    /// `6 · res_theta · res_phi` indices. At the poles one of the two triangles
    /// has zero area.
    ///
    /// ## Normals
    /// Area-weighted face normals are accumulated per vertex, shared across the
    /// seam and across each pole row, then normalized. If the parameters mirror
    /// the surface (negative signed volume) the winding is reversed first so
    /// normals keep facing outward.
    ///
    /// ## Degenerate input
    /// Either resolution below [`MIN_RESOLUTION`] (including zero and negative
    /// values) yields an empty mesh; above [`MAX_RESOLUTION`] it is clamped.
    /// Non-finite `r1`/`r2` act as `0`, and superformula radii are clamped as
    /// described in [`Superformula::radius`], so no NaN or infinity reaches the output.
    pub fn generate(&self, res_theta: i32, res_phi: i32) -> GeometryData {
        let (Some(res_theta), Some(res_phi)) = (
            checked_resolution("res_theta", res_theta),
            checked_resolution("res_phi", res_phi),
        ) else {
            return GeometryData::new();
        };

        let columns = res_theta + 1;
        let rows = res_phi + 1;

        let r1 = finite_or_zero(self.r1);
        let r2 = finite_or_zero(self.r2);

        // (Rθ cos θ, Rθ sin θ) per column, the seam column reusing column 0
        let mut longitude: Vec<(Real, Real)> = (0..res_theta)
            .map(|i| {
                let theta = -PI + TAU * (i as Real) / (res_theta as Real);
                let rho = self.theta.radius(theta);
                (rho * theta.cos(), rho * theta.sin())
            })
            .collect();
        longitude.push(longitude[0]);

        // (ρφ cos φ, ρφ sin φ) per row, with exact poles
        let latitude: Vec<(Real, Real)> = (0..rows)
            .map(|j| {
                let phi = -FRAC_PI_2 + PI * (j as Real) / (res_phi as Real);
                let (cos_phi, sin_phi) = if j == 0 {
                    (0.0, -1.0)
                } else if j == res_phi {
                    (0.0, 1.0)
                } else {
                    (phi.cos(), phi.sin())
                };
                let rho = r2 * self.phi.radius(phi);
                (rho * cos_phi, rho * sin_phi)
            })
            .collect();

        let vertex_at = |index: usize| -> Vertex {
            let (i, j) = (index % columns, index / columns);
            let (lx, ly) = longitude[i];
            let (ring, z) = latitude[j];
            Vertex::new(
                Point3::new(r1 * (lx * ring), r1 * (ly * ring), r1 * z),
                Vector3::zeros(),
                Point2::new(i as Real / res_theta as Real, j as Real / res_phi as Real),
            )
        };

        #[cfg(feature = "parallel")]
        let vertices: Vec<Vertex> = (0..columns * rows).into_par_iter().map(vertex_at).collect();

        #[cfg(not(feature = "parallel"))]
        let vertices: Vec<Vertex> = (0..columns * rows).map(vertex_at).collect();

        let mut geometry = GeometryData::with_capacity(columns * rows, 2 * res_theta * res_phi);
        for vertex in vertices {
            geometry.push_vertex(vertex);
        }

        for j in 0..res_phi {
            for i in 0..res_theta {
                let v00 = (j * columns + i) as u32;
                let v10 = v00 + 1;
                let v01 = v00 + columns as u32;
                let v11 = v01 + 1;

                geometry.push_triangle(v00, v10, v11);
                geometry.push_triangle(v00, v11, v01);
            }
        }

        if geometry.signed_volume() < 0.0 {
            geometry.flip_winding();
        }

        let mut accumulated = geometry.accumulate_face_normals();
        share_seam_and_poles(&mut accumulated, columns, rows);
        geometry.set_normals_from_accumulated(accumulated);

        debug!(
            "supershape {}x{}: {} vertices, {} triangles",
            res_theta,
            res_phi,
            geometry.vertex_count(),
            geometry.triangle_count()
        );

        geometry
    }
}

impl Default for SuperShape {
    fn default() -> Self {
        SuperShape::new(
            1.0, 1.0, 1.0, 10.0, 1.087265, 0.938007, -0.615898, 0.984062, 1.513944, 0.642890,
            5.225158, 1.0, 1.371561, 0.651718,
        )
    }
}

/// Generate a supershape mesh from the two flattened superformula parameter
/// sets and the tessellation resolution along each angle.
///
/// Equivalent to `SuperShape::new(..).generate(res_theta, res_phi)`.
///
/// # Example
/// ```rust
/// use supershape::generate_super_shape_geometry_data;
///
/// let sphere = generate_super_shape_geometry_data(
///     1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0,
///     2.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0,
///     16, 8,
/// );
/// assert_eq!(sphere.vertex_count(), 17 * 9);
/// assert_eq!(sphere.triangle_count(), 2 * 16 * 8);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn generate_super_shape_geometry_data(
    r1: f32,
    a1: f32,
    b1: f32,
    m1: f32,
    n11: f32,
    n21: f32,
    n31: f32,
    r2: f32,
    a2: f32,
    b2: f32,
    m2: f32,
    n12: f32,
    n22: f32,
    n32: f32,
    res_theta: i32,
    res_phi: i32,
) -> GeometryData {
    SuperShape::new(r1, a1, b1, m1, n11, n21, n31, r2, a2, b2, m2, n12, n22, n32)
        .generate(res_theta, res_phi)
}

fn checked_resolution(axis: &str, value: i32) -> Option<usize> {
    if value < MIN_RESOLUTION {
        warn!("supershape: {axis} = {value} is below {MIN_RESOLUTION}, generating an empty mesh");
        None
    } else if value > MAX_RESOLUTION {
        warn!("supershape: {axis} = {value} is above {MAX_RESOLUTION}, clamping");
        Some(MAX_RESOLUTION as usize)
    } else {
        Some(value as usize)
    }
}

#[inline]
fn finite_or_zero(value: Real) -> Real {
    if value.is_finite() { value } else { 0.0 }
}

/// Give duplicated vertices one shared normal: the two seam columns of every
/// row, and every vertex of the two pole rows.
fn share_seam_and_poles(accumulated: &mut [Vector3<Real>], columns: usize, rows: usize) {
    let last = columns - 1;

    for j in 0..rows {
        let row = &mut accumulated[j * columns..(j + 1) * columns];
        let seam = row[0] + row[last];
        row[0] = seam;
        row[last] = seam;
    }

    for j in [0, rows - 1] {
        let row = &mut accumulated[j * columns..(j + 1) * columns];
        let pole: Vector3<Real> = row[..last].iter().sum();
        row.fill(pole);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_resolution_bounds() {
        assert_eq!(checked_resolution("res_theta", -5), None);
        assert_eq!(checked_resolution("res_theta", 0), None);
        assert_eq!(checked_resolution("res_theta", 2), None);
        assert_eq!(checked_resolution("res_theta", 3), Some(3));
        assert_eq!(
            checked_resolution("res_theta", i32::MAX),
            Some(MAX_RESOLUTION as usize)
        );
    }

    #[test]
    fn parameters_round_trip_through_new() {
        let shape = SuperShape::default();
        let p = shape.parameters();
        let rebuilt = SuperShape::new(
            p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7], p[8], p[9], p[10], p[11], p[12], p[13],
        );
        assert_eq!(rebuilt, shape);
    }

    #[test]
    fn seam_and_pole_sharing() {
        // 3 columns (res_theta = 2) x 3 rows
        let mut acc = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, 0.0),
        ];
        share_seam_and_poles(&mut acc, 3, 3);

        // middle row: seam summed, interior untouched
        assert_eq!(acc[3], Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(acc[5], Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(acc[4], Vector3::new(5.0, 0.0, 0.0));

        // pole rows: one shared value per row
        assert!(acc[0..3].iter().all(|n| *n == Vector3::new(1.0, 1.0, 1.0)));
        assert!(acc[6..9].iter().all(|n| *n == Vector3::new(0.0, 0.0, -2.0)));
    }
}
