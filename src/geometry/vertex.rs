//! Struct for a single vertex view of a [`GeometryData`](super::GeometryData).

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};

/// A vertex of a mesh, holding position, normal and texture coordinate.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub position: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Point2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `position` – the position in model space
    /// * `normal`   – copied verbatim, so make sure it is normalized and oriented the way you need it for lighting
    /// * `uv`       – texture coordinate
    ///
    /// Any non-finite component is replaced by `0.0`.
    #[inline]
    pub fn new(mut position: Point3<Real>, mut normal: Vector3<Real>, mut uv: Point2<Real>) -> Self {
        sanitise(position.coords.iter_mut());
        sanitise(normal.iter_mut());
        sanitise(uv.coords.iter_mut());

        Vertex { position, normal, uv }
    }
}

#[inline]
fn sanitise<'a>(components: impl Iterator<Item = &'a mut Real>) {
    for c in components {
        if !c.is_finite() {
            *c = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_components_are_zeroed() {
        let v = Vertex::new(
            Point3::new(Real::NAN, 1.0, Real::INFINITY),
            Vector3::new(0.0, Real::NEG_INFINITY, 1.0),
            Point2::new(0.5, Real::NAN),
        );
        assert_eq!(v.position, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(v.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(v.uv, Point2::new(0.5, 0.0));
    }
}
