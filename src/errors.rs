//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible invariant violations a [`GeometryData`](crate::geometry::GeometryData) can have
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (MismatchedAttributeLengths) vertices, normals and uvs differ in length
    #[error("(MismatchedAttributeLengths) {vertices} vertices, {normals} normals, {uvs} uvs")]
    MismatchedAttributeLengths {
        vertices: usize,
        normals: usize,
        uvs: usize,
    },
    /// (IncompleteTriangle) The index buffer length is not a multiple of three
    #[error("(IncompleteTriangle) index buffer of length {0} is not made of triples")]
    IncompleteTriangle(usize),
    /// (IndexOutOfRange) An index references a vertex that does not exist
    #[error("(IndexOutOfRange) index {index} is out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (NonUnitNormal) A normal is not of unit length within tolerance
    #[error("(NonUnitNormal) normal of vertex {vertex} has length {length}")]
    NonUnitNormal { vertex: usize, length: Real },
}
