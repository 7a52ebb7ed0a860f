//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use supershape::{GeometryData, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `true` if every position, normal and uv component is finite.
pub fn all_finite(geometry: &GeometryData) -> bool {
    geometry.vertices.iter().all(|p| p.coords.iter().all(|c| c.is_finite()))
        && geometry.normals.iter().all(|n| n.iter().all(|c| c.is_finite()))
        && geometry.uvs.iter().all(|t| t.coords.iter().all(|c| c.is_finite()))
}

/// Bit patterns of every buffer, for exact comparison.
pub fn bits(geometry: &GeometryData) -> (Vec<u32>, Vec<u32>, Vec<u32>, Vec<u32>) {
    (
        geometry
            .vertices
            .iter()
            .flat_map(|p| p.coords.iter().map(|c| c.to_bits()).collect::<Vec<_>>())
            .collect(),
        geometry
            .normals
            .iter()
            .flat_map(|n| n.iter().map(|c| c.to_bits()).collect::<Vec<_>>())
            .collect(),
        geometry
            .uvs
            .iter()
            .flat_map(|t| t.coords.iter().map(|c| c.to_bits()).collect::<Vec<_>>())
            .collect(),
        geometry.indices.clone(),
    )
}

/// Fraction of vertices whose normal points away from the origin.
pub fn outward_fraction(geometry: &GeometryData) -> Real {
    let outward = geometry
        .vertices
        .iter()
        .zip(&geometry.normals)
        .filter(|(p, n)| p.coords.dot(n) > 0.0)
        .count();
    outward as Real / geometry.vertex_count().max(1) as Real
}
