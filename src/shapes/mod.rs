//! Parametric shape generators producing [`GeometryData`](crate::geometry::GeometryData).

pub mod cached;
pub mod supershape;

pub use cached::SuperShapeGeometry;
pub use supershape::{
    DEFAULT_RESOLUTION, MAX_RESOLUTION, MIN_RESOLUTION, SuperShape,
    generate_super_shape_geometry_data,
};
