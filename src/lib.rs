//! Parametric **supershape** mesh generation.
//!
//! A supershape sweeps two [Gielis superformulas](https://en.wikipedia.org/wiki/Superformula)
//! against each other, one along the longitude and one along the latitude of a
//! sphere-like grid, producing shapes from spheres and cubes to stars and shells.
//! The result is a [`GeometryData`]: positions, unit normals, UVs and triangle
//! indices ready to upload to a rendering backend.
//!
//! ```rust
//! use supershape::shapes::SuperShape;
//!
//! let mesh = SuperShape::default().generate(64, 64);
//! assert_eq!(mesh.vertex_count(), 65 * 65);
//! assert!(mesh.validate().is_ok());
//! ```
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - [**gltf-io**](https://www.khronos.org/gltf/): `.gltf` export with embedded buffers
//! - **hashmap**: enables use of hashbrown for `is_closed` and `boundary_edge_count`
//!
//! #### Optional
//! - **parallel**: use rayon to evaluate vertices in parallel (output is bit-identical)
//! - **wasm**: `wasm-bindgen` bindings, including `generateSuperShapeGeometryData`

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod shapes;
pub mod superformula;
pub mod triangulated;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use geometry::GeometryData;
pub use shapes::{SuperShape, SuperShapeGeometry, generate_super_shape_geometry_data};
pub use superformula::Superformula;
