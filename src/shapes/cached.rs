//! A supershape whose mesh is regenerated only when one of its parameters changes.

use super::supershape::{DEFAULT_RESOLUTION, SuperShape};
use crate::float_types::Real;
use crate::geometry::GeometryData;
use log::trace;

/// Holds the parameters of a [`SuperShape`] together with the mesh generated
/// from them. Setters only invalidate the mesh when the new value actually
/// differs (bitwise), and [`geometry`](Self::geometry) regenerates lazily.
///
/// A single `resolution` is used for both angles.
///
/// ```rust
/// use supershape::shapes::SuperShapeGeometry;
///
/// let mut shape = SuperShapeGeometry::default();
/// shape.set_resolution(24);
/// let triangles = shape.geometry().triangle_count();
/// assert_eq!(triangles, 2 * 24 * 24);
///
/// shape.set_m1(10.0); // same value as the default: nothing to do
/// assert!(!shape.needs_update());
/// ```
#[derive(Debug, Clone)]
pub struct SuperShapeGeometry {
    shape: SuperShape,
    resolution: i32,
    geometry: GeometryData,
    dirty: bool,
    generation: u64,
}

macro_rules! parameter_setters {
    ($($(#[$meta:meta])* $name:ident => $($field:ident).+;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, value: Real) {
                if self.shape.$($field).+.to_bits() != value.to_bits() {
                    self.shape.$($field).+ = value;
                    self.dirty = true;
                }
            }
        )*
    };
}

impl SuperShapeGeometry {
    pub fn new(shape: SuperShape, resolution: i32) -> Self {
        SuperShapeGeometry {
            shape,
            resolution,
            geometry: GeometryData::new(),
            dirty: true,
            generation: 0,
        }
    }

    pub const fn shape(&self) -> &SuperShape {
        &self.shape
    }

    pub const fn resolution(&self) -> i32 {
        self.resolution
    }

    /// `true` when the next call to [`geometry`](Self::geometry) will regenerate.
    pub const fn needs_update(&self) -> bool {
        self.dirty
    }

    /// How many times the mesh has been generated so far.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace every parameter at once.
    pub fn set_shape(&mut self, shape: SuperShape) {
        let changed = self
            .shape
            .parameters()
            .iter()
            .zip(shape.parameters())
            .any(|(old, new)| old.to_bits() != new.to_bits());
        if changed {
            self.shape = shape;
            self.dirty = true;
        }
    }

    pub fn set_resolution(&mut self, resolution: i32) {
        if self.resolution != resolution {
            self.resolution = resolution;
            self.dirty = true;
        }
    }

    parameter_setters! {
        set_r1 => r1;
        set_a1 => theta.a;
        set_b1 => theta.b;
        set_m1 => theta.m;
        set_n11 => theta.n1;
        set_n21 => theta.n2;
        set_n31 => theta.n3;
        set_r2 => r2;
        set_a2 => phi.a;
        set_b2 => phi.b;
        set_m2 => phi.m;
        set_n12 => phi.n1;
        set_n22 => phi.n2;
        set_n32 => phi.n3;
    }

    /// The mesh for the current parameters, regenerated first if anything changed.
    pub fn geometry(&mut self) -> &GeometryData {
        if self.dirty {
            self.geometry = self.shape.generate(self.resolution, self.resolution);
            self.dirty = false;
            self.generation += 1;
        } else {
            trace!("supershape geometry unchanged, reusing generation {}", self.generation);
        }
        &self.geometry
    }

    /// Take the mesh for the current parameters.
    pub fn into_geometry(mut self) -> GeometryData {
        self.geometry();
        self.geometry
    }
}

impl Default for SuperShapeGeometry {
    fn default() -> Self {
        SuperShapeGeometry::new(SuperShape::default(), DEFAULT_RESOLUTION)
    }
}
