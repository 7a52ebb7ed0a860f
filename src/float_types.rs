// Our Real scalar type. Rendering backends consume single precision, so the
// whole crate computes in f32.
pub type Real = f32;

use core::str::FromStr;
use std::sync::OnceLock;

/// A small epsilon for degenerate-input guards (zero divisors, zero exponents).
pub const EPSILON: Real = 1e-4;

/// Upper bound for any superformula radius before scaling by `r1`/`r2`.
pub const RADIUS_LIMIT: Real = 1.0e4;

/// Lazily-initialized tolerance used across the crate.
/// Defaults to `1e-4`, but can be overridden:
///  1) **Build-time**: set env var `SUPERSHAPE_TOLERANCE` (e.g. `SUPERSHAPE_TOLERANCE=1e-5 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-4
}

/// Returns the current tolerance value.
/// If not set yet, it tries `SUPERSHAPE_TOLERANCE` (parsed as `Real`) and
/// falls back to the default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("SUPERSHAPE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `supershape::float_types::set_tolerance(1e-5);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Archimedes' constant (π)
pub const PI: Real = core::f32::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;

/// The full circle constant (τ)
pub const TAU: Real = core::f32::consts::TAU;
