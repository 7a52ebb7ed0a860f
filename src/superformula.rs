//! The Gielis superformula, the radius function both axes of a supershape are built from.

use crate::float_types::{EPSILON, RADIUS_LIMIT, Real};

/// One superformula parameter set.
///
/// ```text
/// r(θ) = ( |cos(mθ/4) / a|^n2 + |sin(mθ/4) / b|^n3 ) ^ (-1/n1)
/// ```
///
/// * `a`, `b` – scale of the cosine and sine terms
/// * `m`      – rotational symmetry (number of lobes)
/// * `n1`     – overall exponent
/// * `n2`, `n3` – exponents of the cosine and sine terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superformula {
    pub a: Real,
    pub b: Real,
    pub m: Real,
    pub n1: Real,
    pub n2: Real,
    pub n3: Real,
}

impl Superformula {
    pub const fn new(a: Real, b: Real, m: Real, n1: Real, n2: Real, n3: Real) -> Self {
        Superformula { a, b, m, n1, n2, n3 }
    }

    /// The parameter set whose radius is `1` for every angle.
    pub const fn circle() -> Self {
        Superformula::new(1.0, 1.0, 0.0, 1.0, 1.0, 1.0)
    }

    /// Evaluate the radius at `angle` (radians).
    ///
    /// The result is always finite and within `[0, RADIUS_LIMIT]`:
    /// - `a` or `b` closer to zero than `EPSILON` are pushed out to `±EPSILON`
    /// - `n1` closer to zero than `EPSILON` is pushed out to `±EPSILON`
    /// - an infinite radius is clamped to `RADIUS_LIMIT`, a NaN radius becomes `0`
    pub fn radius(&self, angle: Real) -> Real {
        let a = away_from_zero(self.a);
        let b = away_from_zero(self.b);
        let n1 = away_from_zero(self.n1);

        let t = self.m * angle * 0.25;
        let term1 = (t.cos() / a).abs().powf(self.n2);
        let term2 = (t.sin() / b).abs().powf(self.n3);
        let r = (term1 + term2).powf(-1.0 / n1);

        if r.is_nan() {
            0.0
        } else {
            r.clamp(0.0, RADIUS_LIMIT)
        }
    }
}

impl Default for Superformula {
    fn default() -> Self {
        Superformula::circle()
    }
}

/// Replace values within `EPSILON` of zero by `±EPSILON`, keeping the sign.
/// NaN maps to `EPSILON`.
#[inline]
fn away_from_zero(value: Real) -> Real {
    if value.is_nan() {
        EPSILON
    } else if value.abs() < EPSILON {
        EPSILON.copysign(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{PI, TAU};

    #[test]
    fn circle_has_unit_radius_everywhere() {
        let sf = Superformula::circle();
        for i in 0..64 {
            let angle = -PI + TAU * (i as Real) / 64.0;
            assert!((sf.radius(angle) - 1.0).abs() < 1e-6, "angle {angle}");
        }
    }

    #[test]
    fn square_symmetry_repeats_every_quarter_turn() {
        let sf = Superformula::new(1.0, 1.0, 4.0, 100.0, 100.0, 100.0);
        let r0 = sf.radius(0.3);
        let r1 = sf.radius(0.3 + PI * 0.5);
        assert!((r0 - r1).abs() < 1e-4);
    }

    #[test]
    fn zero_n1_stays_finite() {
        let sf = Superformula::new(1.0, 1.0, 6.0, 0.0, 1.0, 1.0);
        for i in 0..128 {
            let r = sf.radius(-PI + TAU * (i as Real) / 128.0);
            assert!(r.is_finite());
            assert!((0.0..=RADIUS_LIMIT).contains(&r));
        }
    }

    #[test]
    fn zero_scales_stay_finite() {
        let sf = Superformula::new(0.0, 0.0, 3.0, 1.0, 1.0, 1.0);
        assert!(sf.radius(0.7).is_finite());
    }

    #[test]
    fn nan_parameters_give_zero_radius() {
        let sf = Superformula::new(1.0, 1.0, Real::NAN, 1.0, 1.0, 1.0);
        assert_eq!(sf.radius(0.5), 0.0);
    }

    #[test]
    fn away_from_zero_keeps_sign() {
        assert_eq!(away_from_zero(0.0), EPSILON);
        assert_eq!(away_from_zero(-0.0), -EPSILON);
        assert_eq!(away_from_zero(-1e-7), -EPSILON);
        assert_eq!(away_from_zero(2.0), 2.0);
    }
}
