//! Coulomb potential and field of a single point charge.
//!
//! Everything here is pure; summing contributions over the store happens in
//! [`crate::sampler`].

use std::f64::consts::PI;

/// Vacuum permittivity magnitude.
pub const EPSILON_0: f64 = 8.8541878128e-12;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointCharge {
    pub x: f64,
    pub y: f64,
    pub charge: f64,
}

impl PointCharge {
    pub fn new(x: f64, y: f64, charge: f64) -> Self {
        Self { x, y, charge }
    }

    fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FieldVector {
    pub x: f64,
    pub y: f64,
}

impl FieldVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for FieldVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Potential of `charge` at `(x, y)`. Infinite when the point sits on the
/// charge.
pub fn electric_potential(charge: &PointCharge, x: f64, y: f64) -> f64 {
    let r = charge.distance_to(x, y);
    charge.charge / (4.0 * PI * EPSILON_0 * r)
}

/// Field of `charge` at `(x, y)`, directed along the unit vector from the
/// charge to the point. Non-finite when the point sits on the charge.
pub fn electric_field(charge: &PointCharge, x: f64, y: f64) -> FieldVector {
    let r = charge.distance_to(x, y);
    let e = charge.charge / (4.0 * PI * EPSILON_0 * r * r);
    FieldVector::new(e * (x - charge.x) / r, e * (y - charge.y) / r)
}

/// `sign(v) * sqrt(|v|)`, compresses the dynamic range for display.
pub fn signed_sqrt(v: f64) -> f64 {
    if v > 0.0 {
        v.sqrt()
    } else {
        -(-v).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn potential_matches_coulomb() {
        let q = PointCharge::new(0.0, 0.0, 2.0);
        let v = electric_potential(&q, 3.0, 4.0);
        let expected = 2.0 / (4.0 * PI * EPSILON_0 * 5.0);
        assert!((v - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn field_magnitude_is_inverse_square() {
        let q = PointCharge::new(10.0, 10.0, 1.0);
        let near = electric_field(&q, 12.0, 10.0).magnitude();
        let far = electric_field(&q, 14.0, 10.0).magnitude();
        assert!((near / far - 4.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_point_is_not_finite() {
        let q = PointCharge::new(5.0, 5.0, 1.0);
        assert!(!electric_potential(&q, 5.0, 5.0).is_finite());
        assert!(!electric_field(&q, 5.0, 5.0).is_finite());
    }

    #[test]
    fn signed_sqrt_keeps_sign() {
        assert_eq!(signed_sqrt(9.0), 3.0);
        assert_eq!(signed_sqrt(-16.0), -4.0);
        assert_eq!(signed_sqrt(0.0), 0.0);
        assert!(!signed_sqrt(f64::INFINITY).is_finite());
    }

    proptest! {
        #[test]
        fn potential_decreases_along_ray(
            q in 0.1f64..10.0,
            angle in 0.0f64..std::f64::consts::TAU,
            r in 1.0f64..500.0,
            step in 0.5f64..100.0,
        ) {
            let c = PointCharge::new(100.0, 100.0, q);
            let (dx, dy) = (angle.cos(), angle.sin());
            let near = electric_potential(&c, 100.0 + dx * r, 100.0 + dy * r);
            let far = electric_potential(
                &c,
                100.0 + dx * (r + step),
                100.0 + dy * (r + step),
            );
            prop_assert!(far.abs() < near.abs());
        }

        #[test]
        fn field_is_radial(
            q in 0.1f64..10.0,
            negative in any::<bool>(),
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
        ) {
            prop_assume!(x.hypot(y) > 1e-3);
            let q = if negative { -q } else { q };
            let c = PointCharge::new(0.0, 0.0, q);
            let e = electric_field(&c, x, y);
            // Projection onto the outward radial direction, normalised.
            let radial = (e.x * x + e.y * y) / (e.magnitude() * x.hypot(y));
            let tangential = (e.x * y - e.y * x) / (e.magnitude() * x.hypot(y));
            if negative {
                prop_assert!((radial + 1.0).abs() < 1e-9);
            } else {
                prop_assert!((radial - 1.0).abs() < 1e-9);
            }
            prop_assert!(tangential.abs() < 1e-9);
        }
    }
}
