//! Ellipses centered at the origin and their image under a linear transform.

use crate::scalar::Float;
use crate::{Transform, EPSILON};

use core::f64::consts::PI;

/// An ellipse centered at the origin.
///
/// `rx` and `ry` are the semi-axis lengths and `x_rotation` the angle in degrees
/// between the x axis and the axis of length `rx`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ellipse {
    pub rx: f64,
    pub ry: f64,
    pub x_rotation: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(rx: f64, ry: f64, x_rotation: f64) -> Self {
        Ellipse { rx, ry, x_rotation }
    }

    /// Returns the ellipse obtained by applying the linear part of `m` to this one.
    ///
    /// The translation of `m` is ignored. The resulting axis angle lies in
    /// `[0, 90]` when the two axes can be told apart; circles get an angle of zero.
    pub fn transformed(&self, m: &Transform) -> Self {
        let rad = self.x_rotation * PI / 180.0;
        let c = rad.cos();
        let s = rad.sin();

        // Images of the two semi-axes, as the columns of a 2x2 matrix.
        let ma = [
            self.rx * (m.m11 * c + m.m21 * s),
            self.rx * (m.m12 * c + m.m22 * s),
            self.ry * (-m.m11 * s + m.m21 * c),
            self.ry * (-m.m12 * s + m.m22 * c),
        ];

        // The transformed ellipse is the set of points `p` with
        // `p^T (ma ma^T)^-1 p = 1`. Its semi-axes are the square roots of the
        // eigenvalues of `ma ma^T`.
        let j = ma[0] * ma[0] + ma[2] * ma[2];
        let k = ma[1] * ma[1] + ma[3] * ma[3];

        // Squared discriminant of the characteristic polynomial.
        let d = ((ma[0] - ma[3]) * (ma[0] - ma[3]) + (ma[2] + ma[1]) * (ma[2] + ma[1]))
            * ((ma[0] + ma[3]) * (ma[0] + ma[3]) + (ma[2] - ma[1]) * (ma[2] - ma[1]));

        let jk = (j + k) / 2.0;

        if d < EPSILON * jk {
            // Circle.
            let r = jk.sqrt();
            return Ellipse::new(r, r, 0.0);
        }

        let l = ma[0] * ma[1] + ma[2] * ma[3];
        let d = d.max(0.0).sqrt();

        let l1 = jk + d / 2.0;
        let l2 = (jk - d / 2.0).max(0.0);

        let mut x_rotation = if l.abs() < EPSILON && (l1 - k).abs() < EPSILON {
            90.0
        } else if l.abs() > (l1 - k).abs() {
            ((l1 - j) / l).atan() * 180.0 / PI
        } else {
            (l / (l1 - k)).atan() * 180.0 / PI
        };

        let (rx, ry) = if x_rotation >= 0.0 {
            (l1.sqrt(), l2.sqrt())
        } else {
            x_rotation += 90.0;
            (l2.sqrt(), l1.sqrt())
        };

        Ellipse::new(rx, ry, x_rotation)
    }

    /// True if one semi-axis is negligible compared to the other.
    pub fn is_degenerate(&self) -> bool {
        self.rx < EPSILON * self.ry || self.ry < EPSILON * self.rx
    }
}

#[cfg(test)]
fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    if (a - b).abs() > tolerance {
        std::panic!("{} != {} (tolerance {})", a, b, tolerance);
    }
}

#[test]
fn scale_non_uniform() {
    // A 20x40 ellipse rotated by -45° and scaled by (2, 1.5).
    let e = Ellipse::new(20.0, 40.0, -45.0).transformed(&Transform::scale(2.0, 1.5));

    assert_approx_eq(e.rx, 71.6, 0.01);
    assert_approx_eq(e.ry, 33.52, 0.01);
    assert_approx_eq(e.x_rotation, 32.04, 0.01);
    assert!(!e.is_degenerate());
}

#[test]
fn circle_stays_circle() {
    let rotation = Transform::rotation(crate::Angle::degrees(30.0));
    let e = Ellipse::new(15.0, 15.0, 12.0).transformed(&rotation.then_scale(2.0, 2.0));

    assert_approx_eq(e.rx, 30.0, 1e-9);
    assert_approx_eq(e.ry, 30.0, 1e-9);
    assert_eq!(e.x_rotation, 0.0);
}

#[test]
fn uniform_scale_keeps_rotation() {
    let e = Ellipse::new(30.0, 30.0, -45.0).transformed(&Transform::scale(0.5, 0.5));
    assert_approx_eq(e.rx, 15.0, 1e-9);
    assert_approx_eq(e.ry, 15.0, 1e-9);
    assert_eq!(e.x_rotation, 0.0);

    let e = Ellipse::new(20.0, 15.0, 90.0).transformed(&Transform::scale(1.0, -1.0));
    assert_approx_eq(e.rx, 20.0, 1e-9);
    assert_approx_eq(e.ry, 15.0, 1e-9);
    assert_approx_eq(e.x_rotation, 90.0, 1e-9);
}

#[test]
fn rotation_adds_to_axis_angle() {
    let rotation = Transform::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
    let e = Ellipse::new(20.0, 40.0, -45.0).transformed(&rotation);

    assert_approx_eq(e.rx, 20.0, 1e-9);
    assert_approx_eq(e.ry, 40.0, 1e-9);
    assert_approx_eq(e.x_rotation, 45.0, 1e-9);
}

#[test]
fn degenerate() {
    assert!(Ellipse::new(0.0, 40.0, 0.0).is_degenerate());
    assert!(Ellipse::new(20.0, 0.0, 0.0).is_degenerate());
    assert!(!Ellipse::new(1e-3, 1.0, 0.0).is_degenerate());

    let flattened = Ellipse::new(20.0, 40.0, 0.0).transformed(&Transform::scale(0.0, 1.0));
    assert!(flattened.is_degenerate());
}
