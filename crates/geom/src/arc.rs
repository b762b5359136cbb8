//! Elliptic arcs as found in SVG path data, and their approximation with cubic
//! bézier curves.
//!
//! An [`SvgArc`] is described by its endpoints, radii, x-axis rotation and flags,
//! the way path data spells it. [`SvgArc::to_center_arc`] computes the equivalent
//! center parameterization ([`CenterArc`]), which is split in pieces of at most a
//! quarter turn, each approximated with one cubic bézier curve.

use crate::scalar::Float;
use crate::{point, ArcFlags, CubicBezierSegment, Point, Vector};

use arrayvec::ArrayVec;
use core::f64::consts::TAU;

/// An elliptic arc in endpoint parameterization.
///
/// `x_rotation` is in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: f64,
    pub flags: ArcFlags,
}

/// An elliptic arc in center parameterization.
///
/// `x_rotation` is in degrees, `start_angle` and `sweep_angle` are in radians and
/// measured on the unit circle before scaling by the radii. A positive sweep goes
/// from the x axis towards the y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CenterArc {
    pub center: Point,
    pub radii: Vector,
    pub x_rotation: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl SvgArc {
    /// Converts to center parameterization.
    ///
    /// Returns `None` when the endpoints coincide or when a radius is zero. Radii
    /// that are too small to join the endpoints are scaled up uniformly.
    pub fn to_center_arc(&self) -> Option<CenterArc> {
        let (x1, y1) = (self.from.x, self.from.y);
        let (x2, y2) = (self.to.x, self.to.y);

        let sin_phi = (self.x_rotation * TAU / 360.0).sin();
        let cos_phi = (self.x_rotation * TAU / 360.0).cos();

        // Midpoint frame: origin between the endpoints, axes along the ellipse's.
        let x1p = cos_phi * (x1 - x2) / 2.0 + sin_phi * (y1 - y2) / 2.0;
        let y1p = -sin_phi * (x1 - x2) / 2.0 + cos_phi * (y1 - y2) / 2.0;

        if x1p == 0.0 && y1p == 0.0 {
            return None;
        }

        if self.radii.x == 0.0 || self.radii.y == 0.0 {
            return None;
        }

        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let rx_sq = rx * rx;
        let ry_sq = ry * ry;
        let x1p_sq = x1p * x1p;
        let y1p_sq = y1p * y1p;

        // Rounding errors can make this slightly negative.
        let mut radicant = (rx_sq * ry_sq) - (rx_sq * y1p_sq) - (ry_sq * x1p_sq);
        if radicant < 0.0 {
            radicant = 0.0;
        }
        radicant /= (rx_sq * y1p_sq) + (ry_sq * x1p_sq);

        let sign = if self.flags.large_arc == self.flags.sweep {
            -1.0
        } else {
            1.0
        };
        let radicant = radicant.sqrt() * sign;

        let cxp = radicant * rx / ry * y1p;
        let cyp = radicant * -ry / rx * x1p;

        let cx = cos_phi * cxp - sin_phi * cyp + (x1 + x2) / 2.0;
        let cy = sin_phi * cxp + cos_phi * cyp + (y1 + y2) / 2.0;

        let v1x = (x1p - cxp) / rx;
        let v1y = (y1p - cyp) / ry;
        let v2x = (-x1p - cxp) / rx;
        let v2y = (-y1p - cyp) / ry;

        let start_angle = unit_vector_angle(1.0, 0.0, v1x, v1y);
        let mut sweep_angle = unit_vector_angle(v1x, v1y, v2x, v2y);

        if !self.flags.sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        }
        if self.flags.sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        Some(CenterArc {
            center: point(cx, cy),
            radii: Vector::new(rx, ry),
            x_rotation: self.x_rotation,
            start_angle,
            sweep_angle,
        })
    }

    /// Approximates the arc with up to four cubic bézier curves.
    ///
    /// The result is empty when the arc has no center parameterization (see
    /// [`SvgArc::to_center_arc`]); such arcs are drawn as a straight line.
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<f64>, 4> {
        match self.to_center_arc() {
            Some(arc) => arc.to_cubic_beziers(),
            None => ArrayVec::new(),
        }
    }
}

impl CenterArc {
    /// Approximates the arc with one cubic bézier curve per started quarter turn.
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<f64>, 4> {
        let mut result = ArrayVec::new();

        let segments = (self.sweep_angle.abs() / (TAU / 4.0)).ceil().max(1.0).min(4.0);
        let step = self.sweep_angle / segments;

        let sin_phi = (self.x_rotation * TAU / 360.0).sin();
        let cos_phi = (self.x_rotation * TAU / 360.0).cos();

        let map = |p: Point| {
            let x = p.x * self.radii.x;
            let y = p.y * self.radii.y;

            let xp = cos_phi * x - sin_phi * y;
            let yp = sin_phi * x + cos_phi * y;

            point(xp + self.center.x, yp + self.center.y)
        };

        let mut angle = self.start_angle;
        for _ in 0..(segments as usize) {
            let unit = approximate_unit_arc(angle, step);
            result.push(CubicBezierSegment {
                from: map(unit.from),
                ctrl1: map(unit.ctrl1),
                ctrl2: map(unit.ctrl2),
                to: map(unit.to),
            });
            angle += step;
        }

        result
    }
}

/// Approximates an arc of the unit circle with a cubic bézier curve.
///
/// The arc starts at `start_angle` and sweeps `sweep_angle` radians, which should
/// not exceed a quarter turn for a good fit.
pub fn approximate_unit_arc(start_angle: f64, sweep_angle: f64) -> CubicBezierSegment<f64> {
    let alpha = 4.0 / 3.0 * (sweep_angle / 4.0).tan();

    let x1 = start_angle.cos();
    let y1 = start_angle.sin();
    let x2 = (start_angle + sweep_angle).cos();
    let y2 = (start_angle + sweep_angle).sin();

    CubicBezierSegment {
        from: point(x1, y1),
        ctrl1: point(x1 - y1 * alpha, y1 + x1 * alpha),
        ctrl2: point(x2 + y2 * alpha, y2 - x2 * alpha),
        to: point(x2, y2),
    }
}

/// Signed angle between two vectors of the same length.
fn unit_vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let sign = if ux * vy - uy * vx < 0.0 { -1.0 } else { 1.0 };

    // Clamp rounding errors such as -1.0000000000000002.
    let dot = (ux * vx + uy * vy).max(-1.0).min(1.0);

    sign * dot.acos()
}

#[cfg(test)]
fn svg_arc(from: Point, to: Point, rx: f64, ry: f64, x_rotation: f64, large_arc: bool, sweep: bool) -> SvgArc {
    SvgArc {
        from,
        to,
        radii: Vector::new(rx, ry),
        x_rotation,
        flags: ArcFlags { large_arc, sweep },
    }
}

#[test]
fn degenerate_arcs() {
    let same_point = svg_arc(point(100.0, 100.0), point(100.0, 100.0), 30.0, 50.0, 0.0, true, true);
    assert!(same_point.to_center_arc().is_none());
    assert!(same_point.to_cubic_beziers().is_empty());

    let zero_radius = svg_arc(point(100.0, 100.0), point(110.0, 110.0), 0.0, 50.0, 0.0, true, true);
    assert!(zero_radius.to_center_arc().is_none());

    let zero_radius = svg_arc(point(100.0, 100.0), point(110.0, 110.0), 30.0, 0.0, 0.0, true, true);
    assert!(zero_radius.to_cubic_beziers().is_empty());
}

#[test]
fn half_circle() {
    let arc = svg_arc(point(0.0, 0.0), point(20.0, 0.0), 10.0, 10.0, 0.0, false, true);
    let center = arc.to_center_arc().unwrap();

    assert!((center.center.x - 10.0).abs() < 1e-12);
    assert!(center.center.y.abs() < 1e-12);
    assert!((center.sweep_angle - TAU / 2.0).abs() < 1e-12);

    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 2);
    assert!(curves[0].from.x.abs() < 1e-12);
    assert!(curves[0].from.y.abs() < 1e-12);
    assert!((curves[1].to.x - 20.0).abs() < 1e-12);
    assert!(curves[1].to.y.abs() < 1e-12);

    // With the y axis pointing down, a positive sweep from left to right passes
    // above the chord.
    assert!((curves[0].to.x - 10.0).abs() < 1e-12);
    assert!((curves[0].to.y + 10.0).abs() < 1e-12);
}

#[test]
fn radii_are_scaled_up() {
    // Radii too small to join the endpoints.
    let arc = svg_arc(point(0.0, 0.0), point(20.0, 0.0), 1.0, 1.0, 0.0, false, false);
    let center = arc.to_center_arc().unwrap();

    assert!((center.radii.x - 10.0).abs() < 1e-12);
    assert!((center.radii.y - 10.0).abs() < 1e-12);
    assert!((center.sweep_angle + TAU / 2.0).abs() < 1e-12);
}

#[test]
fn large_arc_is_split_in_quarters() {
    let arc = svg_arc(point(100.0, 100.0), point(110.0, 110.0), 30.0, 50.0, 0.0, true, true);
    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 4);

    for pair in curves.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }

    let last = curves[3].to;
    assert!((last.x - 110.0).abs() < 1e-9);
    assert!((last.y - 110.0).abs() < 1e-9);
}

#[test]
fn unit_arc() {
    let quarter = approximate_unit_arc(0.0, TAU / 4.0);
    assert_eq!(quarter.from, point(1.0, 0.0));
    assert!(quarter.to.x.abs() < 1e-15);
    assert!((quarter.to.y - 1.0).abs() < 1e-15);

    // The classic 0.5523 handle length for a quarter circle.
    assert!((quarter.ctrl1.y - 0.5522847498).abs() < 1e-9);
    assert!((quarter.ctrl2.x - 0.5522847498).abs() < 1e-9);
}
