//! Approximate cubic bézier curves with quadratic ones.

use crate::geom::{point, CubicBezierSegment, QuadraticBezierSegment};
use crate::path::{Path, Rewrite, Segment, Verb};

/// Maximum distance between a cubic curve and its quadratic approximation
/// used by [`cubics_to_quadratics`].
pub const DEFAULT_CUBIC_TOLERANCE: f64 = 1e-4;

/// Replaces every `C`/`c` segment with a sequence of `Q`/`q` segments.
///
/// The generated segments keep the relativeness of the curve they replace.
pub fn cubics_to_quadratics(path: &mut Path) {
    cubics_to_quadratics_with_tolerance(path, DEFAULT_CUBIC_TOLERANCE);
}

/// Same as [`cubics_to_quadratics`] with a custom tolerance.
pub fn cubics_to_quadratics_with_tolerance(path: &mut Path, tolerance: f64) {
    path.rewrite(|segment, _, at| {
        if segment.verb() != Verb::CubicTo {
            return Rewrite::Keep;
        }

        let p = segment.params();
        let relative = segment.is_relative();
        let (dx, dy) = if relative { (at.x, at.y) } else { (0.0, 0.0) };

        let curve = CubicBezierSegment {
            from: at,
            ctrl1: point(p[0] + dx, p[1] + dy),
            ctrl2: point(p[2] + dx, p[3] + dy),
            to: point(p[4] + dx, p[5] + dy),
        };

        let mut quadratics = Vec::new();
        let mut last = at;
        curve.for_each_quadratic_bezier(tolerance, &mut |q: &QuadraticBezierSegment<f64>| {
            let (ox, oy) = if relative { (last.x, last.y) } else { (0.0, 0.0) };
            quadratics.push(Segment::quadratic_to(
                relative,
                [q.ctrl.x - ox, q.ctrl.y - oy, q.to.x - ox, q.to.y - oy],
            ));
            last = q.to;
        });

        if quadratics.is_empty() {
            return Rewrite::Replace(Segment::line_to(relative, p[4], p[5]));
        }

        Rewrite::Splice(quadratics)
    });
}

#[cfg(test)]
use crate::path::Cursor;

#[cfg(test)]
fn end_points(path: &Path) -> Vec<(f64, f64)> {
    let mut cursor = Cursor::new();
    let mut points = Vec::new();
    for segment in path.iter() {
        cursor.advance(segment);
        points.push((cursor.position().x, cursor.position().y));
    }
    points
}

#[test]
fn curves_end_where_the_cubic_ends() {
    for src in &[
        "M10 10 C 20 40 40 40 50 10",
        "M10 10 c 10 30 30 30 40 0",
        "M0 0 C 100 0 0 100 100 100 l 10 10",
        "M5 5 c 20 -30 -10 60 40 0 c 10 0 10 10 0 10",
    ] {
        let original = crate::path::parse(src).unwrap();
        let mut path = original.clone();
        cubics_to_quadratics(&mut path);

        assert!(path.len() > original.len(), "{}", src);
        assert!(path.iter().all(|s| s.verb() != Verb::CubicTo));

        let expected = end_points(&original);
        let actual = end_points(&path);
        let last = |points: &[(f64, f64)]| points[points.len() - 1];
        assert!((last(&expected).0 - last(&actual).0).abs() < 1e-9, "{}", src);
        assert!((last(&expected).1 - last(&actual).1).abs() < 1e-9, "{}", src);
    }
}

#[test]
fn relativeness_is_kept() {
    let mut path = crate::path::parse("M10 10 c 10 30 30 30 40 0 C 60 40 80 40 90 10").unwrap();
    cubics_to_quadratics(&mut path);

    let mut relative = 0;
    let mut absolute = 0;
    for segment in path.iter().skip(1) {
        assert_eq!(segment.verb(), Verb::QuadraticTo);
        if segment.is_relative() {
            relative += 1;
        } else {
            absolute += 1;
        }
    }
    assert!(relative > 0);
    assert!(absolute > 0);
}

#[test]
fn coarse_tolerance() {
    let mut fine = crate::path::parse("M0 0 C 0 100 100 100 100 0").unwrap();
    let mut coarse = fine.clone();
    cubics_to_quadratics(&mut fine);
    cubics_to_quadratics_with_tolerance(&mut coarse, 10.0);

    assert!(coarse.len() >= 2);
    assert!(coarse.len() < fine.len());
}

#[test]
fn other_segments_are_untouched() {
    let mut path = crate::path::parse("M0 0L10 10Q20 20 30 10ZA5 5 0 0 1 10 10").unwrap();
    let expected = path.to_string();
    cubics_to_quadratics(&mut path);
    assert_eq!(path.to_string(), expected);
}
