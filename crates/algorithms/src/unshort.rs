//! Expand smooth curve shorthands (`S`, `T`) into full curves (`C`, `Q`).

use crate::geom::{point, vector, Point, Vector};
use crate::path::{Path, Rewrite, Segment, Verb};

/// Replaces `S`/`s` with `C`/`c` and `T`/`t` with `Q`/`q`.
///
/// The implicit first control point is the reflection of the previous
/// segment's last control point about the current point when the previous
/// segment is a curve of the same kind, and the current point otherwise. The
/// previous segment is considered after its own expansion.
pub fn expand_shorthands(path: &mut Path) {
    let mut previous: Option<Segment> = None;

    path.rewrite(|segment, index, at| {
        let p = segment.params();
        let relative = segment.is_relative();

        let expanded = match segment.verb() {
            _ if index == 0 => None,
            Verb::SmoothQuadraticTo => {
                let handle = previous.as_ref().and_then(quadratic_handle);
                let ctrl = reflect(handle, at, relative);
                Some(Segment::quadratic_to(relative, [ctrl.x, ctrl.y, p[0], p[1]]))
            }
            Verb::SmoothCubicTo => {
                let handle = previous.as_ref().and_then(cubic_handle);
                let ctrl = reflect(handle, at, relative);
                Some(Segment::cubic_to(
                    relative,
                    [ctrl.x, ctrl.y, p[0], p[1], p[2], p[3]],
                ))
            }
            _ => None,
        };

        match expanded {
            Some(expanded) => {
                previous = Some(expanded.clone());
                Rewrite::Replace(expanded)
            }
            None => {
                previous = Some(segment.clone());
                Rewrite::Keep
            }
        }
    });
}

/// Position of the control point of a quadratic curve relative to its end point.
fn quadratic_handle(segment: &Segment) -> Option<Vector> {
    if segment.verb() != Verb::QuadraticTo {
        return None;
    }

    let p = segment.params();
    Some(vector(p[0] - p[2], p[1] - p[3]))
}

/// Position of the second control point of a cubic curve relative to its end point.
fn cubic_handle(segment: &Segment) -> Option<Vector> {
    if segment.verb() != Verb::CubicTo {
        return None;
    }

    let p = segment.params();
    Some(vector(p[2] - p[4], p[3] - p[5]))
}

fn reflect(handle: Option<Vector>, at: Point, relative: bool) -> Point {
    let mut ctrl = match handle {
        Some(handle) => point(-handle.x, -handle.y),
        None => point(0.0, 0.0),
    };

    if !relative {
        ctrl.x += at.x;
        ctrl.y += at.y;
    }

    ctrl
}

#[cfg(test)]
fn unshort(src: &str) -> String {
    let mut path = crate::path::parse(src).unwrap();
    expand_shorthands(&mut path);
    path.to_string()
}

#[test]
fn cubic() {
    assert_eq!(unshort("M10 10 C 20 20, 40 20, 50 10"), "M10 10C20 20 40 20 50 10");
    assert_eq!(
        unshort("M10 10 C 20 20, 40 20, 50 10 S 80 0, 90 10"),
        "M10 10C20 20 40 20 50 10 60 0 80 0 90 10"
    );
    assert_eq!(unshort("M10 10 S 50 50, 90 10"), "M10 10C10 10 50 50 90 10");
    assert_eq!(
        unshort("M30 50 c 10 30, 30 30, 40 0 s 30 -30, 40 0"),
        "M30 50c10 30 30 30 40 0 10-30 30-30 40 0"
    );
}

#[test]
fn quadratic() {
    assert_eq!(unshort("M10 10 Q 50 50, 90 10"), "M10 10Q50 50 90 10");
    assert_eq!(
        unshort("M30 50 Q 50 90, 90 50 T 150 50"),
        "M30 50Q50 90 90 50 130 10 150 50"
    );
    assert_eq!(unshort("M10 30 T150 50"), "M10 30Q10 30 150 50");
    assert_eq!(
        unshort("M30 50 q 20 20, 40 0 t 40 0"),
        "M30 50q20 20 40 0 20-20 40 0"
    );
}

#[test]
fn chained_shorthands() {
    // Each `T` reflects the control point computed for the previous one.
    assert_eq!(
        unshort("M0 0 Q 10 10 20 0 T 40 0 T 60 0"),
        "M0 0Q10 10 20 0 30-10 40 0 50 10 60 0"
    );
    // A cubic does not provide a control point to a `T`.
    assert_eq!(unshort("M0 0 C 0 10 10 10 10 0 T 20 0"), "M0 0C0 10 10 10 10 0Q10 0 20 0");
}
