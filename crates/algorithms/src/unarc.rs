//! Replace elliptic arcs with cubic bézier curves.

use crate::geom::{point, vector, ArcFlags, SvgArc};
use crate::path::{Path, Rewrite, Segment, Verb};

use log::trace;

/// Approximates every arc with up to four absolute `C` segments.
///
/// Arcs that cannot be drawn (null radius, or end point equal to the start
/// point) become a line to their end point rather than being removed, so that
/// the segments after them keep their meaning.
pub fn arcs_to_cubics(path: &mut Path) {
    path.rewrite(|segment, _, at| {
        if segment.verb() != Verb::ArcTo {
            return Rewrite::Keep;
        }

        let p = segment.params();
        let relative = segment.is_relative();

        let to = if relative {
            point(at.x + p[5], at.y + p[6])
        } else {
            point(p[5], p[6])
        };

        let arc = SvgArc {
            from: at,
            to,
            radii: vector(p[0], p[1]),
            x_rotation: p[2],
            flags: ArcFlags {
                large_arc: p[3] != 0.0,
                sweep: p[4] != 0.0,
            },
        };

        let curves = arc.to_cubic_beziers();
        if curves.is_empty() {
            trace!("degenerate arc replaced by a line");
            return Rewrite::Replace(Segment::line_to(relative, p[5], p[6]));
        }

        Rewrite::Splice(
            curves
                .iter()
                .map(|curve| {
                    Segment::cubic_to(
                        false,
                        [
                            curve.ctrl1.x,
                            curve.ctrl1.y,
                            curve.ctrl2.x,
                            curve.ctrl2.y,
                            curve.to.x,
                            curve.to.y,
                        ],
                    )
                })
                .collect(),
        )
    });
}

#[cfg(test)]
fn unarc(src: &str) -> Path {
    let mut path = crate::path::parse(src).unwrap();
    arcs_to_cubics(&mut path);
    path
}

#[test]
fn curve_count() {
    let path = unarc("M100 100 A30 50 0 1 1 110 110");
    assert_eq!(path.len(), 5);
    assert!(path.iter().skip(1).all(|s| s.verb() == Verb::CubicTo && !s.is_relative()));

    let path = unarc("M100 100 a30 50 0 0 1 30 30");
    assert_eq!(path.len(), 2);
    let end = path[1].last_pair().unwrap();
    assert!((end.0 - 130.0).abs() < 1e-9);
    assert!((end.1 - 130.0).abs() < 1e-9);
}

#[test]
fn other_segments_are_untouched() {
    let path = unarc("M0 0L10 10h5v5Z");
    assert_eq!(path.to_string(), "M0 0L10 10h5v5Z");
}

#[test]
fn degenerate_arcs_become_lines() {
    assert_eq!(
        unarc("M100 100A123 456 90 0 1 100 100").to_string(),
        "M100 100L100 100"
    );
    assert_eq!(
        unarc("M100 100a123 456 90 0 1 0 0").to_string(),
        "M100 100l0 0"
    );
    assert_eq!(
        unarc("M100 100A0 0 0 0 1 110 110").to_string(),
        "M100 100L110 110"
    );
    assert_eq!(
        unarc("M100 100A0 100 0 0 1 110 110").to_string(),
        "M100 100L110 110"
    );
}

#[test]
fn empty_path() {
    assert_eq!(unarc("").to_string(), "");
}
