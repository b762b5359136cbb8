//! Apply an affine transform to path data.

use crate::geom::{point, vector, Ellipse, Point, Transform, TransformQueue};
use crate::path::{Path, Rewrite, Segment, Verb};

use log::trace;

/// Transforms every segment of `path` by the flattened `transforms`.
///
/// Relative coordinates are transformed by the linear part of the transform
/// only. A relative move-to at the start of the path is transformed as an
/// absolute one.
///
/// Horizontal and vertical lines stay so when the transform keeps them axis
/// aligned and become regular lines otherwise. Arcs get new radii and x-axis
/// rotation; their sweep flag is flipped when the transform does not preserve
/// orientation. Arcs that end where they start, and arcs whose transformed
/// ellipse is flat, become lines.
///
/// Does nothing if the queue is empty.
pub fn apply_transform(path: &mut Path, transforms: &mut TransformQueue) {
    if transforms.is_empty() {
        return;
    }

    let m = transforms.flatten();

    path.rewrite(|segment, index, at| {
        let p = segment.params();
        let relative = segment.is_relative();

        let transformed = match segment.verb() {
            Verb::VerticalLineTo => {
                if relative {
                    let d = map(&m, 0.0, p[0], true);
                    if d.x == 0.0 {
                        Segment::vertical_line_to(true, d.y)
                    } else {
                        Segment::line_to(true, d.x, d.y)
                    }
                } else {
                    let to = map(&m, at.x, p[0], false);
                    if to.x == map(&m, at.x, at.y, false).x {
                        Segment::vertical_line_to(false, to.y)
                    } else {
                        Segment::line_to(false, to.x, to.y)
                    }
                }
            }
            Verb::HorizontalLineTo => {
                if relative {
                    let d = map(&m, p[0], 0.0, true);
                    if d.y == 0.0 {
                        Segment::horizontal_line_to(true, d.x)
                    } else {
                        Segment::line_to(true, d.x, d.y)
                    }
                } else {
                    let to = map(&m, p[0], at.y, false);
                    if to.y == map(&m, at.x, at.y, false).y {
                        Segment::horizontal_line_to(false, to.x)
                    } else {
                        Segment::line_to(false, to.x, to.y)
                    }
                }
            }
            Verb::ArcTo => transform_arc(segment, at, &m),
            Verb::MoveTo => {
                let to = map(&m, p[0], p[1], relative && index > 0);
                Segment::move_to(relative, to.x, to.y)
            }
            Verb::Close => {
                return Rewrite::Keep;
            }
            _ => {
                let mut result = segment.clone();
                for pair in result.params_mut().chunks_exact_mut(2) {
                    let to = map(&m, pair[0], pair[1], relative);
                    pair[0] = to.x;
                    pair[1] = to.y;
                }
                result
            }
        };

        Rewrite::Replace(transformed)
    });
}

fn transform_arc(segment: &Segment, at: Point, m: &Transform) -> Segment {
    let p = segment.params();
    let relative = segment.is_relative();

    let to = map(m, p[5], p[6], relative);

    let empty = if relative {
        p[5] == 0.0 && p[6] == 0.0
    } else {
        p[5] == at.x && p[6] == at.y
    };
    if empty {
        trace!("arc ending at its start point replaced by a line");
        return Segment::line_to(relative, to.x, to.y);
    }

    let ellipse = Ellipse::new(p[0], p[1], p[2]).transformed(m);
    if ellipse.is_degenerate() {
        trace!("arc with a flat transformed ellipse replaced by a line");
        return Segment::line_to(relative, to.x, to.y);
    }

    let mut sweep = p[4];
    if m.m11 * m.m22 - m.m12 * m.m21 < 0.0 {
        sweep = if sweep != 0.0 { 0.0 } else { 1.0 };
    }

    Segment::arc_to(
        relative,
        [ellipse.rx, ellipse.ry, ellipse.x_rotation, p[3], sweep, to.x, to.y],
    )
}

fn map(m: &Transform, x: f64, y: f64, relative: bool) -> Point {
    if relative {
        m.transform_vector(vector(x, y)).to_point()
    } else {
        m.transform_point(point(x, y))
    }
}

#[cfg(test)]
use crate::path::parse;

#[cfg(test)]
fn transformed(src: &str, transforms: &mut TransformQueue) -> String {
    let mut path = parse(src).unwrap();
    apply_transform(&mut path, transforms);
    path.to_string()
}

#[test]
fn translate() {
    let mut t = TransformQueue::new();
    t.translate(5.0, 15.0);

    assert_eq!(
        transformed("M10 10 C 20 40 40 40 50 10", &mut t),
        "M15 25C25 55 45 55 55 25"
    );
    assert_eq!(
        transformed("M10 10 c 10 30 30 30 40 0", &mut t),
        "M15 25c10 30 30 30 40 0"
    );

    let mut t = TransformQueue::new();
    t.translate(10.0, 15.0);
    assert_eq!(transformed("M10 10H40h50", &mut t), "M20 25H50h50");
    assert_eq!(transformed("M10 10V40v50", &mut t), "M20 25V55v50");
}

#[test]
fn scale() {
    let mut t = TransformQueue::new();
    t.scale(2.0, 1.5);

    assert_eq!(
        transformed("M10 10 C 20 40 40 40 50 10", &mut t),
        "M20 15C40 60 80 60 100 15"
    );
    assert_eq!(
        transformed("M10 10 c 10 30 30 30 40 0", &mut t),
        "M20 15c20 45 60 45 80 0"
    );
    assert_eq!(transformed("M10 10H40h50", &mut t), "M20 15H80h100");
    assert_eq!(transformed("M10 10V40v50", &mut t), "M20 15V60v75");
}

#[test]
fn matrix() {
    let mut t = TransformQueue::new();
    t.matrix([1.5, 0.5, 0.5, 1.5, 10.0, 15.0]);

    assert_eq!(
        transformed("M5 5 C20 30 10 15 30 15", &mut t),
        "M20 25C55 70 32.5 42.5 62.5 52.5"
    );
    assert_eq!(
        transformed("M5 5 c10 12 10 15 20 30", &mut t),
        "M20 25c21 23 22.5 27.5 45 55"
    );
}

#[test]
fn axis_aligned_lines_become_lines() {
    let mut t = TransformQueue::new();
    t.matrix([1.0, 1.0, 0.0, 1.0, 0.0, 0.0]);

    assert_eq!(transformed("M0 0H10h5", &mut t), "M0 0L10 10l5 5");
    assert_eq!(transformed("M0 0V10v5", &mut t), "M0 0V10v5");
}

#[test]
fn first_relative_move_is_absolute() {
    let mut t = TransformQueue::new();
    t.translate(100.0, 100.0);

    let mut path = parse("m70 70 l70 70").unwrap();
    path[0].set_relative(true);
    apply_transform(&mut path, &mut t);
    assert_eq!(path.to_string(), "m170 170l70 70");

    assert_eq!(transformed("M1 1 m10 10", &mut t), "M101 101m10 10");
}

#[test]
fn arcs() {
    let mut t = TransformQueue::new();
    t.scale(2.0, 2.0);

    assert_eq!(
        transformed("M40 30a0 40 -45 0 1 20 50Z M40 30A20 0 -45 0 1 20 50Z", &mut t),
        "M80 60l40 100ZM80 60L40 100Z"
    );
    assert_eq!(
        transformed("M40 30a20 40 -45 0 1 0 0", &mut t),
        "M80 60l0 0"
    );
    assert_eq!(
        transformed("M40 30A20 40 -45 0 1 40 30", &mut t),
        "M80 60L80 60"
    );

    let mut t = TransformQueue::new();
    t.scale(0.0, 1.0);
    assert_eq!(
        transformed("M40 30a20 40 -45 0 1 20 50", &mut t),
        "M0 30l0 50"
    );

    let mut t = TransformQueue::new();
    t.scale(1.0, 0.0);
    assert_eq!(
        transformed("M40 30A20 40 -45 0 1 20 50", &mut t),
        "M40 0L20 0"
    );
}

#[test]
fn flipped_arcs() {
    let mut t = TransformQueue::new();
    t.matrix([1.0, 0.0, 0.0, -1.0, 0.0, 40.0]);
    assert_eq!(
        transformed("M10 10A20 15 90 0 1 30 10", &mut t),
        "M10 30A20 15 90 0 0 30 30"
    );

    let mut t = TransformQueue::new();
    t.matrix([-1.0, 0.0, 0.0, -1.0, 40.0, 40.0]);
    assert_eq!(
        transformed("M10 10A20 15 90 0 1 30 10", &mut t),
        "M30 30A20 15 90 0 1 10 30"
    );
}

#[test]
fn empty_queue_is_a_no_op() {
    let mut t = TransformQueue::new();
    t.translate(0.0, 0.0);
    assert_eq!(transformed("M5 5 C20 30 10 15 30 15", &mut t), "M5 5C20 30 10 15 30 15");
}
