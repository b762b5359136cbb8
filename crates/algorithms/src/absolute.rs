//! Conversion between absolute and relative coordinates.

use crate::path::{Path, Rewrite, Verb};

/// Makes every segment absolute.
pub fn to_absolute(path: &mut Path) {
    path.rewrite(|segment, _, at| {
        if !segment.is_relative() {
            return Rewrite::Keep;
        }

        let mut result = segment.clone();
        result.set_relative(false);

        let params = result.params_mut();
        match segment.verb() {
            Verb::VerticalLineTo => {
                params[0] += at.y;
            }
            Verb::ArcTo => {
                // Only the end point is relative.
                params[5] += at.x;
                params[6] += at.y;
            }
            _ => {
                for (i, value) in params.iter_mut().enumerate() {
                    *value += if i % 2 == 0 { at.x } else { at.y };
                }
            }
        }

        Rewrite::Replace(result)
    });
}

/// Makes every segment relative, except the initial move-to.
pub fn to_relative(path: &mut Path) {
    path.rewrite(|segment, index, at| {
        if segment.is_relative() {
            return Rewrite::Keep;
        }

        if index == 0 && segment.verb() == Verb::MoveTo {
            return Rewrite::Keep;
        }

        let mut result = segment.clone();
        result.set_relative(true);

        let params = result.params_mut();
        match segment.verb() {
            Verb::VerticalLineTo => {
                params[0] -= at.y;
            }
            Verb::ArcTo => {
                params[5] -= at.x;
                params[6] -= at.y;
            }
            _ => {
                for (i, value) in params.iter_mut().enumerate() {
                    *value -= if i % 2 == 0 { at.x } else { at.y };
                }
            }
        }

        Rewrite::Replace(result)
    });
}

#[cfg(test)]
use crate::path::parse;

#[cfg(test)]
fn absolute(src: &str) -> String {
    let mut path = parse(src).unwrap();
    to_absolute(&mut path);
    path.to_string()
}

#[cfg(test)]
fn relative(src: &str) -> String {
    let mut path = parse(src).unwrap();
    to_relative(&mut path);
    path.to_string()
}

#[test]
fn absolute_coordinates() {
    assert_eq!(absolute("M10 10 l 30 30"), "M10 10L40 40");
    assert_eq!(absolute("M10 10 L30 30"), "M10 10L30 30");
    assert_eq!(
        absolute("M10 10 c 10 30 30 30 40, 0 10 -30 20 -30 40 0"),
        "M10 10C20 40 40 40 50 10 60-20 70-20 90 10"
    );
    assert_eq!(absolute("M10 10H40h50"), "M10 10H40 90");
    assert_eq!(absolute("M10 10V40v50"), "M10 10V40 90");
    assert_eq!(absolute("M40 30a20 40 -45 0 1 20 50"), "M40 30A20 40-45 0 1 60 80");
    assert_eq!(
        absolute("M10 10 l10 0 l0 10 Z l 0 10 l 10 0 z l-1-1"),
        "M10 10L20 10 20 20ZL10 20 20 20ZL9 9"
    );
}

#[test]
fn relative_coordinates() {
    assert_eq!(relative("M10 10 L30 30"), "M10 10l20 20");
    assert_eq!(relative("m10 10 l30 30"), "M10 10l30 30");
    assert_eq!(
        relative("M10 10 C 20 40 40 40 50 10 60 -20 70 -20 90 10"),
        "M10 10c10 30 30 30 40 0 10-30 20-30 40 0"
    );
    assert_eq!(relative("M10 10H40h50"), "M10 10h30 50");
    assert_eq!(relative("M10 10V40v50"), "M10 10v30 50");
    assert_eq!(relative("M40 30A20 40 -45 0 1 60 80"), "M40 30a20 40-45 0 1 20 50");
    assert_eq!(
        relative("M10 10 L20 10 L20 20 Z L10 20 L20 20 z L9 9"),
        "M10 10l10 0 0 10zl0 10 10 0zl-1-1"
    );
}

#[test]
fn round_trip() {
    let src = "M10 10 L20 10 h5 V3 C 1 2 3 4 5 6 s1 2 3 4 Q1 1 2 2 t3 3 A1 2 3 0 1 4 5 z M 1 1 R 1 1 2 2";

    let mut direct = parse(src).unwrap();
    to_absolute(&mut direct);

    let mut round_trip = parse(src).unwrap();
    to_relative(&mut round_trip);
    to_absolute(&mut round_trip);

    assert_eq!(round_trip.to_string(), direct.to_string());
}
