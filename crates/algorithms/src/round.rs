//! Round path coordinates to a fixed number of decimals.

use crate::path::{Path, Verb};

/// Rounds every parameter of `path` to `precision` decimals.
///
/// The error introduced by rounding an end point is added to the next relative
/// end point before it is itself rounded, so that relative paths don't drift
/// away from their unrounded counterpart. Close commands restore the error
/// recorded at the start of the sub-path.
///
/// The x-axis rotation of arcs is rounded with two more decimals.
///
/// # Examples
///
/// ```
/// use svgpath_algorithms::round::round;
/// use svgpath_algorithms::path::parse;
///
/// let mut path = parse("M1.2 1.4l1.2 1.4 l1.2 1.4").unwrap();
/// round(&mut path, 0);
/// assert_eq!(path.to_string(), "M1 1l1 2 2 1");
/// ```
pub fn round(path: &mut Path, precision: i32) {
    let mut delta = (0.0, 0.0);
    let mut contour_delta = (0.0, 0.0);

    for segment in path.iter_mut() {
        let relative = segment.is_relative();
        let verb = segment.verb();
        let p = segment.params_mut();

        match verb {
            Verb::HorizontalLineTo => {
                if relative {
                    p[0] += delta.0;
                }
                delta.0 = residual(p[0], precision);
                p[0] = to_fixed(p[0], precision);
            }
            Verb::VerticalLineTo => {
                if relative {
                    p[0] += delta.1;
                }
                delta.1 = residual(p[0], precision);
                p[0] = to_fixed(p[0], precision);
            }
            Verb::Close => {
                delta = contour_delta;
            }
            Verb::MoveTo => {
                carry(p, 0, relative, delta);
                delta = (residual(p[0], precision), residual(p[1], precision));
                contour_delta = delta;

                p[0] = to_fixed(p[0], precision);
                p[1] = to_fixed(p[1], precision);
            }
            Verb::ArcTo => {
                carry(p, 5, relative, delta);
                delta = (residual(p[5], precision), residual(p[6], precision));

                p[0] = to_fixed(p[0], precision);
                p[1] = to_fixed(p[1], precision);
                p[2] = to_fixed(p[2], precision + 2);
                p[5] = to_fixed(p[5], precision);
                p[6] = to_fixed(p[6], precision);
            }
            _ => {
                let n = p.len();
                if n < 2 {
                    continue;
                }

                carry(p, n - 2, relative, delta);
                delta = (
                    residual(p[n - 2], precision),
                    residual(p[n - 1], precision),
                );

                for value in p.iter_mut() {
                    *value = to_fixed(*value, precision);
                }
            }
        }
    }
}

fn carry(params: &mut [f64], index: usize, relative: bool, delta: (f64, f64)) {
    if relative {
        params[index] += delta.0;
        params[index + 1] += delta.1;
    }
}

fn residual(value: f64, precision: i32) -> f64 {
    value - to_fixed(value, precision)
}

/// Rounds half away from zero at `10^-precision`.
fn to_fixed(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}

#[cfg(test)]
use crate::path::parse;

#[cfg(test)]
fn rounded(src: &str, precision: i32) -> String {
    let mut path = parse(src).unwrap();
    round(&mut path, precision);
    path.to_string()
}

#[test]
fn arcs() {
    assert_eq!(
        rounded("M10 10 A12.5 17.5 45.5 0 0 15.5 19.5", 0),
        "M10 10A13 18 45.5 0 0 16 20"
    );
}

#[test]
fn curves() {
    assert_eq!(
        rounded("M10 10 c 10.12 30.34 30.56 30 40.00 0.12", 0),
        "M10 10c10 30 31 30 40 0"
    );
}

#[test]
fn precision() {
    assert_eq!(
        rounded("M10.123 10.456L20.4351 30.0000", 2),
        "M10.12 10.46L20.44 30"
    );
}

#[test]
fn error_is_carried() {
    assert_eq!(rounded("M1.2 1.4l1.2 1.4 l1.2 1.4", 0), "M1 1l1 2 2 1");
    assert_eq!(
        rounded("M1.2 1.4 H2.4 h1.2 v2.4 h-2.4 V2.4 v-1.2", 0),
        "M1 1H2h2v3h-3V2v-1"
    );
}

#[test]
fn contour_start_error() {
    let mut path = parse("m0.4 0.2zm0.4 0.2m0.4 0.2m0.4 0.2zm0.4 0.2").unwrap();
    round(&mut path, 0);
    crate::absolute::to_absolute(&mut path);
    assert_eq!(path.to_string(), "M0 0ZM1 0M1 1M2 1ZM2 1");

    let mut path = parse("m.1 .1l.3 .3zm.1 .1l.3 .3zm0 0z").unwrap();
    round(&mut path, 0);
    crate::absolute::to_absolute(&mut path);
    assert_eq!(path.to_string(), "M0 0L0 0ZM0 0L1 1ZM0 0Z");
}
