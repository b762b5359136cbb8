//! Parser for the value of SVG `transform` attributes.
//!
//! Recognizes `matrix`, `translate`, `scale`, `rotate`, `skewX` and `skewY`.
//! Functions with an unexpected number of arguments are ignored, and arguments
//! that are not numbers read as zero. The parser never fails.

use crate::geom::TransformQueue;

use regex::Regex;
use std::sync::OnceLock;

fn function_regex() -> &'static Regex {
    static FUNCTION: OnceLock<Regex> = OnceLock::new();
    FUNCTION.get_or_init(|| {
        Regex::new(r"\s*(matrix|translate|scale|rotate|skewX|skewY)\s*\(\s*(.+?)\s*\)[\s,]*")
            .unwrap()
    })
}

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[\s,]+").unwrap())
}

/// Parses a transform list into a queue, in the order the functions appear.
///
/// ```
/// use svgpath::transform_list::parse_transform_list;
///
/// let mut transforms = parse_transform_list("translate(10) scale(2)");
/// let p = transforms.apply(1.0, 1.0, false);
/// assert_eq!((p.x, p.y), (12.0, 2.0));
/// ```
pub fn parse_transform_list(src: &str) -> TransformQueue {
    let mut transforms = TransformQueue::new();

    for captures in function_regex().captures_iter(src) {
        let (name, args) = match (captures.get(1), captures.get(2)) {
            (Some(name), Some(args)) => (name.as_str(), args.as_str()),
            _ => continue,
        };

        let params: Vec<f64> = separator_regex()
            .split(args)
            .map(|arg| arg.parse().unwrap_or(0.0))
            .collect();

        match (name, &params[..]) {
            ("matrix", &[a, b, c, d, e, f]) => transforms.matrix([a, b, c, d, e, f]),
            ("scale", &[s]) => transforms.scale(s, s),
            ("scale", &[sx, sy]) => transforms.scale(sx, sy),
            ("rotate", &[angle]) => transforms.rotate(angle, 0.0, 0.0),
            ("rotate", &[angle, cx, cy]) => transforms.rotate(angle, cx, cy),
            ("translate", &[tx]) => transforms.translate(tx, 0.0),
            ("translate", &[tx, ty]) => transforms.translate(tx, ty),
            ("skewX", &[angle]) => transforms.skew_x(angle),
            ("skewY", &[angle]) => transforms.skew_y(angle),
            _ => {}
        }
    }

    transforms
}

#[cfg(test)]
fn apply(src: &str, x: f64, y: f64) -> (f64, f64) {
    let p = parse_transform_list(src).apply(x, y, false);
    (p.x, p.y)
}

#[test]
fn functions() {
    assert_eq!(apply("translate(20)", 10.0, 10.0), (30.0, 10.0));
    assert_eq!(apply("translate(20,10)", 10.0, 10.0), (30.0, 20.0));
    assert_eq!(apply("scale(2)", 5.0, 5.0), (10.0, 10.0));
    assert_eq!(apply("scale(.5, 1.5)", 5.0, 5.0), (2.5, 7.5));
    assert_eq!(apply("matrix(1 0 0 1 5 6)", 1.0, 1.0), (6.0, 7.0));
}

#[test]
fn lists() {
    assert_eq!(apply("translate(10, 20) scale(2)", 1.0, 1.0), (12.0, 22.0));
    assert_eq!(apply("scale(2), translate(10 20)", 1.0, 1.0), (22.0, 42.0));
    assert_eq!(apply("  scale ( 2 )  ", 1.0, 1.0), (2.0, 2.0));
}

#[test]
fn rotations() {
    let (x, y) = apply("rotate(90, 10, 10)", 15.0, 10.0);
    assert!((x - 10.0).abs() < 1e-9);
    assert!((y - 15.0).abs() < 1e-9);

    let (x, y) = apply("rotate(-90)", 0.0, 10.0);
    assert!((x - 10.0).abs() < 1e-9);
    assert!(y.abs() < 1e-9);
}

#[test]
fn invalid_input() {
    assert!(parse_transform_list("").is_empty());
    assert!(parse_transform_list("   ").is_empty());
    assert!(parse_transform_list("perspective(2)").is_empty());
    assert!(parse_transform_list("translate()").is_empty());
    // Wrong number of arguments.
    assert!(parse_transform_list("matrix(1 2 3)").is_empty());
    assert!(parse_transform_list("rotate(1 2)").is_empty());
    assert!(parse_transform_list("skewX(1, 2)").is_empty());
    // Bad numbers read as zero.
    assert_eq!(apply("translate(abc, 5)", 1.0, 1.0), (1.0, 6.0));
}
