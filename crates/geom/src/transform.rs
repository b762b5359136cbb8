//! A queue of affine transforms collapsed on demand.
//!
//! Transforms are queued in the order they are written in an SVG `transform`
//! attribute: each new entry transforms the coordinate system established by the
//! previous ones, so when acting on a point the last queued transform is applied
//! first.
//!
//! ```
//! use svgpath_geom::TransformQueue;
//!
//! let mut transforms = TransformQueue::new();
//! transforms.translate(100.0, 100.0);
//! transforms.scale(2.0, 3.0);
//!
//! let p = transforms.apply(10.0, 10.0, false);
//! assert_eq!((p.x, p.y), (120.0, 130.0));
//!
//! // Relative coordinates ignore the translation.
//! let v = transforms.apply(10.0, 10.0, true);
//! assert_eq!((v.x, v.y), (20.0, 30.0));
//! ```

use crate::scalar::Float;
use crate::{point, vector, Point, Transform};

use alloc::vec::Vec;
use core::f64::consts::PI;

/// Memoized result of collapsing the queue.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Flattened {
    Dirty,
    Clean(Transform),
}

/// An ordered list of affine transforms and the cached product of its entries.
///
/// Operations that would not change anything (identity matrix, zero translation,
/// unit scale, zero rotation or skew) are not queued: an empty queue leaves points
/// untouched bit for bit.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformQueue {
    queue: Vec<Transform>,
    cache: Flattened,
}

impl TransformQueue {
    pub fn new() -> Self {
        TransformQueue {
            queue: Vec::new(),
            cache: Flattened::Dirty,
        }
    }

    /// Number of queued transforms.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The queued transforms, in insertion order.
    pub fn entries(&self) -> &[Transform] {
        &self.queue
    }

    /// Queues a transform unless it is the identity.
    pub fn push(&mut self, transform: Transform) {
        if transform == Transform::identity() {
            return;
        }

        self.queue.push(transform);
        self.cache = Flattened::Dirty;
    }

    /// Queues a raw SVG matrix `[a, b, c, d, e, f]`.
    pub fn matrix(&mut self, m: [f64; 6]) {
        self.push(Transform::new(m[0], m[1], m[2], m[3], m[4], m[5]));
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        if tx != 0.0 || ty != 0.0 {
            self.push(Transform::new(1.0, 0.0, 0.0, 1.0, tx, ty));
        }
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        if sx != 1.0 || sy != 1.0 {
            self.push(Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0));
        }
    }

    /// Rotates by `degrees` around `(cx, cy)`.
    ///
    /// Queued as three entries: translate to the center, rotate, translate back.
    pub fn rotate(&mut self, degrees: f64, cx: f64, cy: f64) {
        if degrees == 0.0 {
            return;
        }

        self.translate(cx, cy);

        let rad = degrees * PI / 180.0;
        let cos = rad.cos();
        let sin = rad.sin();
        self.push(Transform::new(cos, sin, -sin, cos, 0.0, 0.0));

        self.translate(-cx, -cy);
    }

    pub fn skew_x(&mut self, degrees: f64) {
        if degrees != 0.0 {
            let tan = (degrees * PI / 180.0).tan();
            self.push(Transform::new(1.0, 0.0, tan, 1.0, 0.0, 0.0));
        }
    }

    pub fn skew_y(&mut self, degrees: f64) {
        if degrees != 0.0 {
            let tan = (degrees * PI / 180.0).tan();
            self.push(Transform::new(1.0, tan, 0.0, 1.0, 0.0, 0.0));
        }
    }

    /// Collapses the queue into a single transform.
    ///
    /// The result is cached until the queue changes. An empty queue flattens to
    /// the identity.
    pub fn flatten(&mut self) -> Transform {
        if let Flattened::Clean(transform) = self.cache {
            return transform;
        }

        let mut entries = self.queue.iter();
        let mut result = match entries.next() {
            Some(first) => *first,
            None => Transform::identity(),
        };
        // Each entry acts in the coordinate system of the previous ones, so it is
        // applied to points before them.
        for transform in entries {
            result = transform.then(&result);
        }

        self.cache = Flattened::Clean(result);

        result
    }

    /// The flattened transform as an SVG matrix `[a, b, c, d, e, f]`.
    pub fn to_array(&mut self) -> [f64; 6] {
        self.flatten().to_array()
    }

    /// Transforms a point.
    ///
    /// When `relative` is set the coordinates are a delta between two points and
    /// only the linear part of the transform applies.
    pub fn apply(&mut self, x: f64, y: f64, relative: bool) -> Point {
        if self.queue.is_empty() {
            return point(x, y);
        }

        let m = self.flatten();
        if relative {
            m.transform_vector(vector(x, y)).to_point()
        } else {
            m.transform_point(point(x, y))
        }
    }
}

impl Default for TransformQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn noops_are_not_queued() {
    let mut m = TransformQueue::new();

    m.matrix([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(m.len(), 0);

    m.translate(0.0, 0.0);
    assert_eq!(m.len(), 0);

    m.scale(1.0, 1.0);
    assert_eq!(m.len(), 0);

    m.rotate(0.0, 0.0, 0.0);
    assert_eq!(m.len(), 0);

    m.rotate(0.0, 10.0, 20.0);
    assert_eq!(m.len(), 0);

    m.skew_x(0.0);
    assert_eq!(m.len(), 0);

    m.skew_y(0.0);
    assert_eq!(m.len(), 0);
}

#[test]
fn empty_queue() {
    let mut m = TransformQueue::new();
    assert_eq!(m.apply(10.0, 11.0, false), point(10.0, 11.0));
    assert_eq!(m.apply(-0.0, 11.0, true).x.to_bits(), (-0.0f64).to_bits());
    assert_eq!(m.to_array(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn rotation_is_three_entries() {
    let mut m = TransformQueue::new();
    m.rotate(90.0, 10.0, 10.0);
    assert_eq!(m.len(), 3);

    let p = m.apply(15.0, 10.0, false);
    assert!((p.x - 10.0).abs() < 1e-12);
    assert!((p.y - 15.0).abs() < 1e-12);
}

#[test]
fn compose() {
    let mut m = TransformQueue::new();
    m.translate(10.0, 10.0);
    m.translate(-10.0, -10.0);
    m.rotate(180.0, 10.0, 10.0);
    m.rotate(180.0, 10.0, 10.0);

    let result = m.to_array();
    let expected = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    for (value, expected) in result.iter().zip(expected.iter()) {
        assert_eq!((value * 100.0).round(), expected * 100.0);
    }
}

#[test]
fn cache() {
    let mut m = TransformQueue::new();
    m.translate(10.0, 20.0);
    m.scale(2.0, 3.0);

    assert_eq!(m.cache, Flattened::Dirty);
    assert_eq!(m.to_array(), [2.0, 0.0, 0.0, 3.0, 10.0, 20.0]);
    assert_eq!(
        m.cache,
        Flattened::Clean(Transform::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0))
    );

    // The cached value is returned as long as the queue does not change.
    m.cache = Flattened::Clean(Transform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    m.skew_x(45.0);
    assert_eq!(m.cache, Flattened::Dirty);
}

#[test]
fn matches_explicit_composition() {
    // translate(a, b) scale(c, d) maps (x, y) to (c * x + a, d * y + b).
    let (a, b, c, d) = (3.5, -7.25, 2.0, 0.5);
    let mut m = TransformQueue::new();
    m.translate(a, b);
    m.scale(c, d);

    for &(x, y) in &[(0.0, 0.0), (1.0, -2.0), (13.75, 42.5), (-1e3, 7.0)] {
        let p = m.apply(x, y, false);
        assert_eq!(p, point(c * x + a, d * y + b));
    }
}
