#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Transform, simplify and serialize SVG path data.
//!
//! # Crates
//!
//! This meta-crate (`svgpath`) reexports the following sub-crates for convenience:
//!
//! * **svgpath_geom** - Affine transform queues, ellipse algebra and arc approximation.
//! * **svgpath_path** - The segment model, parser, serializer and rewrite traversal.
//! * **svgpath_algorithms** - Rewrite passes over paths.
//!
//! Each `svgpath_<name>` crate is reexported as a `<name>` module in `svgpath`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! [`SvgPath`] queues transforms and applies them all at once when the path is
//! written out, or before an operation that needs absolute geometry.
//!
//! ```
//! use svgpath::SvgPath;
//!
//! let path: SvgPath = "M10 10 L15 15".parse().unwrap();
//!
//! let result = path
//!     .translate(-10.0, -10.0)
//!     .scale(2.0, 2.0)
//!     .rel();
//!
//! assert_eq!(result.to_string(), "M0 0l10 10");
//! ```
//!
//! Transforms can also be given as the value of an SVG `transform` attribute:
//!
//! ```
//! use svgpath::SvgPath;
//!
//! let path: SvgPath = "M5 5L15 20".parse().unwrap();
//! assert_eq!(path.transform("scale(2)").to_string(), "M10 10L30 40");
//! ```

pub extern crate svgpath_algorithms;
pub extern crate svgpath_geom;
pub extern crate svgpath_path;

pub use svgpath_algorithms as algorithms;
pub use svgpath_geom as geom;
pub use svgpath_path as path;

pub mod transform_list;

pub use crate::algorithms::uncubic::DEFAULT_CUBIC_TOLERANCE;
pub use crate::path::{ParseError, ParseErrorKind, Path, Rewrite, Segment};

use crate::algorithms::{absolute, round, transform, uncubic, unarc, unshort};
use crate::geom::{Point, TransformQueue};
use crate::transform_list::parse_transform_list;

use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// SVG path data with a stack of pending transforms.
///
/// Transform operations (`translate`, `scale`, `rotate`, `skew_x`, `skew_y`,
/// `matrix`, `transform`) only push onto the stack. The stack is applied to the
/// segments when the path is written out, and before operations that depend on
/// the final geometry (`unarc`, `unshort`, `uncubic`, `round`). Conversions
/// between absolute and relative coordinates keep the stack pending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgPath {
    path: Path,
    stack: Vec<TransformQueue>,
}

impl SvgPath {
    /// Parses path data.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        match crate::path::parse(src) {
            Ok(path) => Ok(SvgPath::from(path)),
            Err(e) => {
                debug!("failed to parse path data: {}", e);
                Err(e)
            }
        }
    }

    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.with_queue(|q| q.translate(tx, ty))
    }

    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.with_queue(|q| q.scale(sx, sy))
    }

    /// Rotates by `degrees` around `(cx, cy)`.
    pub fn rotate(self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.with_queue(|q| q.rotate(degrees, cx, cy))
    }

    pub fn skew_x(self, degrees: f64) -> Self {
        self.with_queue(|q| q.skew_x(degrees))
    }

    pub fn skew_y(self, degrees: f64) -> Self {
        self.with_queue(|q| q.skew_y(degrees))
    }

    /// Applies a raw SVG matrix `[a, b, c, d, e, f]`.
    pub fn matrix(self, m: [f64; 6]) -> Self {
        self.with_queue(|q| q.matrix(m))
    }

    /// Applies the value of an SVG `transform` attribute.
    ///
    /// See [`transform_list`] for the accepted syntax.
    pub fn transform(mut self, transform_list: &str) -> Self {
        let src = transform_list.trim();
        if src.is_empty() {
            return self;
        }

        self.push_queue(parse_transform_list(src));
        self
    }

    /// Converts every segment to absolute coordinates.
    pub fn abs(mut self) -> Self {
        absolute::to_absolute(&mut self.path);
        self
    }

    /// Converts every segment but the initial move-to to relative coordinates.
    pub fn rel(mut self) -> Self {
        absolute::to_relative(&mut self.path);
        self
    }

    /// Replaces arcs with cubic bézier curves.
    pub fn unarc(mut self) -> Self {
        self.evaluate_stack();
        unarc::arcs_to_cubics(&mut self.path);
        self
    }

    /// Replaces the `S` and `T` shorthands with `C` and `Q` curves.
    pub fn unshort(mut self) -> Self {
        self.evaluate_stack();
        unshort::expand_shorthands(&mut self.path);
        self
    }

    /// Replaces cubic bézier curves with quadratic ones, within
    /// [`DEFAULT_CUBIC_TOLERANCE`].
    pub fn uncubic(self) -> Self {
        self.uncubic_with_tolerance(DEFAULT_CUBIC_TOLERANCE)
    }

    pub fn uncubic_with_tolerance(mut self, tolerance: f64) -> Self {
        self.evaluate_stack();
        uncubic::cubics_to_quadratics_with_tolerance(&mut self.path, tolerance);
        self
    }

    /// Rounds coordinates to `precision` decimals, compensating rounding errors
    /// in relative coordinates.
    pub fn round(mut self, precision: i32) -> Self {
        self.evaluate_stack();
        round::round(&mut self.path, precision);
        self
    }

    /// Walks the segments with a custom visitor.
    ///
    /// The visitor receives each segment, its index and the absolute position
    /// before it. Pending transforms are applied first unless `keep_lazy_stack`
    /// is true.
    pub fn iterate<F>(mut self, visitor: F, keep_lazy_stack: bool) -> Self
    where
        F: FnMut(&Segment, usize, Point) -> Rewrite,
    {
        if !keep_lazy_stack {
            self.evaluate_stack();
        }

        self.path.rewrite(visitor);
        self
    }

    /// The segments, without the pending transforms applied.
    pub fn segments(&self) -> &[Segment] {
        self.path.as_slice()
    }

    /// The path, without the pending transforms applied.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access to the path, without the pending transforms applied.
    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    /// Returns the path with all pending transforms applied.
    pub fn into_path(mut self) -> Path {
        self.evaluate_stack();
        self.path
    }

    /// Whether some transforms have not been applied to the segments yet.
    pub fn has_pending_transforms(&self) -> bool {
        !self.stack.is_empty()
    }

    fn with_queue(mut self, build: impl FnOnce(&mut TransformQueue)) -> Self {
        let mut queue = TransformQueue::new();
        build(&mut queue);
        self.push_queue(queue);
        self
    }

    fn push_queue(&mut self, queue: TransformQueue) {
        if !queue.is_empty() {
            self.stack.push(queue);
        }
    }

    fn evaluate_stack(&mut self) {
        match self.stack.len() {
            0 => {}
            1 => {
                transform::apply_transform(&mut self.path, &mut self.stack[0]);
            }
            n => {
                trace!("collapsing {} pending transforms", n);
                // Queue entries apply last to first.
                let mut combined = TransformQueue::new();
                for queue in self.stack.iter_mut().rev() {
                    combined.push(queue.flatten());
                }
                transform::apply_transform(&mut self.path, &mut combined);
            }
        }

        self.stack.clear();
    }
}

impl From<Path> for SvgPath {
    fn from(path: Path) -> Self {
        SvgPath {
            path,
            stack: Vec::new(),
        }
    }
}

impl FromStr for SvgPath {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, ParseError> {
        SvgPath::parse(src)
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.stack.is_empty() {
            return fmt::Display::fmt(&self.path, f);
        }

        let mut evaluated = self.clone();
        evaluated.evaluate_stack();
        fmt::Display::fmt(&evaluated.path, f)
    }
}

#[test]
fn lazy_stack() {
    let path: SvgPath = "M10 10 L15 15".parse().unwrap();
    let path = path.translate(5.0, 5.0).scale(2.0, 2.0);
    assert!(path.has_pending_transforms());
    assert_eq!(path.segments()[0].params(), &[10.0, 10.0]);

    assert_eq!(path.to_string(), "M30 30L40 40");
    assert!(path.has_pending_transforms());

    let path = path.round(0);
    assert!(!path.has_pending_transforms());
    assert_eq!(path.segments()[0].params(), &[30.0, 30.0]);
}

#[test]
fn identity_transforms_are_not_stacked() {
    let path: SvgPath = "M10 10".parse().unwrap();
    let path = path
        .translate(0.0, 0.0)
        .scale(1.0, 1.0)
        .rotate(0.0, 5.0, 5.0)
        .transform("  ");
    assert!(!path.has_pending_transforms());
}

#[test]
fn custom_visitor() {
    let path: SvgPath = "M10 10 L20 20 L30 10".parse().unwrap();

    let mut positions = Vec::new();
    let path = path.translate(10.0, 0.0).iterate(
        |_, index, at| {
            positions.push((index, at.x, at.y));
            if index == 1 {
                Rewrite::Splice(Vec::new())
            } else {
                Rewrite::Keep
            }
        },
        false,
    );

    assert_eq!(positions, vec![(0, 0.0, 0.0), (1, 20.0, 10.0), (2, 30.0, 20.0)]);
    assert_eq!(path.to_string(), "M20 10L40 10");
}
