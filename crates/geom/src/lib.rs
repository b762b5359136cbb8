#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Geometry behind SVG path data transformations, on top of lyon_geom.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to rewrite path data:
//!
//! - a lazily collapsed queue of 2d affine transforms ([`TransformQueue`]),
//! - ellipses centered at the origin and their image under a linear map ([`Ellipse`]),
//! - conversion of SVG arcs from endpoint to center parameterization and their
//!   approximation with cubic bézier curves ([`SvgArc`], [`CenterArc`]).
//!
//! All values are `f64`. Angles found in path data (arc x-axis rotation, transform
//! functions) are in degrees; angles of the center parameterization are in radians.

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use lyon_geom;
pub use lyon_geom::euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod ellipse;
pub mod transform;

#[doc(inline)]
pub use crate::arc::{approximate_unit_arc, CenterArc, SvgArc};
#[doc(inline)]
pub use crate::ellipse::Ellipse;
#[doc(inline)]
pub use crate::transform::TransformQueue;
pub use lyon_geom::{ArcFlags, CubicBezierSegment, QuadraticBezierSegment};

/// Relative tolerance used to detect circles and degenerate ellipses.
pub const EPSILON: f64 = 1e-10;

/// Alias for ```euclid::default::Point2D<f64>```.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for ```euclid::default::Vector2D<f64>```.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for ```euclid::default::Transform2D<f64>```.
///
/// The six coefficients `(a, b, c, d, e, f)` of an SVG matrix map to
/// `(m11, m12, m21, m22, m31, m32)`.
pub type Transform = euclid::default::Transform2D<f64>;

/// An angle in radians.
pub type Angle = euclid::Angle<f64>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

mod scalar {
    pub(crate) use num_traits::Float;
}
