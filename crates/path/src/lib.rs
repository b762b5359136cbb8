#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::len_without_is_empty)]

//! Data structures and tools to read, walk and write SVG path data.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).
//!
//! # Overview.
//!
//! A [`Path`] is an ordered list of [`Segment`]s, each made of a [`Command`]
//! (a [`Verb`] and whether its coordinates are relative) and its parameters.
//!
//! - [`parser`] turns path data into a [`Path`],
//! - [`Path::rewrite`] walks a path while tracking the absolute position and lets
//!   a visitor replace, remove or split segments,
//! - [`writer`] formats a path back to compact path data (also available through
//!   `Display`).
//!
//! # Examples
//!
//! ```
//! use svgpath_path::{Path, Rewrite, Segment, Verb};
//!
//! let mut path: Path = "M 10 10 H 20 V 20 Z".parse().unwrap();
//!
//! // Turn horizontal and vertical lines into regular lines.
//! path.rewrite(|segment, _, at| match segment.verb() {
//!     Verb::HorizontalLineTo => Rewrite::Replace(Segment::line_to(false, segment.params()[0], at.y)),
//!     Verb::VerticalLineTo => Rewrite::Replace(Segment::line_to(false, at.x, segment.params()[0])),
//!     _ => Rewrite::Keep,
//! });
//!
//! assert_eq!(path.to_string(), "M10 10L20 10 20 20Z");
//! ```

pub use svgpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod parser;
pub mod path;
pub mod segment;
pub mod writer;

#[doc(inline)]
pub use crate::parser::{parse, ParseError, ParseErrorKind};
#[doc(inline)]
pub use crate::path::{Cursor, Path, Rewrite};
#[doc(inline)]
pub use crate::segment::{Command, Params, Segment, Verb};

pub mod math {
    //! The geometry types used by the path crates.

    pub use crate::geom::{point, vector, Point, Transform, Vector};
}
