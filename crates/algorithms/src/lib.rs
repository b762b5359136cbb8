#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Rewrite passes over SVG path data.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).
//!
//! Each pass is a free function walking a [`Path`](path::Path) once with
//! [`Path::rewrite`](path::Path::rewrite):
//!
//! - [`transform::apply_transform`] applies an affine transform to every segment,
//! - [`absolute::to_absolute`] and [`absolute::to_relative`] change the
//!   coordinate mode of the segments,
//! - [`unarc::arcs_to_cubics`] approximates elliptic arcs with cubic bézier curves,
//! - [`unshort::expand_shorthands`] turns `S` and `T` into `C` and `Q`,
//! - [`uncubic::cubics_to_quadratics`] approximates cubic bézier curves with
//!   quadratic ones,
//! - [`round::round`] quantizes coordinates without letting errors accumulate.

pub extern crate svgpath_path as path;

pub mod absolute;
pub mod round;
pub mod transform;
pub mod uncubic;
pub mod unarc;
pub mod unshort;

pub use crate::path::geom;
pub use crate::path::math;
