//! The segment store and the traversal used by every rewrite pass.

use crate::geom::{point, Point};
use crate::segment::{Segment, Verb};

use core::iter::{FromIterator, IntoIterator};
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

/// An ordered sequence of path data segments.
///
/// Paths are usually obtained by parsing path data (see [`Path::parse`]) and
/// modified in place by rewrite passes (see [`Path::rewrite`]).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    segments: Vec<Segment>,
}

/// What a rewrite visitor does with the segment it was given.
#[derive(Clone, Debug, PartialEq)]
pub enum Rewrite {
    /// Leave the segment untouched.
    Keep,
    /// Replace the segment with another one.
    Replace(Segment),
    /// Replace the segment with any number of segments. An empty list removes it.
    Splice(Vec<Segment>),
}

/// Tracks the absolute position while walking a path.
///
/// ```
/// use svgpath_path::{Cursor, Segment, geom::point};
///
/// let mut cursor = Cursor::new();
/// cursor.advance(&Segment::move_to(false, 10.0, 10.0));
/// cursor.advance(&Segment::line_to(true, 5.0, 0.0));
/// assert_eq!(cursor.position(), point(15.0, 10.0));
///
/// cursor.advance(&Segment::close(false));
/// assert_eq!(cursor.position(), point(10.0, 10.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cursor {
    position: Point,
    subpath_start: Point,
}

impl Cursor {
    pub fn new() -> Self {
        Cursor {
            position: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
        }
    }

    /// The current point.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Where the current sub-path started, restored by close commands.
    #[inline]
    pub fn subpath_start(&self) -> Point {
        self.subpath_start
    }

    /// Moves past `segment`.
    pub fn advance(&mut self, segment: &Segment) {
        let relative = segment.is_relative();
        let params = segment.params();

        match segment.verb() {
            Verb::MoveTo => {
                self.move_by(relative, params[0], params[1]);
                self.subpath_start = self.position;
            }
            Verb::HorizontalLineTo => {
                if relative {
                    self.position.x += params[0];
                } else {
                    self.position.x = params[0];
                }
            }
            Verb::VerticalLineTo => {
                if relative {
                    self.position.y += params[0];
                } else {
                    self.position.y = params[0];
                }
            }
            Verb::Close => {
                self.position = self.subpath_start;
            }
            _ => {
                if let Some((x, y)) = segment.last_pair() {
                    self.move_by(relative, x, y);
                }
            }
        }
    }

    fn move_by(&mut self, relative: bool, x: f64, y: f64) {
        if relative {
            self.position.x += x;
            self.position.y += y;
        } else {
            self.position = point(x, y);
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            segments: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn iter(&self) -> slice::Iter<Segment> {
        self.segments.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<Segment> {
        self.segments.iter_mut()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_vec(self) -> Vec<Segment> {
        self.segments
    }

    /// Walks the path once, calling `visitor` for each segment.
    ///
    /// The visitor receives the segment, its index and the absolute position
    /// before the segment. The position advances according to the segment as it
    /// was before the visitor ran, so replacing a segment never changes the
    /// position seen by the following ones.
    ///
    /// Replacements are written in place immediately. Splices are applied once
    /// the walk is over.
    pub fn rewrite<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&Segment, usize, Point) -> Rewrite,
    {
        let mut cursor = Cursor::new();
        let mut splices = Vec::new();

        for index in 0..self.segments.len() {
            match visitor(&self.segments[index], index, cursor.position()) {
                Rewrite::Keep => {
                    cursor.advance(&self.segments[index]);
                }
                Rewrite::Replace(segment) => {
                    let original = mem::replace(&mut self.segments[index], segment);
                    cursor.advance(&original);
                }
                Rewrite::Splice(segments) => {
                    cursor.advance(&self.segments[index]);
                    splices.push((index, segments));
                }
            }
        }

        if splices.is_empty() {
            return;
        }

        let old = mem::take(&mut self.segments);
        let mut splices = splices.into_iter().peekable();
        for (index, segment) in old.into_iter().enumerate() {
            match splices.peek() {
                Some(&(at, _)) if at == index => {
                    if let Some((_, replacement)) = splices.next() {
                        self.segments.extend(replacement);
                    }
                }
                _ => {
                    self.segments.push(segment);
                }
            }
        }
    }
}

impl Index<usize> for Path {
    type Output = Segment;
    fn index(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

impl IndexMut<usize> for Path {
    fn index_mut(&mut self, index: usize) -> &mut Segment {
        &mut self.segments[index]
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Segment;
    type IntoIter = slice::Iter<'l, Segment>;

    fn into_iter(self) -> slice::Iter<'l, Segment> {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Path {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Segment> for Path {
    fn extend<T: IntoIterator<Item = Segment>>(&mut self, iter: T) {
        self.segments.extend(iter);
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path { segments }
    }
}

#[cfg(test)]
fn positions(path: &mut Path) -> Vec<(f64, f64)> {
    let mut result = Vec::new();
    path.rewrite(|_, _, at| {
        result.push((at.x, at.y));
        Rewrite::Keep
    });
    result
}

#[test]
fn running_position() {
    let mut path: Path = vec![
        Segment::move_to(false, 10.0, 10.0),
        Segment::horizontal_line_to(true, 5.0),
        Segment::vertical_line_to(false, 30.0),
        Segment::cubic_to(true, [1.0, 1.0, 2.0, 2.0, 3.0, -3.0]),
        Segment::close(true),
        Segment::move_to(true, 1.0, 1.0),
        Segment::line_to(false, 50.0, 60.0),
        Segment::close(false),
        Segment::line_to(true, 1.0, 0.0),
    ]
    .into();

    assert_eq!(
        positions(&mut path),
        vec![
            (0.0, 0.0),
            (10.0, 10.0),
            (15.0, 10.0),
            (15.0, 30.0),
            (18.0, 27.0),
            (10.0, 10.0),
            (11.0, 11.0),
            (50.0, 60.0),
            (11.0, 11.0),
        ]
    );
}

#[test]
fn replacements_do_not_move_the_cursor() {
    let mut path: Path = vec![
        Segment::move_to(false, 10.0, 10.0),
        Segment::line_to(true, 10.0, 0.0),
        Segment::line_to(true, 0.0, 10.0),
    ]
    .into();

    let mut seen = Vec::new();
    path.rewrite(|segment, _, at| {
        seen.push(at);
        match segment.verb() {
            Verb::LineTo => Rewrite::Replace(Segment::line_to(true, 100.0, 100.0)),
            _ => Rewrite::Keep,
        }
    });

    assert_eq!(seen, vec![point(0.0, 0.0), point(10.0, 10.0), point(20.0, 10.0)]);
    assert_eq!(path[1], Segment::line_to(true, 100.0, 100.0));
    assert_eq!(path[2], Segment::line_to(true, 100.0, 100.0));
}

#[test]
fn splices() {
    let mut path: Path = vec![
        Segment::move_to(false, 0.0, 0.0),
        Segment::line_to(false, 1.0, 1.0),
        Segment::line_to(false, 2.0, 2.0),
        Segment::line_to(false, 3.0, 3.0),
    ]
    .into();

    path.rewrite(|segment, index, _| match index {
        1 => Rewrite::Splice(Vec::new()),
        2 => Rewrite::Splice(vec![segment.clone(), Segment::close(false)]),
        _ => Rewrite::Keep,
    });

    let expected: Path = vec![
        Segment::move_to(false, 0.0, 0.0),
        Segment::line_to(false, 2.0, 2.0),
        Segment::close(false),
        Segment::line_to(false, 3.0, 3.0),
    ]
    .into();

    assert_eq!(path, expected);
}

#[test]
fn empty_path() {
    let mut path = Path::new();
    path.rewrite(|_, _, _| Rewrite::Splice(vec![Segment::close(false)]));
    assert!(path.is_empty());
}
