//! Path data segments: a command letter and its parameters.

use core::fmt;

/// The kind of drawing operation a segment performs, regardless of whether its
/// coordinates are absolute or relative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    Close,
    /// The `R` extension (catmull-rom curve through a list of points). Its
    /// parameters are carried through transforms but never interpreted.
    CatmullRom,
}

impl Verb {
    /// Looks up a command letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Verb> {
        Some(match letter.to_ascii_lowercase() {
            'm' => Verb::MoveTo,
            'l' => Verb::LineTo,
            'h' => Verb::HorizontalLineTo,
            'v' => Verb::VerticalLineTo,
            'c' => Verb::CubicTo,
            's' => Verb::SmoothCubicTo,
            'q' => Verb::QuadraticTo,
            't' => Verb::SmoothQuadraticTo,
            'a' => Verb::ArcTo,
            'z' => Verb::Close,
            'r' => Verb::CatmullRom,
            _ => {
                return None;
            }
        })
    }

    /// The lowercase command letter.
    pub fn letter(self) -> char {
        match self {
            Verb::MoveTo => 'm',
            Verb::LineTo => 'l',
            Verb::HorizontalLineTo => 'h',
            Verb::VerticalLineTo => 'v',
            Verb::CubicTo => 'c',
            Verb::SmoothCubicTo => 's',
            Verb::QuadraticTo => 'q',
            Verb::SmoothQuadraticTo => 't',
            Verb::ArcTo => 'a',
            Verb::Close => 'z',
            Verb::CatmullRom => 'r',
        }
    }

    /// Number of parameters consumed by one occurrence of the command.
    ///
    /// `R` segments are read four numbers at a time but store any even number of
    /// parameters.
    pub fn param_count(self) -> usize {
        match self {
            Verb::Close => 0,
            Verb::HorizontalLineTo | Verb::VerticalLineTo => 1,
            Verb::MoveTo | Verb::LineTo | Verb::SmoothQuadraticTo => 2,
            Verb::QuadraticTo | Verb::SmoothCubicTo | Verb::CatmullRom => 4,
            Verb::CubicTo => 6,
            Verb::ArcTo => 7,
        }
    }
}

/// A command letter: a verb and whether its coordinates are relative to the
/// current point (lowercase letters) or absolute (uppercase letters).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Command {
    pub verb: Verb,
    pub relative: bool,
}

impl Command {
    #[inline]
    pub fn new(verb: Verb, relative: bool) -> Self {
        Command { verb, relative }
    }

    #[inline]
    pub fn absolute(verb: Verb) -> Self {
        Command::new(verb, false)
    }

    #[inline]
    pub fn relative(verb: Verb) -> Self {
        Command::new(verb, true)
    }

    pub fn from_char(letter: char) -> Option<Self> {
        let verb = Verb::from_letter(letter)?;
        Some(Command::new(verb, letter.is_ascii_lowercase()))
    }

    pub fn to_char(self) -> char {
        let letter = self.verb.letter();
        if self.relative {
            letter
        } else {
            letter.to_ascii_uppercase()
        }
    }

    /// The same verb with absolute coordinates.
    #[inline]
    pub fn to_absolute(self) -> Self {
        Command::new(self.verb, false)
    }

    /// The same verb with relative coordinates.
    #[inline]
    pub fn to_relative(self) -> Self {
        Command::new(self.verb, true)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parameter storage, sized by the number of values of the segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Params {
    Zero,
    One([f64; 1]),
    Two([f64; 2]),
    Four([f64; 4]),
    Six([f64; 6]),
    Seven([f64; 7]),
    Many(Vec<f64>),
}

impl Params {
    /// Picks the variant matching the length of `values`.
    pub fn from_slice(values: &[f64]) -> Self {
        match *values {
            [] => Params::Zero,
            [a] => Params::One([a]),
            [a, b] => Params::Two([a, b]),
            [a, b, c, d] => Params::Four([a, b, c, d]),
            [a, b, c, d, e, f] => Params::Six([a, b, c, d, e, f]),
            [a, b, c, d, e, f, g] => Params::Seven([a, b, c, d, e, f, g]),
            _ => Params::Many(values.to_vec()),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Params::Zero => &[],
            Params::One(p) => &p[..],
            Params::Two(p) => &p[..],
            Params::Four(p) => &p[..],
            Params::Six(p) => &p[..],
            Params::Seven(p) => &p[..],
            Params::Many(p) => &p[..],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        match self {
            Params::Zero => &mut [],
            Params::One(p) => &mut p[..],
            Params::Two(p) => &mut p[..],
            Params::Four(p) => &mut p[..],
            Params::Six(p) => &mut p[..],
            Params::Seven(p) => &mut p[..],
            Params::Many(p) => &mut p[..],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// One command of a path and its parameters.
///
/// The number of parameters always matches the command: none for `Z`, one for
/// `H` and `V`, two for `M`, `L` and `T`, four for `Q` and `S`, six for `C`,
/// seven for `A` (`rx ry x-axis-rotation large-arc-flag sweep-flag x y`), and an
/// even number for `R`. Arc flags are stored as `0.0` or `1.0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Segment {
    command: Command,
    params: Params,
}

impl Segment {
    /// Creates a segment, or returns `None` if the number of parameters does not
    /// fit the command.
    pub fn new(command: Command, params: &[f64]) -> Option<Self> {
        let valid = match command.verb {
            Verb::CatmullRom => params.len() % 2 == 0,
            verb => params.len() == verb.param_count(),
        };

        if !valid {
            return None;
        }

        let params = match command.verb {
            Verb::CatmullRom => Params::Many(params.to_vec()),
            _ => Params::from_slice(params),
        };

        Some(Segment::from_parts(command, params))
    }

    pub(crate) fn from_parts(command: Command, mut params: Params) -> Self {
        if command.verb == Verb::ArcTo {
            let p = params.as_mut_slice();
            p[3] = normalize_flag(p[3]);
            p[4] = normalize_flag(p[4]);
        }

        Segment { command, params }
    }

    pub fn move_to(relative: bool, x: f64, y: f64) -> Self {
        Segment::from_parts(Command::new(Verb::MoveTo, relative), Params::Two([x, y]))
    }

    pub fn line_to(relative: bool, x: f64, y: f64) -> Self {
        Segment::from_parts(Command::new(Verb::LineTo, relative), Params::Two([x, y]))
    }

    pub fn horizontal_line_to(relative: bool, x: f64) -> Self {
        Segment::from_parts(
            Command::new(Verb::HorizontalLineTo, relative),
            Params::One([x]),
        )
    }

    pub fn vertical_line_to(relative: bool, y: f64) -> Self {
        Segment::from_parts(
            Command::new(Verb::VerticalLineTo, relative),
            Params::One([y]),
        )
    }

    /// `[x1, y1, x2, y2, x, y]`.
    pub fn cubic_to(relative: bool, params: [f64; 6]) -> Self {
        Segment::from_parts(Command::new(Verb::CubicTo, relative), Params::Six(params))
    }

    /// `[x1, y1, x, y]`.
    pub fn quadratic_to(relative: bool, params: [f64; 4]) -> Self {
        Segment::from_parts(
            Command::new(Verb::QuadraticTo, relative),
            Params::Four(params),
        )
    }

    /// `[rx, ry, x_axis_rotation, large_arc, sweep, x, y]`.
    pub fn arc_to(relative: bool, params: [f64; 7]) -> Self {
        Segment::from_parts(Command::new(Verb::ArcTo, relative), Params::Seven(params))
    }

    pub fn close(relative: bool) -> Self {
        Segment::from_parts(Command::new(Verb::Close, relative), Params::Zero)
    }

    #[inline]
    pub fn command(&self) -> Command {
        self.command
    }

    #[inline]
    pub fn verb(&self) -> Verb {
        self.command.verb
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.command.relative
    }

    /// Re-marks the segment as relative or absolute without touching its
    /// parameters.
    ///
    /// Parsing always makes the first segment an absolute `M`. Marking it
    /// relative again makes transforms treat it as the start of a relative path.
    pub fn set_relative(&mut self, relative: bool) {
        self.command.relative = relative;
    }

    #[inline]
    pub fn params(&self) -> &[f64] {
        self.params.as_slice()
    }

    /// Mutable access to the parameter values. Their number cannot change.
    #[inline]
    pub fn params_mut(&mut self) -> &mut [f64] {
        self.params.as_mut_slice()
    }

    /// The last coordinate pair, which is the segment's end point for every verb
    /// except `H`, `V` and `Z`.
    pub fn last_pair(&self) -> Option<(f64, f64)> {
        match *self.params() {
            [.., x, y] => Some((x, y)),
            _ => None,
        }
    }
}

fn normalize_flag(flag: f64) -> f64 {
    if flag != 0.0 {
        1.0
    } else {
        0.0
    }
}

#[test]
fn command_letters() {
    for &letter in &['M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a', 'Z', 'z', 'R', 'r'] {
        let command = Command::from_char(letter).unwrap();
        assert_eq!(command.to_char(), letter);
        assert_eq!(command.relative, letter.is_ascii_lowercase());
    }

    assert_eq!(Command::from_char('x'), None);
    assert_eq!(Command::from_char('E'), None);
    assert_eq!(Command::from_char('é'), None);
}

#[test]
fn param_counts() {
    let expected = [
        ('z', 0),
        ('h', 1),
        ('v', 1),
        ('m', 2),
        ('l', 2),
        ('t', 2),
        ('q', 4),
        ('s', 4),
        ('r', 4),
        ('c', 6),
        ('a', 7),
    ];

    for &(letter, count) in &expected {
        assert_eq!(Verb::from_letter(letter).unwrap().param_count(), count);
    }
}

#[test]
fn segment_arity() {
    let line = Command::absolute(Verb::LineTo);
    assert!(Segment::new(line, &[1.0, 2.0]).is_some());
    assert!(Segment::new(line, &[1.0]).is_none());
    assert!(Segment::new(line, &[1.0, 2.0, 3.0]).is_none());

    let catmull_rom = Command::absolute(Verb::CatmullRom);
    assert_eq!(
        Segment::new(catmull_rom, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0])
            .unwrap()
            .params(),
        &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]
    );
    assert!(Segment::new(catmull_rom, &[1.0, 1.0, 2.0]).is_none());

    let close = Segment::new(Command::relative(Verb::Close), &[]).unwrap();
    assert!(close.params().is_empty());
    assert_eq!(close.last_pair(), None);
}

#[test]
fn arc_flags_are_normalized() {
    let arc = Segment::arc_to(false, [10.0, 20.0, 30.0, 5.0, -0.5, 1.0, 2.0]);
    assert_eq!(arc.params(), &[10.0, 20.0, 30.0, 1.0, 1.0, 1.0, 2.0]);

    let arc = Segment::new(Command::relative(Verb::ArcTo), &[1.0, 1.0, 0.0, 0.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(arc.params(), &[1.0, 1.0, 0.0, 0.0, 1.0, 3.0, 4.0]);
}

#[test]
fn escape_hatch() {
    let mut segment = Segment::move_to(false, 1.0, 2.0);
    segment.set_relative(true);
    assert_eq!(segment.command().to_char(), 'm');
    assert_eq!(segment.last_pair(), Some((1.0, 2.0)));
}
