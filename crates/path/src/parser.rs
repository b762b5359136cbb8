//! Path data parser.
//!
//! The whole string is read at once into a [`Path`]. The grammar is the one of
//! the SVG `d` attribute plus the `R` command:
//!
//! - separators are any run of whitespace with at most one comma,
//! - numbers have an optional sign, an integer part that does not start with `0`
//!   unless it is `0`, an optional fractional part and an optional exponent,
//! - a command letter can be omitted when it repeats; parameters in excess after
//!   a move-to are line-to parameters.
//!
//! Positions reported in errors are character offsets (not byte offsets).

use crate::path::Path;
use crate::segment::{Command, Params, Segment, Verb};

use thiserror::Error;

/// The reason a string could not be parsed.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("bad command {0:?}")]
    BadCommand(char),
    #[error("missed param")]
    MissingParam,
    #[error("param should start with 0..9 or `.`")]
    ParamMustStartWithDigitOrDot,
    #[error("numbers started with `0` such as `09` are illegal")]
    IllegalLeadingZero,
    #[error("invalid float exponent")]
    InvalidExponent,
    #[error("string should start with `M` or `m`")]
    MissingInitialMove,
}

/// A parse failure and the character offset it was detected at.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("{kind} (at pos {position})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    #[inline]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}

/// Parses path data.
///
/// An empty (or whitespace only) string gives an empty path. Otherwise the
/// first command must be a move-to, and it is always made absolute.
///
/// ```
/// use svgpath_path::parser::{parse, ParseErrorKind};
///
/// let path = parse("m 10 20 30 40").unwrap();
/// assert_eq!(path.to_string(), "M10 20l30 40");
///
/// let error = parse("M 10").unwrap_err();
/// assert_eq!(error.kind, ParseErrorKind::MissingParam);
/// assert_eq!(error.position, 4);
/// ```
pub fn parse(src: &str) -> Result<Path, ParseError> {
    let mut scanner = Scanner::new(src);
    let mut path = Path::new();

    scanner.skip_spaces();
    while !scanner.at_end() {
        scanner.scan_segment(&mut path)?;
    }

    if let Some(first) = path.iter().next() {
        if first.verb() != Verb::MoveTo {
            return Err(ParseError::new(
                ParseErrorKind::MissingInitialMove,
                scanner.first_command,
            ));
        }

        path[0].set_relative(false);
    }

    Ok(path)
}

impl core::str::FromStr for Path {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Path, ParseError> {
        parse(src)
    }
}

struct Scanner {
    src: Vec<char>,
    index: usize,
    first_command: usize,
    float_buffer: String,
    params: Vec<f64>,
}

impl Scanner {
    fn new(src: &str) -> Self {
        Scanner {
            src: src.chars().collect(),
            index: 0,
            first_command: 0,
            float_buffer: String::new(),
            params: Vec::new(),
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index >= self.src.len()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.src.get(self.index).cloned()
    }

    #[inline]
    fn peek_is_digit(&self) -> bool {
        self.peek().map_or(false, |c| c.is_ascii_digit())
    }

    fn skip_spaces(&mut self) {
        while self.peek().map_or(false, is_space) {
            self.index += 1;
        }
    }

    fn scan_segment(&mut self, path: &mut Path) -> Result<(), ParseError> {
        let start = self.index;
        let letter = self.peek().unwrap_or(' ');
        let command = match Command::from_char(letter) {
            Some(command) => command,
            None => {
                return Err(ParseError::new(ParseErrorKind::BadCommand(letter), start));
            }
        };

        if path.is_empty() {
            self.first_command = start;
        }

        let group = command.verb.param_count();

        self.index += 1;
        self.skip_spaces();
        self.params.clear();

        if group == 0 {
            path.push(Segment::from_parts(command, Params::Zero));
            return Ok(());
        }

        loop {
            let mut comma_found = false;
            for _ in 0..group {
                let value = self.scan_param()?;
                self.params.push(value);

                self.skip_spaces();
                comma_found = false;
                if self.peek() == Some(',') {
                    self.index += 1;
                    self.skip_spaces();
                    comma_found = true;
                }
            }

            // A comma must be followed by a parameter.
            if comma_found {
                continue;
            }

            match self.peek() {
                Some(c) if is_number_start(c) => {}
                _ => {
                    break;
                }
            }
        }

        self.finish_segment(command, path);

        Ok(())
    }

    fn finish_segment(&mut self, mut command: Command, path: &mut Path) {
        let mut params = &self.params[..];

        if command.verb == Verb::MoveTo && params.len() > 2 {
            path.push(Segment::from_parts(command, Params::from_slice(&params[..2])));
            params = &params[2..];
            command.verb = Verb::LineTo;
        }

        if command.verb == Verb::CatmullRom {
            path.push(Segment::from_parts(command, Params::Many(params.to_vec())));
            return;
        }

        for chunk in params.chunks_exact(command.verb.param_count()) {
            path.push(Segment::from_parts(command, Params::from_slice(chunk)));
        }
    }

    fn scan_param(&mut self) -> Result<f64, ParseError> {
        let start = self.index;

        if self.at_end() {
            return Err(ParseError::new(ParseErrorKind::MissingParam, start));
        }

        if let Some('+') | Some('-') = self.peek() {
            self.index += 1;
        }

        let mut has_integer_digits = false;
        let mut has_fraction_digits = false;

        match self.peek() {
            Some('.') => {}
            Some(c) if c.is_ascii_digit() => {
                self.index += 1;
                has_integer_digits = true;
                if c == '0' && self.peek_is_digit() {
                    return Err(ParseError::new(ParseErrorKind::IllegalLeadingZero, start));
                }
                while self.peek_is_digit() {
                    self.index += 1;
                }
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::ParamMustStartWithDigitOrDot,
                    self.index,
                ));
            }
        }

        if self.peek() == Some('.') {
            let dot = self.index;
            self.index += 1;
            while self.peek_is_digit() {
                self.index += 1;
                has_fraction_digits = true;
            }

            if !has_integer_digits && !has_fraction_digits {
                if let Some('e') | Some('E') = self.peek() {
                    return Err(ParseError::new(ParseErrorKind::InvalidExponent, self.index));
                }
                return Err(ParseError::new(
                    ParseErrorKind::ParamMustStartWithDigitOrDot,
                    dot,
                ));
            }
        }

        if let Some('e') | Some('E') = self.peek() {
            self.index += 1;
            if let Some('+') | Some('-') = self.peek() {
                self.index += 1;
            }

            if !self.peek_is_digit() {
                return Err(ParseError::new(ParseErrorKind::InvalidExponent, self.index));
            }
            while self.peek_is_digit() {
                self.index += 1;
            }
        }

        self.float_buffer.clear();
        self.float_buffer.extend(&self.src[start..self.index]);

        match self.float_buffer.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ParseError::new(
                ParseErrorKind::ParamMustStartWithDigitOrDot,
                start,
            )),
        }
    }
}

fn is_space(c: char) -> bool {
    match c {
        // Line terminators.
        '\u{0A}' | '\u{0D}' | '\u{2028}' | '\u{2029}' => true,
        // Whitespace.
        '\u{20}' | '\u{09}' | '\u{0B}' | '\u{0C}' | '\u{A0}' => true,
        '\u{1680}' | '\u{180E}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' => true,
        '\u{3000}' | '\u{FEFF}' => true,
        _ => false,
    }
}

fn is_number_start(c: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-' || c == '.'
}

#[cfg(test)]
fn error(src: &str) -> (ParseErrorKind, usize) {
    let e = parse(src).unwrap_err();
    (e.kind, e.position)
}

#[test]
fn empty_input() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse(" \t\n\u{2003}").unwrap().is_empty());
}

#[test]
fn implicit_commands() {
    let path = parse("M 0 0 100 100").unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], Segment::move_to(false, 0.0, 0.0));
    assert_eq!(path[1], Segment::line_to(false, 100.0, 100.0));

    let path = parse("m 0 0 100 100").unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], Segment::move_to(false, 0.0, 0.0));
    assert_eq!(path[1], Segment::line_to(true, 100.0, 100.0));

    let path = parse("M0 0 L1 1 2 2 3 3").unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[3], Segment::line_to(false, 3.0, 3.0));

    let path = parse("M0 0 h1 2 3 v4,5").unwrap();
    assert_eq!(path.len(), 6);
    assert_eq!(path[3], Segment::horizontal_line_to(true, 3.0));
    assert_eq!(path[5], Segment::vertical_line_to(true, 5.0));
}

#[test]
fn catmull_rom_is_not_split() {
    let path = parse("M 0 0 R 1 1 2 2 3 3 4 4").unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[1].verb(), Verb::CatmullRom);
    assert_eq!(path[1].params(), &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
}

#[test]
fn numbers() {
    let path = parse("M.1e-2-.5L+1.5E+2 1.e1 l-0 0.").unwrap();
    assert_eq!(path[0].params(), &[0.001, -0.5]);
    assert_eq!(path[1].params(), &[150.0, 10.0]);
    assert_eq!(path[2].params(), &[0.0, 0.0]);

    let path = parse("M0.5.5 0-0").unwrap();
    assert_eq!(path[0].params(), &[0.5, 0.5]);
    assert_eq!(path[1].params(), &[0.0, 0.0]);
}

#[test]
fn whitespace() {
    let path = parse("M0\r 0\n\u{1680}l2-3\nz").unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[1], Segment::line_to(true, 2.0, -3.0));
    assert_eq!(path[2], Segment::close(true));

    let path = parse("\u{FEFF}M\u{3000}1\u{A0},\u{2028}2").unwrap();
    assert_eq!(path[0].params(), &[1.0, 2.0]);
}

#[test]
fn first_move_is_absolute() {
    let path = parse("m10 20 z m 1 1").unwrap();
    assert_eq!(path[0], Segment::move_to(false, 10.0, 20.0));
    assert_eq!(path[2], Segment::move_to(true, 1.0, 1.0));
}

#[test]
fn arc_flags() {
    let path = parse("M0 0 A 10 20 30 5 0 40 50").unwrap();
    assert_eq!(path[1].params(), &[10.0, 20.0, 30.0, 1.0, 0.0, 40.0, 50.0]);
}

#[test]
fn errors() {
    assert_eq!(error("0"), (ParseErrorKind::BadCommand('0'), 0));
    assert_eq!(error("U"), (ParseErrorKind::BadCommand('U'), 0));
    assert_eq!(error("M0 0G 1"), (ParseErrorKind::BadCommand('G'), 4));
    assert_eq!(error("z"), (ParseErrorKind::MissingInitialMove, 0));
    assert_eq!(error("  L 1 1"), (ParseErrorKind::MissingInitialMove, 2));
    assert_eq!(error("M+"), (ParseErrorKind::ParamMustStartWithDigitOrDot, 2));
    assert_eq!(error("M00"), (ParseErrorKind::IllegalLeadingZero, 1));
    assert_eq!(error("M-01 1"), (ParseErrorKind::IllegalLeadingZero, 1));
    assert_eq!(error("M0e"), (ParseErrorKind::InvalidExponent, 3));
    assert_eq!(error("M0e+x"), (ParseErrorKind::InvalidExponent, 4));
    assert_eq!(error("M0"), (ParseErrorKind::MissingParam, 2));
    assert_eq!(error("M0,0,"), (ParseErrorKind::MissingParam, 5));
    assert_eq!(error("M0 .e3"), (ParseErrorKind::InvalidExponent, 4));
    assert_eq!(error("M0 . 1"), (ParseErrorKind::ParamMustStartWithDigitOrDot, 3));
    assert_eq!(error("M0 0 L1,,1"), (ParseErrorKind::ParamMustStartWithDigitOrDot, 8));
}

#[test]
fn error_positions_are_character_offsets() {
    assert_eq!(error("\u{2003}\u{2003}M0 0é"), (ParseErrorKind::BadCommand('é'), 6));
}

#[test]
fn error_message() {
    let e = parse("M00").unwrap_err();
    assert_eq!(
        e.to_string(),
        "numbers started with `0` such as `09` are illegal (at pos 1)"
    );

    let e = parse("M0 0G 1").unwrap_err();
    assert_eq!(e.to_string(), "bad command 'G' (at pos 4)");
}
