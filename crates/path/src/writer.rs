//! Serialization of paths to compact path data.
//!
//! Numbers are written in their shortest round-trip form. A command letter is
//! omitted when it repeats the previous one, except for move-to commands. No
//! space is written around command letters nor before a minus sign.

use crate::path::Path;
use crate::segment::{Segment, Verb};

use core::fmt;

/// Writes path data for a sequence of segments.
pub fn write_segments<'l, W, Iter>(output: &mut W, segments: Iter) -> fmt::Result
where
    W: fmt::Write,
    Iter: IntoIterator<Item = &'l Segment>,
{
    let mut buffer = ryu_js::Buffer::new();
    let mut previous = None;
    let mut after_number = false;

    for segment in segments {
        let command = segment.command();
        let repeated = previous == Some(command) && command.verb != Verb::MoveTo;
        if !repeated {
            output.write_char(command.to_char())?;
            after_number = false;
        }
        previous = Some(command);

        for &value in segment.params() {
            let text = format_number(value, &mut buffer);
            if after_number && !text.starts_with('-') {
                output.write_char(' ')?;
            }
            output.write_str(text)?;
            after_number = true;
        }
    }

    Ok(())
}

fn format_number(mut value: f64, buffer: &mut ryu_js::Buffer) -> &str {
    if value == 0.0 {
        // Also turns -0 into 0.
        value = 0.0;
    }

    buffer.format(value)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_segments(f, self)
    }
}

#[test]
fn canonical_output() {
    let path: Path = vec![
        Segment::move_to(false, 10.0, -10.5),
        Segment::line_to(false, 20.0, 30.0),
        Segment::line_to(false, -1.0, 0.25),
        Segment::line_to(true, 1.0, 1.0),
        Segment::close(true),
        Segment::move_to(true, -0.0, 1e21),
        Segment::move_to(true, 1e-7, 123456789.0),
    ]
    .into();

    assert_eq!(
        path.to_string(),
        "M10-10.5L20 30-1 0.25l1 1zm0 1e+21m1e-7 123456789"
    );
}

#[test]
fn arcs_and_flags() {
    let path: Path = vec![
        Segment::move_to(false, 0.0, 0.0),
        Segment::arc_to(false, [25.0, 26.0, -30.0, 0.0, 1.0, 50.0, -25.0]),
    ]
    .into();

    assert_eq!(path.to_string(), "M0 0A25 26-30 0 1 50-25");
}

#[test]
fn closing_commands() {
    let path: Path = vec![
        Segment::move_to(false, 0.0, 0.0),
        Segment::horizontal_line_to(false, 5.0),
        Segment::close(false),
        Segment::close(false),
        Segment::vertical_line_to(true, 2.0),
    ]
    .into();

    assert_eq!(path.to_string(), "M0 0H5Zv2");
}

#[test]
fn empty() {
    assert_eq!(Path::new().to_string(), "");
}
