use svgpath::path::Verb;
use svgpath::{ParseErrorKind, SvgPath};

fn svgpath(src: &str) -> SvgPath {
    src.parse().unwrap()
}

#[test]
fn parse_and_write() {
    assert_eq!(svgpath("").to_string(), "");
    assert_eq!(svgpath("M0\r 0\n\u{1680}l2-3\nz").to_string(), "M0 0l2-3z");
    assert_eq!(
        svgpath("M 10 10 M 10 100 M 100 100 M 100 10 Z").to_string(),
        "M10 10M10 100M100 100M100 10Z"
    );
    assert_eq!(
        svgpath("m 10 10 m 10 100 m 100 100 m 100 10 z").to_string(),
        "M10 10m10 100m100 100m100 10z"
    );
    assert_eq!(svgpath("M 0 0 100 100").to_string(), "M0 0L100 100");
    assert_eq!(svgpath("m 0 0 100 100").to_string(), "M0 0l100 100");
    assert_eq!(svgpath("M 0 0 R 1 1 2 2").to_string(), "M0 0R1 1 2 2");
    assert_eq!(svgpath("M .1e-2 +1e2").to_string(), "M0.001 100");
}

#[test]
fn parse_errors() {
    let error = SvgPath::parse("M0 0G 1").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::BadCommand('G'));
    assert_eq!(error.position, 4);

    let error = "z".parse::<SvgPath>().unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::MissingInitialMove);

    let error = SvgPath::parse("M0,0,").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::MissingParam);
    assert_eq!(error.position, 5);
}

#[test]
fn absolute() {
    assert_eq!(svgpath("M10 10 l 30 30").abs().to_string(), "M10 10L40 40");
    assert_eq!(svgpath("M40 30a20 40 -45 0 1 20 50").abs().to_string(), "M40 30A20 40-45 0 1 60 80");
    assert_eq!(
        svgpath("M10 10 l10 0 l0 10 Z l 0 10 l 10 0 z l-1-1").abs().to_string(),
        "M10 10L20 10 20 20ZL10 20 20 20ZL9 9"
    );
}

#[test]
fn relative() {
    assert_eq!(svgpath("M10 10 L30 30").rel().to_string(), "M10 10l20 20");
    assert_eq!(svgpath("M40 30A20 40 -45 0 1 60 80").rel().to_string(), "M40 30a20 40-45 0 1 20 50");
    assert_eq!(
        svgpath("M10 10 L20 10 L20 20 Z L10 20 L20 20 z L9 9").rel().to_string(),
        "M10 10l10 0 0 10zl0 10 10 0zl-1-1"
    );
}

#[test]
fn unshort() {
    assert_eq!(
        svgpath("M10 10 C 20 20, 40 20, 50 10 S 80 0, 90 10").unshort().to_string(),
        "M10 10C20 20 40 20 50 10 60 0 80 0 90 10"
    );
    assert_eq!(
        svgpath("M30 50 q 20 20, 40 0 t 40 0").unshort().to_string(),
        "M30 50q20 20 40 0 20-20 40 0"
    );
}

#[test]
fn unarc() {
    assert_eq!(svgpath("").unarc().round(0).to_string(), "");
    assert_eq!(
        svgpath("M100 100 A30 50 0 1 1 110 110").unarc().round(0).to_string(),
        "M100 100C89 83 87 54 96 33 105 12 122 7 136 20 149 33 154 61 147 84 141 108 125 119 110 110"
    );
    assert_eq!(
        svgpath("M100 100 a30 50 0 0 1 30 30").unarc().round(0).to_string(),
        "M100 100C113 98 125 110 130 130"
    );
    assert_eq!(
        svgpath("M 100, 100 m -75, 0 a 75,75 0 1,0 150,0 a 75,75 0 1,0 -150,0")
            .unarc()
            .round(0)
            .to_string(),
        "M100 100m-75 0C25 141 59 175 100 175 141 175 175 141 175 100 175 59 141 25 100 25 59 25 25 59 25 100"
    );
}

#[test]
fn unarc_numeric_noise() {
    // The radicand comes out slightly negative.
    assert_eq!(
        svgpath("M-0.5 0 A 0.09188163040671497 0.011583783896639943 0 0 1 0 0.5")
            .unarc()
            .round(5)
            .to_string(),
        "M-0.5 0C0.59517-0.01741 1.59491 0.08041 1.73298 0.21848 1.87105 0.35655 1.09517 0.48259 0 0.5"
    );
    // The dot product of the unit vectors comes out below -1.
    assert_eq!(
        svgpath(
            "M-0.07467194809578359 -0.3862391309812665\
             A1.2618792965076864 0.2013618852943182 90 0 1 -0.7558937461581081 -0.8010219619609416"
        )
        .unarc()
        .round(5)
        .to_string(),
        "M-0.07467-0.38624C-0.09295 0.79262-0.26026 1.65542-0.44838 1.54088\
         -0.63649 1.42634-0.77417 0.37784-0.75589-0.80102"
    );
}

#[test]
fn unarc_degenerate() {
    assert_eq!(svgpath("M100 100A123 456 90 0 1 100 100").unarc().round(0).to_string(), "M100 100L100 100");
    assert_eq!(svgpath("M100 100a123 456 90 0 1 0 0").unarc().round(0).to_string(), "M100 100l0 0");
    assert_eq!(svgpath("M100 100A0 0 0 0 1 110 110").unarc().round(0).to_string(), "M100 100L110 110");
    assert_eq!(svgpath("M100 100A0 100 0 0 1 110 110").unarc().round(0).to_string(), "M100 100L110 110");
}

#[test]
fn uncubic() {
    let path = svgpath("M10 10 C 20 40 40 40 50 10 c 10 -30 30 -30 40 0").uncubic();
    assert!(path.segments().len() > 3);
    assert!(path.segments()[1..].iter().all(|s| s.verb() == Verb::QuadraticTo));

    let path = path.abs().round(3);
    let last = path.segments().last().unwrap().params();
    assert_eq!(&last[2..], &[90.0, 10.0]);
}

#[test]
fn uncubic_applies_pending_transforms() {
    let path = svgpath("M0 0 C 0 10 10 10 10 0").translate(5.0, 5.0).uncubic();
    assert!(!path.has_pending_transforms());
    assert_eq!(path.segments()[0].params(), &[5.0, 5.0]);
}

#[test]
fn round() {
    assert_eq!(
        svgpath("M10 10 A12.5 17.5 45.5 0 0 15.5 19.5").round(0).to_string(),
        "M10 10A13 18 45.5 0 0 16 20"
    );
    assert_eq!(
        svgpath("M10 10 c 10.12 30.34 30.56 30 40.00 0.12").round(0).to_string(),
        "M10 10c10 30 31 30 40 0"
    );
    assert_eq!(svgpath("M10.123 10.456L20.4351 30.0000").round(2).to_string(), "M10.12 10.46L20.44 30");
    assert_eq!(svgpath("M1.2 1.4l1.2 1.4 l1.2 1.4").round(0).to_string(), "M1 1l1 2 2 1");
    assert_eq!(
        svgpath("M1.2 1.4 H2.4 h1.2 v2.4 h-2.4 V2.4 v-1.2").round(0).to_string(),
        "M1 1H2h2v3h-3V2v-1"
    );
    assert_eq!(
        svgpath("m0.4 0.2zm0.4 0.2m0.4 0.2m0.4 0.2zm0.4 0.2").round(0).abs().to_string(),
        "M0 0ZM1 0M1 1M2 1ZM2 1"
    );
    assert_eq!(
        svgpath("m.1 .1l.3 .3zm.1 .1l.3 .3zm0 0z").round(0).abs().to_string(),
        "M0 0L0 0ZM0 0L1 1ZM0 0Z"
    );
}

#[test]
fn into_path_applies_pending_transforms() {
    let path = svgpath("M1 2 L3 4").scale(2.0, 2.0).into_path();
    assert_eq!(path.to_string(), "M2 4L6 8");
}
