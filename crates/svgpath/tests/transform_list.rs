use svgpath::SvgPath;

fn transformed(src: &str, transform: &str) -> SvgPath {
    let path: SvgPath = src.parse().unwrap();
    path.transform(transform)
}

#[test]
fn translate() {
    assert_eq!(transformed("M10 10 L15 15", "translate(20)").to_string(), "M30 10L35 15");
    assert_eq!(transformed("M10 10 L15 15", "translate(20,10)").to_string(), "M30 20L35 25");
    assert_eq!(
        transformed("M10 10 c15 15, 20 10, 15 15", "translate(20,10)").to_string(),
        "M30 20c15 15 20 10 15 15"
    );
    assert_eq!(
        transformed("M10 10 C15 15, 20 10, 15 15", "translate(20,10)").to_string(),
        "M30 20C35 25 40 20 35 25"
    );
    assert_eq!(
        transformed("m70 70 l20 20 l-20 0 l0 -20", "translate(100,100)").to_string(),
        "M170 170l20 20-20 0 0-20"
    );
    assert_eq!(
        transformed("m70 70 l20 20 l-20 0 l0 -20", "translate(100,100)").rel().to_string(),
        "M170 170l20 20-20 0 0-20"
    );
}

#[test]
fn rotate() {
    assert_eq!(
        transformed("M10 10L15 10", "rotate(90, 10, 10)").round(0).to_string(),
        "M10 10L10 15"
    );
    assert_eq!(transformed("M0 10L0 20", "rotate(-90)").round(0).to_string(), "M10 0L20 0");
}

#[test]
fn scale() {
    assert_eq!(transformed("M5 5L15 20", "scale(2)").to_string(), "M10 10L30 40");
    assert_eq!(transformed("M5 5L30 20", "scale(.5, 1.5)").to_string(), "M2.5 7.5L15 30");
    assert_eq!(
        transformed("M5 5c15 15, 20 10, 15 15", "scale(.5, 1.5)").to_string(),
        "M2.5 7.5c7.5 22.5 10 15 7.5 22.5"
    );
}

#[test]
fn skew() {
    assert_eq!(transformed("M5 5L15 20", "skewX(75.96)").round(0).to_string(), "M25 5L95 20");
    assert_eq!(transformed("M5 5L15 20", "skewY(75.96)").round(0).to_string(), "M5 25L15 80");
}

#[test]
fn matrix() {
    assert_eq!(
        transformed("M5 5 C20 30 10 15 30 15", "matrix(1.5, 0.5, 0.5, 1.5 10, 15)").to_string(),
        "M20 25C55 70 32.5 42.5 62.5 52.5"
    );
    assert_eq!(
        transformed("M5 5 c10 12 10 15 20 30", "matrix(1.5, 0.5, 0.5, 1.5 10, 15)").to_string(),
        "M20 25c21 23 22.5 27.5 45 55"
    );
}

#[test]
fn combinations() {
    assert_eq!(
        transformed("M0 0 L 10 10 20 10", "translate(100,100) scale(2,3)").to_string(),
        "M100 100L120 130 140 130"
    );
    assert_eq!(
        transformed("M0 0 L 10 10 20 10", "rotate(90) scale(2,3)").round(0).to_string(),
        "M0 0L-30 20-30 40"
    );
    assert_eq!(
        transformed("M0 0 L 10 10 20 10", "skewX(75.96) scale(2,3)").round(0).to_string(),
        "M0 0L140 30 160 30"
    );
}

#[test]
fn misc() {
    assert_eq!(
        transformed("M0 0 L 10 10 20 10", "rotate(0) scale(1,1) translate(0,0) skewX(0) skewY(0)")
            .round(0)
            .to_string(),
        "M0 0L10 10 20 10"
    );
    assert_eq!(
        transformed(
            "M0 0 L 10 10 20 10",
            "rotate(10,0) scale(10,10,1) translate(10,10,0) skewX(10,0) skewY(10,0) matrix(0)"
        )
        .round(0)
        .to_string(),
        "M0 0L10 10 20 10"
    );
    assert_eq!(
        transformed("M0 0 H 10 V 10 Z M 100 100 h 15 v -10", "rotate(45)").round(0).to_string(),
        "M0 0L7 7 0 14ZM0 141l11 11 7-7"
    );
    assert_eq!(transformed("M10 10 L15 15", "    ").round(0).to_string(), "M10 10L15 15");
}

#[test]
fn stacked_with_method_calls() {
    let path: SvgPath = "M10 10".parse().unwrap();
    let path = path.transform("translate(10, 20)").scale(2.0, 2.0).transform("rotate(0)");
    assert_eq!(path.to_string(), "M40 60");
}
