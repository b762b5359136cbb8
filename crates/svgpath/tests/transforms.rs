use svgpath::SvgPath;

fn svgpath(src: &str) -> SvgPath {
    src.parse().unwrap()
}

#[test]
fn translate() {
    assert_eq!(
        svgpath("M10 10 C 20 40 40 40 50 10").translate(5.0, 15.0).to_string(),
        "M15 25C25 55 45 55 55 25"
    );
    assert_eq!(
        svgpath("M10 10 c 10 30 30 30 40 0").translate(5.0, 15.0).to_string(),
        "M15 25c10 30 30 30 40 0"
    );
    assert_eq!(svgpath("M10 10H40h50").translate(10.0, 15.0).to_string(), "M20 25H50h50");
    assert_eq!(svgpath("M10 10V40v50").translate(10.0, 15.0).to_string(), "M20 25V55v50");
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50").translate(10.0, 15.0).round(0).to_string(),
        "M50 45a40 20 45 0 1 20 50"
    );
    assert_eq!(
        svgpath("M40 30A20 40 -45 0 1 20 50").translate(10.0, 15.0).round(0).to_string(),
        "M50 45A40 20 45 0 1 30 65"
    );
}

#[test]
fn scale() {
    assert_eq!(
        svgpath("M10 10 C 20 40 40 40 50 10").scale(2.0, 1.5).to_string(),
        "M20 15C40 60 80 60 100 15"
    );
    assert_eq!(
        svgpath("M10 10 c 10 30 30 30 40 0").scale(2.0, 1.5).to_string(),
        "M20 15c20 45 60 45 80 0"
    );
    assert_eq!(svgpath("M10 10H40h50").scale(2.0, 1.5).to_string(), "M20 15H80h100");
    assert_eq!(svgpath("M10 10V40v50").scale(2.0, 1.5).to_string(), "M20 15V60v75");
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50").scale(2.0, 1.5).round(0).to_string(),
        "M80 45a72 34 32.04 0 1 40 75"
    );
    assert_eq!(
        svgpath("M40 30A20 40 -45 0 1 20 50").scale(2.0, 1.5).round(0).to_string(),
        "M80 45A72 34 32.04 0 1 40 75"
    );
}

#[test]
fn rotate() {
    assert_eq!(
        svgpath("M10 10L15 10").rotate(90.0, 10.0, 10.0).round(0).to_string(),
        "M10 10L10 15"
    );
    assert_eq!(
        svgpath("M0 10L0 20").rotate(-90.0, 0.0, 0.0).round(0).to_string(),
        "M10 0L20 0"
    );
    assert_eq!(
        svgpath("M 100 100 A 90 30 0 1 1 200 200").rotate(45.0, 0.0, 0.0).round(0).to_string(),
        "M0 141A90 30 45 1 1 0 283"
    );
    assert_eq!(
        svgpath("M 100 100 a 90 30 15 1 1 200 200").rotate(20.0, 0.0, 0.0).round(0).to_string(),
        "M60 128a90 30 35 1 1 119 257"
    );
}

#[test]
fn skew() {
    assert_eq!(svgpath("M5 5L15 20").skew_x(75.96).round(0).to_string(), "M25 5L95 20");
    assert_eq!(svgpath("M5 5L15 20").skew_y(75.96).round(0).to_string(), "M5 25L15 80");
}

#[test]
fn matrix() {
    let m = [1.5, 0.5, 0.5, 1.5, 10.0, 15.0];
    assert_eq!(
        svgpath("M5 5 C20 30 10 15 30 15").matrix(m).to_string(),
        "M20 25C55 70 32.5 42.5 62.5 52.5"
    );
    assert_eq!(
        svgpath("M5 5 c10 12 10 15 20 30").matrix(m).to_string(),
        "M20 25c21 23 22.5 27.5 45 55"
    );
    assert_eq!(
        svgpath("M5 5 C20 30 10 15 30 15").matrix([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).to_string(),
        "M5 5C20 30 10 15 30 15"
    );
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50").matrix(m).round(0).to_string(),
        "M85 80a80 20 45 0 1 55 85"
    );
    assert_eq!(
        svgpath("M40 30A20 40 -45 0 1 20 50").matrix(m).round(0).to_string(),
        "M85 80A80 20 45 0 1 65 100"
    );
}

#[test]
fn combinations() {
    assert_eq!(
        svgpath("M0 0 L 10 10 20 10").scale(2.0, 3.0).translate(100.0, 100.0).to_string(),
        "M100 100L120 130 140 130"
    );
    assert_eq!(
        svgpath("M0 0 L 10 10 20 10").scale(2.0, 3.0).rotate(90.0, 0.0, 0.0).round(0).to_string(),
        "M0 0L-30 20-30 40"
    );
    assert_eq!(
        svgpath("M0 0 L 10 10 20 10")
            .translate(0.0, 0.0)
            .scale(1.0, 1.0)
            .rotate(0.0, 10.0, 10.0)
            .round(0)
            .to_string(),
        "M0 0L10 10 20 10"
    );
}

#[test]
fn relative_conversion_keeps_transforms_pending() {
    let path = svgpath("m70 70 l20 20 l-20 0 l0 -20").translate(100.0, 100.0).rel();
    assert!(path.has_pending_transforms());
    assert_eq!(path.to_string(), "M170 170l20 20-20 0 0-20");
}

#[test]
fn first_relative_move() {
    assert_eq!(svgpath("m70 70 70 70").translate(100.0, 100.0).to_string(), "M170 170l70 70");

    let mut path = svgpath("m70 70 70 70");
    path.path_mut()[0].set_relative(true);
    assert_eq!(path.translate(100.0, 100.0).to_string(), "m170 170l70 70");
}

#[test]
fn arc_edge_cases() {
    assert_eq!(
        svgpath("M40 30a0 40 -45 0 1 20 50Z M40 30A20 0 -45 0 1 20 50Z").scale(2.0, 2.0).to_string(),
        "M80 60l40 100ZM80 60L40 100Z"
    );
    assert_eq!(svgpath("M40 30a20 40 -45 0 1 0 0").scale(2.0, 2.0).to_string(), "M80 60l0 0");
    assert_eq!(svgpath("M40 30A20 40 -45 0 1 40 30").scale(2.0, 2.0).to_string(), "M80 60L80 60");
    assert_eq!(svgpath("M40 30a20 40 -45 0 1 20 50").scale(0.0, 1.0).to_string(), "M0 30l0 50");
    assert_eq!(svgpath("M40 30A20 40 -45 0 1 20 50").scale(1.0, 0.0).to_string(), "M40 0L20 0");
}

#[test]
fn arcs_rotated_by_right_angles() {
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50").rotate(90.0, 0.0, 0.0).round(0).to_string(),
        "M-30 40a20 40 45 0 1-50 20"
    );
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50")
            .matrix([0.0, 1.0, -1.0, 0.0, 0.0, 0.0])
            .round(0)
            .to_string(),
        "M-30 40a20 40 45 0 1-50 20"
    );
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50").rotate(-90.0, 0.0, 0.0).round(0).to_string(),
        "M30-40a20 40 45 0 1 50-20"
    );
    assert_eq!(
        svgpath("M40 30a20 40 -45 0 1 20 50")
            .matrix([0.0, -1.0, 1.0, 0.0, 0.0, 0.0])
            .round(0)
            .to_string(),
        "M30-40a20 40 45 0 1 50-20"
    );
}

#[test]
fn circle_like_arcs() {
    assert_eq!(
        svgpath("M50 50A30 30 -45 0 1 100 100").scale(0.5, 0.5).round(0).to_string(),
        "M25 25A15 15 0 0 1 50 50"
    );
}

#[test]
fn almost_zero_eigen_values() {
    assert_eq!(
        svgpath("M148.7 277.9A228.7 113.2 90 1 0 159.3 734.8").translate(10.0, 0.0).round(1).to_string(),
        "M158.7 277.9A228.7 113.2 90 1 0 169.3 734.8"
    );
}

#[test]
fn flipped_images_flip_the_sweep_flag() {
    assert_eq!(
        svgpath("M10 10A20 15 90 0 1 30 10").scale(1.0, -1.0).translate(0.0, 40.0).to_string(),
        "M10 30A20 15 90 0 0 30 30"
    );
    assert_eq!(
        svgpath("M10 10A20 15 90 0 1 30 10").scale(-1.0, -1.0).translate(40.0, 40.0).to_string(),
        "M30 30A20 15 90 0 1 10 30"
    );
}
