#[macro_use]
extern crate criterion;
extern crate svgpath;

use criterion::Criterion;
use svgpath::SvgPath;

const ICON: &str = "M81.016,63.155c-0.992-0.004-1.838,0.78-1.868,1.787l-0.006,0.143c-0.1,1.4-0.728,3.061-3.145,3.061\
    c-0.982,0-2.861-2.336-4.233-4.041c-2.625-3.262-5.6-6.959-9.767-6.959c-5.1,0-10.089,1.966-12.006,2.814\
    c-1.917-0.849-6.906-2.814-12.006-2.814c-4.167,0-7.142,3.697-9.766,6.959c-1.372,1.705-3.251,4.041-4.234,4.041\
    c-2.417,0-3.045-1.66-3.145-3.062l-0.006-0.139c-0.027-1.003-0.848-1.791-1.849-1.791c-0.005,0-0.011,0-0.017,0\
    c-1.008,0.009-1.824,0.833-1.834,1.841c0,0-0.001,0.11,0.012,0.306c0.109,2.079,1.011,12.356,8.108,14.479\
    zM51.997,77.146h-4c-1.022,0-1.85,0.828-1.85,1.85s0.828,1.85,1.85,1.85h4c1.021,0,1.85-0.828,1.85-1.85\
    S53.019,77.146,51.997,77.146z\
    M26.997,53.146c-6.7,0-12.15-5.45-12.15-12.149a12.15 12.15 0 1 1 24.3 0C39.147,47.695,33.697,53.146,26.997,53.146z";

fn parse(bench: &mut Criterion) {
    bench.bench_function("parse", |b| {
        b.iter(|| SvgPath::parse(std::hint::black_box(ICON)))
    });
}

fn to_string(bench: &mut Criterion) {
    let path = SvgPath::parse(ICON).unwrap();
    bench.bench_function("to_string", |b| b.iter(|| path.to_string()));
}

fn transform_and_round(bench: &mut Criterion) {
    let path = SvgPath::parse(ICON).unwrap();
    bench.bench_function("transform and round", |b| {
        b.iter(|| {
            path.clone()
                .translate(-50.0, -50.0)
                .rotate(30.0, 0.0, 0.0)
                .scale(2.0, 2.0)
                .round(1)
                .to_string()
        })
    });
}

fn simplify(bench: &mut Criterion) {
    let path = SvgPath::parse(ICON).unwrap();
    bench.bench_function("unshort unarc uncubic", |b| {
        b.iter(|| path.clone().abs().unshort().unarc().uncubic().to_string())
    });
}

criterion_group!(pipeline, parse, to_string, transform_and_round, simplify);
criterion_main!(pipeline);
