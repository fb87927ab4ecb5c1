//! Benchmarks for markdown rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdp::render::{TemplateSource, markdown_fragment, render, sanitize};

fn bench_render_fixture(c: &mut Criterion) {
    let md = include_bytes!("../tests/fixtures/test1.md");
    c.bench_function("render_fixture", |b| {
        b.iter(|| render(black_box(md), &TemplateSource::Default, "test1.md").unwrap())
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let md = "# Title\n\n<div onclick=\"x()\">box</div>\n\n".repeat(50);
    let fragment = markdown_fragment(&md);
    c.bench_function("sanitize", |b| b.iter(|| sanitize(black_box(&fragment))));
}

criterion_group!(benches, bench_render_fixture, bench_sanitize);
criterion_main!(benches);
