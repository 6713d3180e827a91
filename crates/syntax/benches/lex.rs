use cppx_syntax::tokenize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn lex_benches(c: &mut Criterion) {
    let methods = include_str!("../../../testdata/valid/methods.cppx");
    let ctor_init = include_str!("../../../testdata/valid/ctor_init.cppx");

    c.bench_function("lex methods", |b| {
        b.iter(|| tokenize(black_box(methods.as_bytes())));
    });
    c.bench_function("lex ctor_init", |b| {
        b.iter(|| tokenize(black_box(ctor_init.as_bytes())));
    });
}

criterion_group!(benches, lex_benches);
criterion_main!(benches);
