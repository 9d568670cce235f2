use cescape::escape::{escape, hex_escape};
use cescape::unescape::unescape;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut sample = Vec::with_capacity(64 * 1024);
    while sample.len() < 64 * 1024 {
        sample.extend_from_slice(b"plain text with\ttabs, \"quotes\" and \x01\x02 control bytes\n");
        sample.extend_from_slice("caf\u{e9} \u{1f34c} ".as_bytes());
    }
    let escaped = escape(&sample);

    c.bench_function("Escape 64K of mixed bytes", |b| b.iter(|| escape(&sample)));

    c.bench_function("Hex escape 64K of mixed bytes",
        |b| b.iter(|| hex_escape(&sample))
    );

    c.bench_function("Unescape 64K of mixed bytes",
        |b| b.iter(|| unescape(&escaped).unwrap())
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
