use criterion::{black_box, criterion_group, criterion_main, Criterion};
use log_spammer::{Emit, Formatter, LogFormat};
use std::io;

const MESSAGE: &str = "Log message at 2024-03-09T07:05:01Z";

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Emit");

    for format in [LogFormat::Json, LogFormat::Plain] {
        let mut formatter = Formatter::new(format, io::sink());
        group.bench_function(format.to_string(), |b| {
            b.iter(|| formatter.emit(black_box(MESSAGE)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formatters);
criterion_main!(benches);
