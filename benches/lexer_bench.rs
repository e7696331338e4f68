use calclex::{tokenize_all, Scanner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn lexer_benchmark(c: &mut Criterion) {
    let source = "3 + 4.2 * (1 - 2) ^ 2!";

    c.bench_function("tokenize simple expression", |b| {
        b.iter(|| tokenize_all(black_box(source)).unwrap())
    });

    let long_source = "(12.5 + 7) * 3 / (4 - 1) ^ 2! - ".repeat(200) + "1";

    c.bench_function("tokenize long expression", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(&long_source));
            scanner.scan_tokens().unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark);
criterion_main!(benches);
