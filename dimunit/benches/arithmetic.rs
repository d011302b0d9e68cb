use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dimunit::{add, dims, mul, FormatSpec, HasDimensions, Length, Operation, Quantity, TypedQuantity};

fn bench_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_place");

    let step = Quantity::new(0.5, dims::METER);
    group.bench_function("add_in_place", |b| {
        b.iter(|| {
            let mut acc = Quantity::new(0.0, dims::METER);
            for _ in 0..1000 {
                black_box(acc.add_in_place(black_box(&step)).is_ok());
            }
            black_box(acc)
        });
    });

    let factor = Quantity::new(1.0001, dims::SECOND);
    group.bench_function("mul_in_place", |b| {
        b.iter(|| {
            let mut acc = Quantity::new(1.0, dims::METER);
            for _ in 0..16 {
                acc.mul_in_place(black_box(&factor));
            }
            black_box(acc)
        });
    });

    group.bench_function("mismatch", |b| {
        let mut acc = Quantity::new(1.0, dims::METER);
        let wrong = Quantity::new(1.0, dims::SECOND);
        b.iter(|| black_box(acc.add_in_place(black_box(&wrong)).is_err()));
    });

    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    for size in [10usize, 100, 1000] {
        let operands: Vec<Quantity> = (0..size).map(|i| Quantity::new(i as f64, dims::JOULE)).collect();

        group.bench_with_input(BenchmarkId::new("add", size), &operands, |b, input| {
            b.iter(|| add(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("max", size), &operands, |b, input| {
            b.iter(|| Operation::Max.reduce(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("mul", size), &operands, |b, input| {
            b.iter(|| mul(black_box(input)));
        });
    }

    group.finish();
}

fn bench_typed_and_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_and_format");

    let q = Quantity::new(1.61619926e-35, dims::METER);
    group.bench_function("assign_from", |b| {
        let mut l = Length::default();
        b.iter(|| black_box(l.assign_from(black_box(&q))));
    });

    let spec: FormatSpec = FormatSpec::new('e').with_precision(3);
    group.bench_function("format_exponent", |b| {
        b.iter(|| black_box(&q).format(&spec));
    });
    group.bench_function("display", |b| {
        b.iter(|| black_box(&q).to_string());
    });

    group.finish();
}

criterion_group!(benches, bench_in_place, bench_reductions, bench_typed_and_format);
criterion_main!(benches);
