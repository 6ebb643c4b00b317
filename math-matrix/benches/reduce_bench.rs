use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_matrix::{Matrix, ReduceConfig, mat_multiplication, reduce, solve};
use ndarray::Array1;

fn dominant_matrix(n: usize) -> Matrix {
    let mut values = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let v = if i == j {
                2.0 * n as f64
            } else {
                ((i * 31 + j * 17) % 11) as f64 / 11.0 - 0.5
            };
            values.push(v);
        }
    }
    Matrix::from_row_major(n, n, values).unwrap()
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    for n in [8, 32, 128] {
        let a = dominant_matrix(n);
        let b = Array1::from_elem(n, 1.0);

        group.bench_with_input(BenchmarkId::new("in_place", n), &n, |bench, _| {
            bench.iter(|| {
                let mut m = a.clone();
                let mut rhs = b.clone();
                reduce(black_box(&mut m), black_box(&mut rhs)).unwrap();
                black_box(rhs);
            })
        });

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |bench, _| {
            let config = ReduceConfig::default();
            bench.iter(|| black_box(solve(black_box(&a), black_box(&b), &config).unwrap()))
        });
    }
    group.finish();
}

fn bench_mat_multiplication(c: &mut Criterion) {
    let a = dominant_matrix(64);
    let b = dominant_matrix(64);

    c.bench_function("mat_multiplication_64", |bench| {
        bench.iter(|| black_box(mat_multiplication(black_box(&a), black_box(&b)).unwrap()))
    });
}

criterion_group!(benches, bench_reduce, bench_mat_multiplication);
criterion_main!(benches);
