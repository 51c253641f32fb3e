use std::time::Duration;

use ark_bn254::Fr;
use ark_ff::UniformRand;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_kzg_das::fft::FftSettings;

fn bench_fft(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let fs = FftSettings::<Fr>::new(14).unwrap();

    for scale in [8usize, 12, 14] {
        let width = 1usize << scale;
        let values: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();

        c.bench_function(&format!("bench_fft_fr_{}", width), |b| {
            b.iter(|| fs.fft_fr(black_box(&values), false).unwrap());
        });

        c.bench_function(&format!("bench_ifft_fr_{}", width), |b| {
            b.iter(|| fs.fft_fr(black_box(&values), true).unwrap());
        });
    }

    let evals: Vec<Fr> = (0..4096).map(|_| Fr::rand(&mut rng)).collect();
    c.bench_function("bench_das_fft_extension_4096", |b| {
        b.iter(|| fs.das_fft_extension(black_box(&evals)).unwrap());
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(10))
        .sample_size(10)
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_fft
);
criterion_main!(benches);
