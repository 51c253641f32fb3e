use std::time::Duration;

use ark_bn254::{Bn254, Fr};
use ark_ff::UniformRand;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_kzg_das::{fft::FftSettings, kzg::KzgSettings, srs::generate_trusted_setup};

fn bench_kzg_commit(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let fs = FftSettings::<Fr>::new(12).unwrap();
    let (secret_g1, secret_g2) = generate_trusted_setup::<Bn254>(
        &Fr::from(8927347823478352432985u128),
        fs.max_width() + 1,
    );
    let kzg = KzgSettings::<Bn254>::new(&fs, secret_g1, secret_g2).unwrap();

    for width in [1024usize, 2048, 4096] {
        let coeffs: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();
        c.bench_function(&format!("bench_kzg_commit_{}", width), |b| {
            b.iter(|| kzg.commit_to_poly(black_box(&coeffs)).unwrap());
        });
    }

    let coeffs: Vec<Fr> = (0..4096).map(|_| Fr::rand(&mut rng)).collect();
    let x = Fr::rand(&mut rng);
    c.bench_function("bench_kzg_proof_single_4096", |b| {
        b.iter(|| kzg.compute_proof_single(black_box(&coeffs), &x).unwrap());
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
    targets = bench_kzg_commit
);
criterion_main!(benches);
