use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digit_sig::{KeyPair, SignatureG2, SignatureParams};

macro_rules! sign_digits {
    ($curve: ident, $name: expr, $rng: ident, $c: ident) => {
        let params = SignatureParams::<$curve>::new();
        let keypair = KeyPair::<$curve>::generate(&mut $rng, &params).unwrap();
        let mut group = $c.benchmark_group($name);
        for base in [10u64, 100, 1000] {
            let digits = (0..base)
                .map(<$curve as Pairing>::ScalarField::from)
                .collect::<Vec<_>>();
            group.bench_with_input(BenchmarkId::new("one by one", base), &base, |b, _| {
                b.iter(|| {
                    digits
                        .iter()
                        .map(|d| SignatureG2::new(black_box(d), &keypair.secret_key, &params))
                        .collect::<Result<Vec<_>, _>>()
                        .unwrap()
                });
            });
            group.bench_with_input(BenchmarkId::new("batch", base), &base, |b, _| {
                b.iter(|| {
                    SignatureG2::new_batch(black_box(&digits), &keypair.secret_key, &params)
                        .unwrap()
                });
            });
        }
        group.finish();
    };
}

fn digit_signing_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    sign_digits!(Bn254, "Digit signing BN254", rng, c);
    sign_digits!(Bls12_381, "Digit signing BLS12-381", rng, c);
}

criterion_group!(benches, digit_signing_benchmark);
criterion_main!(benches);
