use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::{setup_and_prove, BASES_AND_DIGITS};
use ccs08_range_proof::{setup_arbitrary_range, setup_perfect_range, VerifierParamsWithPairing};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha2::Sha256;

type Fr = <Bn254 as Pairing>::ScalarField;

fn perfect_range_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);

    let mut setup_group = c.benchmark_group("Perfect range setup");
    setup_group.sample_size(10);
    for (base, num_digits) in BASES_AND_DIGITS {
        setup_group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}^{}", base, num_digits)),
            &(base, num_digits),
            |b, &(base, num_digits)| {
                b.iter(|| {
                    setup_perfect_range::<_, Bn254>(
                        &mut rng,
                        black_box(base),
                        black_box(num_digits),
                    )
                    .unwrap()
                });
            },
        );
    }
    setup_group.finish();

    let params_and_proofs = setup_and_prove::<_, Bn254>(&mut rng);

    let mut prove_group = c.benchmark_group("Perfect range proving");
    for (i, (base, num_digits)) in BASES_AND_DIGITS.iter().enumerate() {
        let prover = &params_and_proofs[i].0;
        let value = (*base as u128).pow(*num_digits as u32) - 1;
        let randomness = Fr::rand(&mut rng);
        let commitment = prover
            .shared
            .commitment_key()
            .commit(&Fr::from(value), &randomness);
        prove_group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}^{}", base, num_digits)),
            &i,
            |b, _| {
                b.iter(|| {
                    prover
                        .prove_perfect_range::<_, Sha256>(
                            &mut rng,
                            black_box(value),
                            black_box(&randomness),
                            black_box(&commitment),
                        )
                        .unwrap()
                });
            },
        );
    }
    prove_group.finish();

    let mut verify_group = c.benchmark_group("Perfect range verifying");
    for (i, (base, num_digits)) in BASES_AND_DIGITS.iter().enumerate() {
        let (_, verifier, proof) = &params_and_proofs[i];
        let verifier = VerifierParamsWithPairing::from(verifier);
        verify_group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}^{}", base, num_digits)),
            &i,
            |b, _| {
                b.iter(|| assert!(proof.verify::<Sha256>(black_box(&verifier)).unwrap()));
            },
        );
    }
    verify_group.finish();
}

fn arbitrary_range_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1u64);
    let ranges = [(0u64, 100u64), (1000, 1000000), (0, u64::MAX)];

    let mut group = c.benchmark_group("Arbitrary range proving and verifying");
    group.sample_size(10);
    for (min, max) in ranges {
        let (prover, verifier) = setup_arbitrary_range::<_, Bn254>(&mut rng, min, max).unwrap();
        let value = min + (max - min) / 2;
        let randomness = Fr::rand(&mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("[{}, {})", min, max)),
            &value,
            |b, &value| {
                b.iter(|| {
                    let proof = prover
                        .prove::<_, Sha256>(&mut rng, black_box(value), black_box(&randomness))
                        .unwrap();
                    assert!(proof.verify::<Sha256>(&verifier).unwrap())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, perfect_range_benchmark, arbitrary_range_benchmark);
criterion_main!(benches);
