use ark_ec::pairing::Pairing;
use ark_std::{rand::RngCore, UniformRand};
use ccs08_range_proof::{setup_perfect_range, PerfectRangeProof, ProverParams, VerifierParams};
use sha2::Sha256;

/// Bases and number of digits covering roughly the same 64-bit range
pub const BASES_AND_DIGITS: [(u16, u16); 4] = [(4, 32), (16, 16), (100, 10), (256, 8)];

/// Setup for each base and a proof of the largest value of each perfect range
pub fn setup_and_prove<R: RngCore, E: Pairing>(
    rng: &mut R,
) -> Vec<(ProverParams<E>, VerifierParams<E>, PerfectRangeProof<E>)> {
    BASES_AND_DIGITS
        .iter()
        .map(|(base, num_digits)| {
            let (prover, verifier) = setup_perfect_range::<_, E>(rng, *base, *num_digits).unwrap();
            let value = (*base as u128).pow(*num_digits as u32) - 1;
            let randomness = E::ScalarField::rand(rng);
            let commitment = prover
                .shared
                .commitment_key()
                .commit(&E::ScalarField::from(value), &randomness);
            let proof = prover
                .prove_perfect_range::<_, Sha256>(rng, value, &randomness, &commitment)
                .unwrap();
            (prover, verifier, proof)
        })
        .collect()
}
