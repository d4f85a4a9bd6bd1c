use ark_ff::PrimeField;
use digest::Digest;

/// Random oracle used for Fiat-Shamir challenges. The digest of `challenge_bytes` is read as a
/// big-endian unsigned integer and reduced modulo the field order.
pub fn compute_random_oracle_challenge<F: PrimeField, D: Digest>(challenge_bytes: &[u8]) -> F {
    F::from_be_bytes_mod_order(&D::digest(challenge_bytes))
}
