//! Range proof for an arbitrary range `[min, max)`. Uses 2 perfect range proofs for `[0, u^l)` where
//! `u^l > max`, one for `value - max + u^l` and the other for `value - min`. The first is in the range
//! only if `value < max` and the second only if `value >= min`.
//!
//! Both sub-proofs use the same commitment randomness so a verifier who knows the commitment `C` to
//! `value` can check that the sub-commitments are `C + g2 * (u^l - max)` and `C - g2 * min`.

use crate::{
    common::{num_digits_for, DEFAULT_BASE},
    error::RangeProofError,
    perfect_range::PerfectRangeProof,
    setup::{setup_perfect_range, ProverParams, VerifierParams, VerifierParamsWithPairing},
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, format, rand::RngCore, start_timer};
use digest::Digest;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct ArbitraryRangeProverParams<E: Pairing> {
    pub params: ProverParams<E>,
    pub min: u64,
    pub max: u64,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct ArbitraryRangeVerifierParams<E: Pairing> {
    pub params: VerifierParams<E>,
    pub min: u64,
    pub max: u64,
}

#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct ArbitraryRangeProof<E: Pairing> {
    /// Proof that `value - max + base^num_digits` is in `[0, base^num_digits)`
    pub proof1: PerfectRangeProof<E>,
    /// Proof that `value - min` is in `[0, base^num_digits)`
    pub proof2: PerfectRangeProof<E>,
}

/// Create params to prove that a value is in `[min, max)` using base 100 digits
pub fn setup_arbitrary_range<R: RngCore, E: Pairing>(
    rng: &mut R,
    min: u64,
    max: u64,
) -> Result<(ArbitraryRangeProverParams<E>, ArbitraryRangeVerifierParams<E>), RangeProofError> {
    setup_arbitrary_range_given_base(rng, min, max, DEFAULT_BASE)
}

/// Create params to prove that a value is in `[min, max)`. Uses the smallest number of digits
/// `l` such that `base^l > max`.
pub fn setup_arbitrary_range_given_base<R: RngCore, E: Pairing>(
    rng: &mut R,
    min: u64,
    max: u64,
    base: u16,
) -> Result<(ArbitraryRangeProverParams<E>, ArbitraryRangeVerifierParams<E>), RangeProofError> {
    if min > max {
        return Err(RangeProofError::InvalidRange(min, max));
    }
    let num_digits =
        num_digits_for(max, base).ok_or(RangeProofError::UnsupportedParams(base, 0))?;
    let (prover, verifier) = setup_perfect_range(rng, base, num_digits)?;
    Ok((
        ArbitraryRangeProverParams {
            params: prover,
            min,
            max,
        },
        ArbitraryRangeVerifierParams {
            params: verifier,
            min,
            max,
        },
    ))
}

/// `base^num_digits - max`, the amount added to a value to shift `max` to the top of the perfect range
fn shift_for_max<E: Pairing>(
    params: &VerifierParams<E>,
    min: u64,
    max: u64,
) -> Result<u128, RangeProofError> {
    if min > max {
        return Err(RangeProofError::InvalidRange(min, max));
    }
    params
        .shared
        .perfect_range_max()?
        .checked_sub(max as u128)
        .ok_or(RangeProofError::InvalidRange(min, max))
}

impl<E: Pairing> ArbitraryRangeProverParams<E> {
    /// Wrap params of an existing setup. The perfect range must cover `max`.
    pub fn new(params: ProverParams<E>, min: u64, max: u64) -> Result<Self, RangeProofError> {
        shift_for_max(&params.verifier_params(), min, max)?;
        Ok(Self { params, min, max })
    }

    pub fn verifier_params(&self) -> ArbitraryRangeVerifierParams<E> {
        ArbitraryRangeVerifierParams {
            params: self.params.verifier_params(),
            min: self.min,
            max: self.max,
        }
    }

    /// Prove that `value` committed with `randomness` is in `[min, max)`. Commitments for the sub-proofs
    /// are created here with the same randomness.
    pub fn prove<R: RngCore, D: Digest>(
        &self,
        rng: &mut R,
        value: u64,
        randomness: &E::ScalarField,
    ) -> Result<ArbitraryRangeProof<E>, RangeProofError> {
        if value < self.min {
            return Err(RangeProofError::OutOfRange(format!(
                "value={} should be >= min={}",
                value, self.min
            )));
        }
        if value >= self.max {
            return Err(RangeProofError::OutOfRange(format!(
                "value={} should be < max={}",
                value, self.max
            )));
        }
        let prove_time = start_timer!(|| format!("Proving for [{}, {})", self.min, self.max));
        let shift = shift_for_max(&self.params.verifier_params(), self.min, self.max)?;
        let comm_key = self.params.shared.commitment_key();

        // Less than base^num_digits since value < max
        let shifted_for_max = shift + value as u128;
        let commitment1 = comm_key.commit(&E::ScalarField::from(shifted_for_max), randomness);
        let proof1 = self.params.prove_perfect_range::<_, D>(
            rng,
            shifted_for_max,
            randomness,
            &commitment1,
        )?;

        let shifted_for_min = (value - self.min) as u128;
        let commitment2 = comm_key.commit(&E::ScalarField::from(shifted_for_min), randomness);
        let proof2 = self.params.prove_perfect_range::<_, D>(
            rng,
            shifted_for_min,
            randomness,
            &commitment2,
        )?;
        end_timer!(prove_time);
        Ok(ArbitraryRangeProof { proof1, proof2 })
    }
}

impl<E: Pairing> ArbitraryRangeProof<E> {
    /// Verify both sub-proofs. This doesn't relate the sub-commitments to any commitment of the verifier,
    /// use `Self::verify_given_commitment` for that.
    pub fn verify<D: Digest>(
        &self,
        params: &ArbitraryRangeVerifierParams<E>,
    ) -> Result<bool, RangeProofError> {
        let verify_time =
            start_timer!(|| format!("Verifying for [{}, {})", params.min, params.max));
        let params_with_pairing = VerifierParamsWithPairing::from(&params.params);
        let valid = self.proof1.verify::<D>(&params_with_pairing)?
            && self.proof2.verify::<D>(&params_with_pairing)?;
        end_timer!(verify_time);
        Ok(valid)
    }

    /// Verify both sub-proofs and that they are about the value in `commitment`
    pub fn verify_given_commitment<D: Digest>(
        &self,
        commitment: &E::G2Affine,
        params: &ArbitraryRangeVerifierParams<E>,
    ) -> Result<bool, RangeProofError> {
        let shift = shift_for_max(&params.params, params.min, params.max)?;
        let g2 = E::G2Affine::generator();
        let expected_C1 = (g2 * E::ScalarField::from(shift) + commitment).into_affine();
        let expected_C2 =
            (commitment.into_group() - g2 * E::ScalarField::from(params.min)).into_affine();
        if self.proof1.C != expected_C1 || self.proof2.C != expected_C2 {
            return Ok(false);
        }
        self.verify::<D>(params)
    }
}
