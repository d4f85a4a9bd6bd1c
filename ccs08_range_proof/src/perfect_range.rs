//! Range proof for a perfect range `[0, u^l)`. The committed value is decomposed into `l` digits in base
//! `u` and for each digit, the prover proves knowledge of the signer's signature on it, without
//! revealing the digit or the signature. The digits are tied to the commitment by proving that their
//! weighted sum is the committed value.
//!
//! For digit `d_i` with signature `A_i = g2 * 1/(y + d_i)`, the prover randomizes it as `V_i = A_i * v_i`
//! so that `e(Y, V_i) * e(g1, V_i)^d_i = e(g1, g2)^v_i`, and proves knowledge of `d_i, v_i` with a Schnorr
//! protocol in the target group. The commitment is `C = g2 * x + H * r`.

use crate::{
    common::padded_base_n_digits,
    error::RangeProofError,
    setup::{ProverParams, VerifierParamsWithPairing},
    wire::{affine_to_be_bytes, target_to_be_bytes},
};
use ark_ec::{
    pairing::{Pairing, PairingOutput},
    AffineRepr, CurveGroup,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError, Write};
use ark_std::{cfg_into_iter, end_timer, format, mem, rand::RngCore, start_timer, vec, vec::Vec};
use digest::Digest;
use range_proof_utils::{
    expect_equality,
    ff::inner_product,
    hashing_utils::compute_random_oracle_challenge,
    misc::{try_n_rand, try_rand},
    serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// State of the prover between the commitment phase and the response phase. The random values and the
/// digits are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct PerfectRangeProofProtocol<E: Pairing> {
    /// Digits of the value as field elements, least significant first
    pub digits: Vec<E::ScalarField>,
    /// Randomness in the commitment
    pub r: E::ScalarField,
    /// Randomizers of the signatures
    pub v: Vec<E::ScalarField>,
    #[zeroize(skip)]
    pub V: Vec<E::G2Affine>,
    #[zeroize(skip)]
    pub a: Vec<PairingOutput<E>>,
    #[zeroize(skip)]
    pub C: E::G2Affine,
    #[zeroize(skip)]
    pub D: E::G2Affine,
    pub m: E::ScalarField,
    pub s: Vec<E::ScalarField>,
    pub t: Vec<E::ScalarField>,
}

#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PerfectRangeProof<E: Pairing> {
    /// Randomized signatures on the digits
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub V: Vec<E::G2Affine>,
    #[serde_as(as = "ArkObjectBytes")]
    pub D: E::G2Affine,
    /// Commitment to the value
    #[serde_as(as = "ArkObjectBytes")]
    pub C: E::G2Affine,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub a: Vec<PairingOutput<E>>,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub z_sigma: Vec<E::ScalarField>,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub z_v: Vec<E::ScalarField>,
    /// Challenge
    #[serde_as(as = "ArkObjectBytes")]
    pub c: E::ScalarField,
    #[serde_as(as = "ArkObjectBytes")]
    pub z_r: E::ScalarField,
}

impl<E: Pairing> PerfectRangeProofProtocol<E> {
    /// Commitment phase. Decomposes `value` into digits and samples all randomness from `rng` before
    /// doing any of the per-digit work, which runs in parallel with feature `parallel`.
    pub fn init<R: RngCore>(
        rng: &mut R,
        value: u128,
        randomness: E::ScalarField,
        commitment: E::G2Affine,
        params: &ProverParams<E>,
    ) -> Result<Self, RangeProofError> {
        let base = params.shared.base;
        let num_digits = params.shared.num_digits as usize;
        let digits = padded_base_n_digits(value, base, num_digits).ok_or_else(|| {
            RangeProofError::OutOfRange(format!(
                "value={} needs more than {} digits in base {}",
                value, num_digits, base
            ))
        })?;
        let sigs = digits
            .iter()
            .map(|d| {
                params.sigs.get(*d).ok_or_else(|| {
                    RangeProofError::OutOfRange(format!("no signature for digit {}", d))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let m = try_rand::<E::ScalarField, _>(rng)?;
        let v = try_n_rand::<E::ScalarField, _>(rng, num_digits)?;
        let s = try_n_rand::<E::ScalarField, _>(rng, num_digits)?;
        let t = try_n_rand::<E::ScalarField, _>(rng, num_digits)?;

        let V = cfg_into_iter!(0..num_digits)
            .map(|i| sigs[i].0 * v[i])
            .collect::<Vec<_>>();
        let V = E::G2::normalize_batch(&V);

        let g1 = params.sig_params.g1;
        let g1g2 = params.sig_params.g1g2;
        // a_i = e(g1, V_i) * -s_i + e(g1, g2) * t_i
        let a = cfg_into_iter!(0..num_digits)
            .map(|i| E::pairing(g1 * -s[i], V[i]) + g1g2 * t[i])
            .collect::<Vec<_>>();

        // D = H * m + g2 * sum(s_i * base^i)
        let D = params
            .shared
            .commitment_key()
            .commit(&inner_product(&s, &params.shared.base_powers()), &m);

        Ok(Self {
            digits: digits
                .into_iter()
                .map(E::ScalarField::from)
                .collect::<Vec<_>>(),
            r: randomness,
            v,
            V,
            a,
            C: commitment,
            D,
            m,
            s,
            t,
        })
    }

    pub fn challenge_contribution<W: Write>(&self, writer: W) -> Result<(), RangeProofError> {
        PerfectRangeProof::compute_challenge_contribution(&self.a, &self.D, writer)
    }

    /// Response phase
    pub fn gen_proof(mut self, challenge: &E::ScalarField) -> PerfectRangeProof<E> {
        let c = *challenge;
        let num_digits = self.V.len();
        let z_sigma = cfg_into_iter!(0..num_digits)
            .map(|i| self.s[i] - self.digits[i] * c)
            .collect::<Vec<_>>();
        let z_v = cfg_into_iter!(0..num_digits)
            .map(|i| self.t[i] - self.v[i] * c)
            .collect::<Vec<_>>();
        let z_r = self.m - self.r * c;
        PerfectRangeProof {
            V: mem::take(&mut self.V),
            D: self.D,
            C: self.C,
            a: mem::take(&mut self.a),
            z_sigma,
            z_v,
            c,
            z_r,
        }
    }
}

impl<E: Pairing> ProverParams<E> {
    /// Prove that `commitment = g2 * value + H * randomness` commits to a value in `[0, base^num_digits)`.
    /// The challenge is the hash of the first prover messages computed with `D`.
    pub fn prove_perfect_range<R: RngCore, D: Digest>(
        &self,
        rng: &mut R,
        value: u128,
        randomness: &E::ScalarField,
        commitment: &E::G2Affine,
    ) -> Result<PerfectRangeProof<E>, RangeProofError> {
        let prove_time = start_timer!(|| format!(
            "Proving for {} digits",
            self.shared.num_digits
        ));
        let protocol =
            PerfectRangeProofProtocol::init(rng, value, *randomness, *commitment, self)?;
        let mut challenge_bytes = vec![];
        protocol.challenge_contribution(&mut challenge_bytes)?;
        let challenge = compute_random_oracle_challenge::<E::ScalarField, D>(&challenge_bytes);
        let proof = protocol.gen_proof(&challenge);
        end_timer!(prove_time);
        Ok(proof)
    }
}

impl<E: Pairing> PerfectRangeProof<E> {
    /// Verify the proof and return whether its valid. Errors only if the proof is malformed, i.e. doesn't
    /// have one element per digit in each of its vectors. A randomized signature at infinity makes the
    /// proof invalid as it would satisfy the digit check for any `z_sigma`.
    pub fn verify<D: Digest>(
        &self,
        params: impl Into<VerifierParamsWithPairing<E>>,
    ) -> Result<bool, RangeProofError> {
        let params = params.into();
        let verify_time = start_timer!(|| format!(
            "Verifying for {} digits",
            params.shared.num_digits
        ));
        self.check_sizes(params.shared.num_digits as usize)?;

        let mut challenge_bytes = vec![];
        self.challenge_contribution(&mut challenge_bytes)?;
        let challenge = compute_random_oracle_challenge::<E::ScalarField, D>(&challenge_bytes);
        let valid = !self.has_signature_at_infinity()
            && challenge == self.c
            && self.verify_commitment(&params)
            && self.verify_digit_signatures(&params);
        end_timer!(verify_time);
        Ok(valid)
    }

    pub fn challenge_contribution<W: Write>(&self, writer: W) -> Result<(), RangeProofError> {
        Self::compute_challenge_contribution(&self.a, &self.D, writer)
    }

    /// Bytes hashed for the challenge: `a_0, a_1, ..., a_{l-1}` followed by `D`, in the wire encoding
    pub fn compute_challenge_contribution<W: Write>(
        a: &[PairingOutput<E>],
        D: &E::G2Affine,
        mut writer: W,
    ) -> Result<(), RangeProofError> {
        for a_i in a {
            writer
                .write_all(&target_to_be_bytes(a_i))
                .map_err(SerializationError::from)?;
        }
        writer
            .write_all(&affine_to_be_bytes(D))
            .map_err(SerializationError::from)?;
        Ok(())
    }

    pub fn num_digits(&self) -> usize {
        self.V.len()
    }

    fn has_signature_at_infinity(&self) -> bool {
        self.V.iter().any(|V_i| V_i.is_zero())
    }

    fn check_sizes(&self, num_digits: usize) -> Result<(), RangeProofError> {
        expect_equality!(
            self.V.len(),
            num_digits,
            RangeProofError::DigitCountMismatch
        );
        expect_equality!(
            self.a.len(),
            num_digits,
            RangeProofError::DigitCountMismatch
        );
        expect_equality!(
            self.z_sigma.len(),
            num_digits,
            RangeProofError::DigitCountMismatch
        );
        expect_equality!(
            self.z_v.len(),
            num_digits,
            RangeProofError::DigitCountMismatch
        );
        Ok(())
    }

    /// Check `D == C * c + H * z_r + g2 * sum(z_sigma_i * base^i)`
    fn verify_commitment(&self, params: &VerifierParamsWithPairing<E>) -> bool {
        let D = params
            .shared
            .commitment_key()
            .commit_as_projective(
                &inner_product(&self.z_sigma, &params.shared.base_powers()),
                &self.z_r,
            )
            + self.C * self.c;
        D.into_affine() == self.D
    }

    /// Check `a_i == e(Y * c - g1 * z_sigma_i, V_i) + e(g1, g2) * z_v_i` for each digit
    fn verify_digit_signatures(&self, params: &VerifierParamsWithPairing<E>) -> bool {
        let g1 = params.sig_params.g1;
        let g1g2 = params.sig_params.g1g2;
        let yc = params.pk.0 * self.c;
        cfg_into_iter!(0..self.V.len()).all(|i| {
            E::pairing(yc - g1 * self.z_sigma[i], self.V[i]) + g1g2 * self.z_v[i] == self.a[i]
        })
    }
}
