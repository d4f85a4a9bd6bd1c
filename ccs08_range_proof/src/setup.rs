//! Public parameters of a setup epoch. The signer picks a base `u` and number of digits `l`, creates
//! a key and signs every digit `0, 1, ..., u-1`. The prover gets the signatures, the verifier only
//! needs the public key.

use crate::{
    commitment::PedersenCommitmentKey,
    common::{perfect_range_max, DEFAULT_BASE},
    error::RangeProofError,
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, end_timer, rand::RngCore, start_timer, vec::Vec};
use digit_sig::{
    KeyPair, PublicKeyG1, SecretKey, SignatureG2, SignatureParams, SignatureParamsWithPairing,
};
use range_proof_utils::{ff::powers, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Big-endian bytes of the scalar `h` where the second commitment generator is `H = g2 * h`.
/// `h = 18560948149108576432482904553159745978835170526553990798435819795989606410925`, a public
/// constant so everyone derives the same `H`.
pub const H_SCALAR_BE_BYTES: [u8; 32] = [
    0x29, 0x09, 0x1f, 0xd6, 0x5f, 0x65, 0x3b, 0x2a, 0x25, 0xd7, 0x50, 0x93, 0x80, 0x2a, 0x09, 0xa8,
    0x21, 0x13, 0xde, 0x2d, 0x70, 0x41, 0x73, 0x33, 0xfe, 0x3a, 0x9a, 0xd6, 0x98, 0x73, 0xaa, 0xad,
];

/// Parameters known to both prover and verifier
#[serde_as]
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SharedParams<E: Pairing> {
    /// Generator for the randomness in commitments
    #[serde_as(as = "ArkObjectBytes")]
    pub H: E::G2Affine,
    pub base: u16,
    pub num_digits: u16,
}

/// Signatures on each digit `0, 1, ..., base-1`, indexed by the digit
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct SignatureTable<E: Pairing> {
    pub sigs: Vec<SignatureG2<E>>,
}

/// Everything the prover needs. Contains the signer's secret key since here the signer and prover are
/// the same entity.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProverParams<E: Pairing> {
    pub shared: SharedParams<E>,
    pub sig_params: SignatureParamsWithPairing<E>,
    pub keypair: KeyPair<E>,
    pub sigs: SignatureTable<E>,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct VerifierParams<E: Pairing> {
    pub shared: SharedParams<E>,
    pub pk: PublicKeyG1<E>,
}

/// `VerifierParams` with the pairing `e(g1, g2)` precomputed. Create once to verify many proofs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VerifierParamsWithPairing<E: Pairing> {
    pub shared: SharedParams<E>,
    pub pk: PublicKeyG1<E>,
    pub sig_params: SignatureParamsWithPairing<E>,
}

/// Create params to prove that a value is in `[0, base^num_digits)`
pub fn setup_perfect_range<R: RngCore, E: Pairing>(
    rng: &mut R,
    base: u16,
    num_digits: u16,
) -> Result<(ProverParams<E>, VerifierParams<E>), RangeProofError> {
    let setup_time = start_timer!(|| ark_std::format!(
        "Setup for base {} and {} digits",
        base, num_digits
    ));
    let shared = SharedParams::new(base, num_digits)?;
    let sig_params = SignatureParams::<E>::new();
    let keypair = KeyPair::generate(rng, &sig_params)?;
    let sigs = SignatureTable::new(base, &keypair.secret_key, &sig_params)?;
    let prover = ProverParams {
        shared,
        sig_params: sig_params.into(),
        keypair,
        sigs,
    };
    let verifier = prover.verifier_params();
    end_timer!(setup_time);
    Ok((prover, verifier))
}

impl<E: Pairing> SharedParams<E> {
    pub fn new(base: u16, num_digits: u16) -> Result<Self, RangeProofError> {
        let params = Self {
            H: Self::derive_H(),
            base,
            num_digits,
        };
        params.perfect_range_max()?;
        Ok(params)
    }

    /// `H = g2 * h` for the public scalar `h`
    pub fn derive_H() -> E::G2Affine {
        let h = E::ScalarField::from_be_bytes_mod_order(&H_SCALAR_BE_BYTES);
        (E::G2Affine::generator() * h).into_affine()
    }

    /// `base^num_digits`, the exclusive upper bound of provable values. Errors if the base or number
    /// of digits can't be used.
    pub fn perfect_range_max(&self) -> Result<u128, RangeProofError> {
        if self.base < 2 || self.num_digits == 0 {
            return Err(RangeProofError::UnsupportedParams(
                self.base,
                self.num_digits,
            ));
        }
        perfect_range_max(self.base, self.num_digits)
            .ok_or(RangeProofError::UnsupportedParams(self.base, self.num_digits))
    }

    /// Key for commitments to the values being proven. Value goes with `g2` and randomness with `H`
    pub fn commitment_key(&self) -> PedersenCommitmentKey<E::G2Affine> {
        PedersenCommitmentKey::new(E::G2Affine::generator(), self.H)
    }

    /// `[1, base, base^2, ..., base^(num_digits-1)]`
    pub fn base_powers(&self) -> Vec<E::ScalarField> {
        powers(&E::ScalarField::from(self.base), self.num_digits as u32)
    }
}

impl<E: Pairing> Default for SharedParams<E> {
    /// Base 100 and a single digit
    fn default() -> Self {
        Self {
            H: Self::derive_H(),
            base: DEFAULT_BASE,
            num_digits: 1,
        }
    }
}

impl<E: Pairing> SignatureTable<E> {
    /// Sign each digit in `0..base`. Fails if any digit can't be signed in which case a new key must be
    /// created.
    pub fn new(
        base: u16,
        sk: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Result<Self, RangeProofError> {
        let sign_time = start_timer!(|| ark_std::format!("Signing {} digits", base));
        let digits = (0..base).map(E::ScalarField::from).collect::<Vec<_>>();
        let sigs = SignatureG2::new_batch(&digits, sk, params)?;
        end_timer!(sign_time);
        Ok(Self { sigs })
    }

    pub fn get(&self, digit: u16) -> Option<&SignatureG2<E>> {
        self.sigs.get(digit as usize)
    }

    pub fn len(&self) -> usize {
        self.sigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sigs.is_empty()
    }

    /// Check every signature in the table against the public key
    pub fn verify(&self, pk: &PublicKeyG1<E>, params: &SignatureParamsWithPairing<E>) -> bool {
        cfg_into_iter!(0..self.sigs.len())
            .all(|i| self.sigs[i].verify(&E::ScalarField::from(i as u64), pk, params))
    }
}

impl<E: Pairing> ProverParams<E> {
    pub fn verifier_params(&self) -> VerifierParams<E> {
        VerifierParams {
            shared: self.shared,
            pk: self.keypair.public_key,
        }
    }

    /// Check that there is a valid signature for every digit of the base
    pub fn verify_signature_table(&self) -> bool {
        self.sigs.len() == self.shared.base as usize
            && self
                .sigs
                .verify(&self.keypair.public_key, &self.sig_params)
    }
}

impl<E: Pairing> VerifierParams<E> {
    pub fn is_valid(&self) -> bool {
        self.pk.is_valid() && !self.shared.H.is_zero() && self.shared.perfect_range_max().is_ok()
    }
}

impl<E: Pairing> From<VerifierParams<E>> for VerifierParamsWithPairing<E> {
    fn from(params: VerifierParams<E>) -> Self {
        Self {
            shared: params.shared,
            pk: params.pk,
            sig_params: SignatureParams::<E>::new().into(),
        }
    }
}

impl<E: Pairing> From<&VerifierParams<E>> for VerifierParamsWithPairing<E> {
    fn from(params: &VerifierParams<E>) -> Self {
        Self::from(*params)
    }
}

impl<E: Pairing> From<&VerifierParamsWithPairing<E>> for VerifierParamsWithPairing<E> {
    fn from(params: &VerifierParamsWithPairing<E>) -> Self {
        params.clone()
    }
}
