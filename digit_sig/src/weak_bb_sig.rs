//! Weak-BB signature with public key in G1 and signature in G2

use crate::{
    common::{SignatureParams, SignatureParamsWithPairing},
    error::DigitSigError,
};
use alloc::vec::Vec;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{batch_inversion, Field, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, ops::Neg, rand::RngCore};
use range_proof_utils::{
    misc::try_rand, msm::multiply_field_elems_with_same_group_elem, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Secret key used by the signer to sign digits. Called `y` in the paper.
#[serde_as]
#[derive(
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
    Zeroize,
    ZeroizeOnDrop,
)]
pub struct SecretKey<F: PrimeField>(#[serde_as(as = "ArkObjectBytes")] pub F);

/// Public key `Y = g1 * y` used to verify signatures
#[serde_as]
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicKeyG1<E: Pairing>(#[serde_as(as = "ArkObjectBytes")] pub E::G1Affine);

/// Secret and public key of a single setup epoch
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct KeyPair<E: Pairing> {
    pub secret_key: SecretKey<E::ScalarField>,
    pub public_key: PublicKeyG1<E>,
}

#[serde_as]
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
    Zeroize,
    ZeroizeOnDrop,
)]
pub struct SignatureG2<E: Pairing>(#[serde_as(as = "ArkObjectBytes")] pub E::G2Affine);

impl<F: PrimeField> SecretKey<F> {
    /// Sample a key uniformly from the scalar field. Fails only if `rng` fails.
    pub fn new<R: RngCore>(rng: &mut R) -> Result<Self, DigitSigError> {
        Ok(Self(try_rand(rng)?))
    }
}

impl<F: PrimeField> AsRef<F> for SecretKey<F> {
    fn as_ref(&self) -> &F {
        &self.0
    }
}

impl<E: Pairing> PublicKeyG1<E> {
    pub fn generate_using_secret_key(
        secret_key: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Self {
        Self((params.g1 * secret_key.0).into())
    }

    /// Public key shouldn't be 0. A verifier on receiving this must first check that its
    /// valid and only then use it for any signature or proof of knowledge of signature verification.
    pub fn is_valid(&self) -> bool {
        !self.0.is_zero()
    }
}

impl<E: Pairing> KeyPair<E> {
    pub fn generate<R: RngCore>(
        rng: &mut R,
        params: &SignatureParams<E>,
    ) -> Result<Self, DigitSigError> {
        let secret_key = SecretKey::new(rng)?;
        let public_key = PublicKeyG1::generate_using_secret_key(&secret_key, params);
        Ok(Self {
            secret_key,
            public_key,
        })
    }
}

impl<E: Pairing> SignatureG2<E> {
    /// Create a new signature `g2 * 1/(y + message)`
    pub fn new(
        message: &E::ScalarField,
        sk: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Result<Self, DigitSigError> {
        let exponent = (sk.0 + message)
            .inverse()
            .ok_or(DigitSigError::NonInvertibleMessage)?;
        Ok(Self((params.g2 * exponent).into_affine()))
    }

    /// Sign each of `messages`. Same as calling `Self::new` on each message but with a single
    /// field inversion and a window table for `g2`. Fails without signing anything if any of the
    /// messages can't be signed.
    pub fn new_batch(
        messages: &[E::ScalarField],
        sk: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Result<Vec<Self>, DigitSigError> {
        let mut exponents = cfg_iter!(messages)
            .map(|m| sk.0 + m)
            .collect::<Vec<_>>();
        if exponents.iter().any(|e| e.is_zero()) {
            exponents.zeroize();
            return Err(DigitSigError::NonInvertibleMessage);
        }
        batch_inversion(&mut exponents);
        let sigs = multiply_field_elems_with_same_group_elem(params.g2.into_group(), &exponents);
        exponents.zeroize();
        Ok(E::G2::normalize_batch(&sigs)
            .into_iter()
            .map(|s| Self(s))
            .collect())
    }

    /// Check `e(Y + g1 * message, sig) == e(g1, g2)` using the precomputed `e(g1, g2)`
    pub fn verify(
        &self,
        message: &E::ScalarField,
        pk: &PublicKeyG1<E>,
        params: &SignatureParamsWithPairing<E>,
    ) -> bool {
        if !self.is_non_zero() {
            return false;
        }
        let ym = params.g1 * message + pk.0;
        E::pairing(ym, self.0) == params.g1g2
    }

    /// Same as `Self::verify` but does a multi-pairing instead of relying on a precomputed pairing
    pub fn verify_given_sig_params(
        &self,
        message: &E::ScalarField,
        pk: &PublicKeyG1<E>,
        params: &SignatureParams<E>,
    ) -> bool {
        if !self.is_non_zero() {
            return false;
        }
        // e(Y + g1*m, sig) == e(g1, g2) => e(-(Y + g1*m), sig) + e(g1, g2) == 0
        let ym = (params.g1 * message + pk.0).neg();
        E::multi_pairing(
            [
                E::G1Prepared::from(ym),
                E::G1Prepared::from(params.g1),
            ],
            [
                E::G2Prepared::from(self.0),
                E::G2Prepared::from(params.g2),
            ],
        )
        .is_zero()
    }

    pub fn is_non_zero(&self) -> bool {
        !self.0.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fr};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use test_utils::test_serialization;

    fn digits(base: u64) -> Vec<Fr> {
        (0..base).map(Fr::from).collect()
    }

    #[test]
    fn signature_verification() {
        let mut rng = StdRng::seed_from_u64(0u64);

        let params = SignatureParams::<Bn254>::new();
        let params_with_pairing = SignatureParamsWithPairing::from(params.clone());
        let keypair = KeyPair::generate(&mut rng, &params).unwrap();
        assert!(keypair.public_key.is_valid());

        for message in [Fr::from(0u64), Fr::from(7u64), Fr::rand(&mut rng)] {
            let sig = SignatureG2::new(&message, &keypair.secret_key, &params).unwrap();
            assert!(sig.verify(&message, &keypair.public_key, &params_with_pairing));
            assert!(sig.verify_given_sig_params(&message, &keypair.public_key, &params));

            let other = message + Fr::from(1u64);
            assert!(!sig.verify(&other, &keypair.public_key, &params_with_pairing));
            assert!(!sig.verify_given_sig_params(&other, &keypair.public_key, &params));
        }

        let other_keypair = KeyPair::generate(&mut rng, &params).unwrap();
        let sig = SignatureG2::new(&Fr::from(3u64), &keypair.secret_key, &params).unwrap();
        assert!(!sig.verify(
            &Fr::from(3u64),
            &other_keypair.public_key,
            &params_with_pairing
        ));

        let zero_sig = SignatureG2::<Bn254>(<Bn254 as Pairing>::G2Affine::zero());
        assert!(!zero_sig.verify(&Fr::from(3u64), &keypair.public_key, &params_with_pairing));
    }

    #[test]
    fn batch_signing() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let params = SignatureParams::<Bn254>::new();
        let params_with_pairing = SignatureParamsWithPairing::from(params.clone());
        let keypair = KeyPair::generate(&mut rng, &params).unwrap();

        let messages = digits(16);
        let sigs = SignatureG2::new_batch(&messages, &keypair.secret_key, &params).unwrap();
        assert_eq!(sigs.len(), messages.len());
        for (m, sig) in messages.iter().zip(sigs.iter()) {
            assert_eq!(*sig, SignatureG2::new(m, &keypair.secret_key, &params).unwrap());
            assert!(sig.verify(m, &keypair.public_key, &params_with_pairing));
        }
        assert!(SignatureG2::new_batch(&[], &keypair.secret_key, &params)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn signing_fails_when_not_invertible() {
        let params = SignatureParams::<Bn254>::new();
        // y = -5 makes y + 5 = 0
        let sk = SecretKey(-Fr::from(5u64));
        assert!(matches!(
            SignatureG2::new(&Fr::from(5u64), &sk, &params),
            Err(DigitSigError::NonInvertibleMessage)
        ));
        assert!(SignatureG2::new(&Fr::from(4u64), &sk, &params).is_ok());
        assert!(matches!(
            SignatureG2::new_batch(&digits(10), &sk, &params),
            Err(DigitSigError::NonInvertibleMessage)
        ));
        assert!(SignatureG2::new_batch(&digits(5), &sk, &params).is_ok());
    }

    #[test]
    fn works_over_bls12_381() {
        use ark_bls12_381::{Bls12_381, Fr as BlsFr};
        let mut rng = StdRng::seed_from_u64(2u64);
        let params = SignatureParams::<Bls12_381>::new();
        let keypair = KeyPair::generate(&mut rng, &params).unwrap();
        let message = BlsFr::from(9u64);
        let sig = SignatureG2::new(&message, &keypair.secret_key, &params).unwrap();
        assert!(sig.verify_given_sig_params(&message, &keypair.public_key, &params));
    }

    #[test]
    fn serialization() {
        let mut rng = StdRng::seed_from_u64(3u64);
        let params = SignatureParams::<Bn254>::new();
        let keypair = KeyPair::generate(&mut rng, &params).unwrap();
        let sig = SignatureG2::new(&Fr::from(2u64), &keypair.secret_key, &params).unwrap();

        test_serialization!(SignatureParams<Bn254>, params);
        test_serialization!(KeyPair<Bn254>, keypair);
        test_serialization!(SignatureG2<Bn254>, sig);
    }
}
