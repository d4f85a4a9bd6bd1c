use ark_ec::{
    pairing::{Pairing, PairingOutput},
    AffineRepr,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use range_proof_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Public parameters for creating and verifying signatures. These are the fixed generators of
/// both source groups.
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SignatureParams<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g1: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub g2: E::G2Affine,
}

/// `SignatureParams` with the pairing `e(g1, g2)` precomputed
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct SignatureParamsWithPairing<E: Pairing> {
    pub g1: E::G1Affine,
    pub g2: E::G2Affine,
    /// pairing e(g1, g2)
    pub g1g2: PairingOutput<E>,
}

impl<E: Pairing> SignatureParams<E> {
    pub fn new() -> Self {
        Self {
            g1: E::G1Affine::generator(),
            g2: E::G2Affine::generator(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !(self.g1.is_zero() || self.g2.is_zero())
    }
}

impl<E: Pairing> Default for SignatureParams<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Pairing> From<SignatureParams<E>> for SignatureParamsWithPairing<E> {
    fn from(params: SignatureParams<E>) -> Self {
        let g1g2 = E::pairing(params.g1, params.g2);
        Self {
            g1: params.g1,
            g2: params.g2,
            g1g2,
        }
    }
}

impl<E: Pairing> From<&SignatureParamsWithPairing<E>> for SignatureParams<E> {
    fn from(params: &SignatureParamsWithPairing<E>) -> Self {
        Self {
            g1: params.g1,
            g2: params.g2,
        }
    }
}
