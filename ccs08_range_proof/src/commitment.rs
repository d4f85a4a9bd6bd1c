use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use range_proof_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Key for a Pedersen commitment `g * value + h * randomness`. Nobody should know the discrete log
/// of `h` wrt `g` or the commitment stops being binding.
#[serde_as]
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PedersenCommitmentKey<G: AffineRepr> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g: G,
    #[serde_as(as = "ArkObjectBytes")]
    pub h: G,
}

impl<G: AffineRepr> PedersenCommitmentKey<G> {
    pub fn new(g: G, h: G) -> Self {
        Self { g, h }
    }

    /// Commit to `value` using `randomness`
    pub fn commit(&self, value: &G::ScalarField, randomness: &G::ScalarField) -> G {
        self.commit_as_projective(value, randomness).into_affine()
    }

    pub fn commit_as_projective(
        &self,
        value: &G::ScalarField,
        randomness: &G::ScalarField,
    ) -> G::Group {
        self.g * value + self.h * randomness
    }
}
