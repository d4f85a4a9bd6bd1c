use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;

pub use serde_json;

/// The curve the wire format is specified for
pub type Curve = Bn254;
pub type Fr = <Bn254 as Pairing>::ScalarField;
pub type G1 = <Bn254 as Pairing>::G1Affine;
pub type G2 = <Bn254 as Pairing>::G2Affine;

#[macro_use]
pub mod serialization;
