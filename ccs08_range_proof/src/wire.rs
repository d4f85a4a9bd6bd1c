//! Fixed layout byte encoding of proofs and verifier params. There are no length prefixes, sizes of the
//! group elements and scalars are fixed for a curve and the number of digits is derived from the total
//! length.
//!
//! Everything is big-endian. A group element is its affine `x` followed by `y`, and the point at infinity
//! is all zeroes. A coordinate in an extension field starts with its highest degree coefficient, so
//! `a + b*i` is written as `b || a`. Elements of the target group are written the same way as field
//! elements. Scalars and coefficients are left padded with zeroes to the byte size of their prime field. The base and number of digits in verifier params are zig-zag varints, each in a slot of 10
//! bytes, the most a varint of a 64-bit integer can take.

use crate::{
    arbitrary_range::ArbitraryRangeProof,
    error::RangeProofError,
    perfect_range::PerfectRangeProof,
    setup::{SharedParams, VerifierParams},
};
use ark_ec::{
    pairing::{Pairing, PairingOutput},
    AffineRepr,
};
use ark_ff::{Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use ark_std::{vec, vec::Vec};
use digit_sig::PublicKeyG1;
use range_proof_utils::{
    expect_equality,
    ff::{field_elem_byte_size, field_elem_to_be_bytes},
};

/// Slot size of an encoded varint
pub const VARINT_SLOT_SIZE: usize = 10;

/// Byte sizes of the encoded elements of a curve
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ElementSizes {
    pub g1: usize,
    pub g2: usize,
    pub gt: usize,
    pub scalar: usize,
}

impl ElementSizes {
    pub fn of<E: Pairing>() -> Self {
        Self {
            g1: affine_size::<E::G1Affine>(),
            g2: affine_size::<E::G2Affine>(),
            gt: coordinate_size::<E::TargetField>(),
            scalar: field_elem_byte_size::<E::ScalarField>(),
        }
    }
}

impl<E: Pairing> PerfectRangeProof<E> {
    /// Size of the encoding of a proof with `num_digits` digits
    pub fn encoded_size(num_digits: usize) -> usize {
        let sizes = ElementSizes::of::<E>();
        (num_digits + 2) * sizes.g2 + num_digits * sizes.gt + (2 * num_digits + 2) * sizes.scalar
    }

    /// Encode as `V || D || C || a || z_sigma || z_v || c || z_r`
    pub fn to_bytes(&self) -> Result<Vec<u8>, RangeProofError> {
        let num_digits = self.V.len();
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
        let mut bytes = Vec::with_capacity(Self::encoded_size(num_digits));
        for V_i in &self.V {
            bytes.append(&mut affine_to_be_bytes(V_i));
        }
        bytes.append(&mut affine_to_be_bytes(&self.D));
        bytes.append(&mut affine_to_be_bytes(&self.C));
        for a_i in &self.a {
            bytes.append(&mut target_to_be_bytes(a_i));
        }
        for z in self.z_sigma.iter().chain(self.z_v.iter()) {
            bytes.extend_from_slice(&field_elem_to_be_bytes(z));
        }
        bytes.extend_from_slice(&field_elem_to_be_bytes(&self.c));
        bytes.extend_from_slice(&field_elem_to_be_bytes(&self.z_r));
        Ok(bytes)
    }

    /// Decode from the layout of `Self::to_bytes`. Errors if the length doesn't match any number of digits,
    /// a coefficient isn't reduced or a group element isn't on its curve. Elements of the target group aren't checked for subgroup membership
    /// as verification compares them to computed values.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RangeProofError> {
        let sizes = ElementSizes::of::<E>();
        let fixed = 2 * sizes.g2 + 2 * sizes.scalar;
        let per_digit = sizes.g2 + sizes.gt + 2 * sizes.scalar;
        if bytes.len() < fixed || (bytes.len() - fixed) % per_digit != 0 {
            return Err(RangeProofError::InvalidEncodingLength(bytes.len()));
        }
        let num_digits = (bytes.len() - fixed) / per_digit;

        let mut rest = bytes;
        let V = (0..num_digits)
            .map(|_| affine_from_be_bytes::<E::G2Affine>(take(&mut rest, sizes.g2)))
            .collect::<Result<Vec<_>, _>>()?;
        let D = affine_from_be_bytes::<E::G2Affine>(take(&mut rest, sizes.g2))?;
        let C = affine_from_be_bytes::<E::G2Affine>(take(&mut rest, sizes.g2))?;
        let a = (0..num_digits)
            .map(|_| target_from_be_bytes::<E>(take(&mut rest, sizes.gt)))
            .collect::<Result<Vec<_>, _>>()?;
        let z_sigma = (0..num_digits)
            .map(|_| read_scalar(&mut rest, sizes.scalar))
            .collect::<Vec<E::ScalarField>>();
        let z_v = (0..num_digits)
            .map(|_| read_scalar(&mut rest, sizes.scalar))
            .collect::<Vec<E::ScalarField>>();
        let c = read_scalar(&mut rest, sizes.scalar);
        let z_r = read_scalar(&mut rest, sizes.scalar);
        Ok(Self {
            V,
            D,
            C,
            a,
            z_sigma,
            z_v,
            c,
            z_r,
        })
    }
}

impl<E: Pairing> VerifierParams<E> {
    pub fn encoded_size() -> usize {
        let sizes = ElementSizes::of::<E>();
        sizes.g2 + sizes.g1 + 2 * VARINT_SLOT_SIZE
    }

    /// Encode as `H || Y || base || num_digits`
    pub fn to_bytes(&self) -> Result<Vec<u8>, RangeProofError> {
        let mut bytes = Vec::with_capacity(Self::encoded_size());
        bytes.append(&mut affine_to_be_bytes(&self.shared.H));
        bytes.append(&mut affine_to_be_bytes(&self.pk.0));
        bytes.extend_from_slice(&varint_slot(self.shared.base as i64));
        bytes.extend_from_slice(&varint_slot(self.shared.num_digits as i64));
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RangeProofError> {
        if bytes.len() != Self::encoded_size() {
            return Err(RangeProofError::InvalidEncodingLength(bytes.len()));
        }
        let sizes = ElementSizes::of::<E>();
        let mut rest = bytes;
        let H = affine_from_be_bytes::<E::G2Affine>(take(&mut rest, sizes.g2))?;
        let pk = affine_from_be_bytes::<E::G1Affine>(take(&mut rest, sizes.g1))?;
        let base = read_small_int(take(&mut rest, VARINT_SLOT_SIZE))?;
        let num_digits = read_small_int(take(&mut rest, VARINT_SLOT_SIZE))?;
        let shared = SharedParams {
            H,
            base,
            num_digits,
        };
        shared.perfect_range_max()?;
        Ok(Self {
            shared,
            pk: PublicKeyG1(pk),
        })
    }
}

impl<E: Pairing> ArbitraryRangeProof<E> {
    /// Encode as `proof1 || proof2`
    pub fn to_bytes(&self) -> Result<Vec<u8>, RangeProofError> {
        let mut bytes = self.proof1.to_bytes()?;
        bytes.append(&mut self.proof2.to_bytes()?);
        Ok(bytes)
    }

    /// Both halves have the same size since both sub-proofs have the same number of digits
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RangeProofError> {
        if bytes.len() % 2 != 0 {
            return Err(RangeProofError::InvalidEncodingLength(bytes.len()));
        }
        let (first, second) = bytes.split_at(bytes.len() / 2);
        Ok(Self {
            proof1: PerfectRangeProof::from_bytes(first)?,
            proof2: PerfectRangeProof::from_bytes(second)?,
        })
    }
}

/// Byte size of an element of `F`, `extension_degree` coefficients of the prime field
pub fn coordinate_size<F: Field>() -> usize {
    F::extension_degree() as usize * field_elem_byte_size::<F::BasePrimeField>()
}

pub fn affine_size<G: AffineRepr>() -> usize {
    2 * coordinate_size::<G::BaseField>()
}

/// Coefficients of `elem` from the highest degree down, each big-endian
pub fn field_to_be_bytes<F: Field>(elem: &F) -> Vec<u8> {
    let mut coeffs = elem.to_base_prime_field_elements().collect::<Vec<_>>();
    coeffs.reverse();
    coeffs.iter().flat_map(field_elem_to_be_bytes).collect()
}

/// Inverse of `field_to_be_bytes`. Rejects coefficients that aren't less than the modulus so every
/// element has a single encoding.
pub fn field_from_be_bytes<F: Field>(bytes: &[u8]) -> Result<F, RangeProofError> {
    let size = field_elem_byte_size::<F::BasePrimeField>();
    if bytes.len() != coordinate_size::<F>() {
        return Err(RangeProofError::InvalidEncodingLength(bytes.len()));
    }
    let mut coeffs = bytes
        .chunks(size)
        .map(|chunk| {
            let coeff = F::BasePrimeField::from_be_bytes_mod_order(chunk);
            if field_elem_to_be_bytes(&coeff) == chunk {
                Ok(coeff)
            } else {
                Err(SerializationError::InvalidData)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    coeffs.reverse();
    F::from_base_prime_field_elems(&coeffs)
        .ok_or(RangeProofError::Serialization(SerializationError::InvalidData))
}

/// `x || y`, or zeroes for the point at infinity
pub fn affine_to_be_bytes<G: AffineRepr>(point: &G) -> Vec<u8> {
    match point.xy() {
        Some((x, y)) => {
            let mut bytes = field_to_be_bytes(x);
            bytes.append(&mut field_to_be_bytes(y));
            bytes
        }
        None => vec![0; affine_size::<G>()],
    }
}

/// Inverse of `affine_to_be_bytes`. The point must be on the curve and in the prime order subgroup.
pub fn affine_from_be_bytes<G: AffineRepr>(bytes: &[u8]) -> Result<G, RangeProofError> {
    if bytes.len() != affine_size::<G>() {
        return Err(RangeProofError::InvalidEncodingLength(bytes.len()));
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(G::zero());
    }
    let (x, y) = bytes.split_at(bytes.len() / 2);
    let x = field_from_be_bytes::<G::BaseField>(x)?;
    let y = field_from_be_bytes::<G::BaseField>(y)?;
    // Coordinates are re-encoded canonically and deserialized with validation
    let mut canonical = Vec::with_capacity(x.uncompressed_size() + y.uncompressed_size());
    x.serialize_uncompressed(&mut canonical)?;
    y.serialize_uncompressed(&mut canonical)?;
    Ok(G::deserialize_uncompressed(canonical.as_slice())?)
}

pub fn target_to_be_bytes<E: Pairing>(elem: &PairingOutput<E>) -> Vec<u8> {
    field_to_be_bytes(&elem.0)
}

/// Not checked to be in the target group
pub fn target_from_be_bytes<E: Pairing>(bytes: &[u8]) -> Result<PairingOutput<E>, RangeProofError> {
    Ok(PairingOutput(field_from_be_bytes(bytes)?))
}

/// Splits off the first `n` bytes. Callers check the total length beforehand.
fn take<'a>(bytes: &mut &'a [u8], n: usize) -> &'a [u8] {
    let (head, tail) = bytes.split_at(n);
    *bytes = tail;
    head
}

fn read_scalar<F: PrimeField>(bytes: &mut &[u8], size: usize) -> F {
    F::from_be_bytes_mod_order(take(bytes, size))
}

fn read_small_int(slot: &[u8]) -> Result<u16, RangeProofError> {
    let value = read_varint(slot).ok_or(RangeProofError::InvalidVarint)?;
    u16::try_from(value).map_err(|_| RangeProofError::InvalidVarint)
}

/// Zig-zag varint of `value` padded with zeroes to `VARINT_SLOT_SIZE` bytes
pub fn varint_slot(value: i64) -> [u8; VARINT_SLOT_SIZE] {
    let mut slot = [0; VARINT_SLOT_SIZE];
    let mut zig_zagged = ((value << 1) ^ (value >> 63)) as u64;
    let mut i = 0;
    while zig_zagged >= 0x80 {
        slot[i] = (zig_zagged as u8) | 0x80;
        zig_zagged >>= 7;
        i += 1;
    }
    slot[i] = zig_zagged as u8;
    slot
}

/// Reads a zig-zag varint from the start of `bytes`, ignoring anything after it. Returns `None` if
/// `bytes` ends before the varint does or the varint overflows 64 bits.
pub fn read_varint(bytes: &[u8]) -> Option<i64> {
    let mut zig_zagged = 0u64;
    let mut shift = 0;
    for (i, b) in bytes.iter().enumerate() {
        if i == VARINT_SLOT_SIZE {
            return None;
        }
        if *b < 0x80 {
            if i == VARINT_SLOT_SIZE - 1 && *b > 1 {
                return None;
            }
            zig_zagged |= (*b as u64) << shift;
            let value = (zig_zagged >> 1) as i64;
            return Some(if zig_zagged & 1 != 0 { !value } else { value });
        }
        zig_zagged |= ((*b & 0x7f) as u64) << shift;
        shift += 7;
    }
    None
}
