use alloc::vec::Vec;
use ark_ff::{BigInteger, PrimeField};
use ark_std::cfg_into_iter;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inner product of 2 vectors `a` and `b`. Extra elements of the longer vector are ignored.
pub fn inner_product<F: PrimeField>(a: &[F], b: &[F]) -> F {
    let size = a.len().min(b.len());

    #[cfg(feature = "parallel")]
    let sum = cfg_into_iter!(0..size)
        .map(|i| a[i] * b[i])
        .reduce(|| F::zero(), |accum, v| accum + v);

    #[cfg(not(feature = "parallel"))]
    let sum = cfg_into_iter!(0..size)
        .map(|i| a[i] * b[i])
        .fold(F::zero(), |accum, v| accum + v);

    sum
}

/// Returns `[1, base, base^2, ..., base^(num - 1)]`
pub fn powers<F: PrimeField>(base: &F, num: u32) -> Vec<F> {
    let mut pows = Vec::with_capacity(num as usize);
    let mut current = F::one();
    for _ in 0..num {
        pows.push(current);
        current *= base;
    }
    pows
}

/// Number of bytes needed to write any element of `F` in big-endian form without loss.
pub fn field_elem_byte_size<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + 7) / 8
}

/// Fixed width big-endian encoding of a field element, left padded with zeroes.
pub fn field_elem_to_be_bytes<F: PrimeField>(elem: &F) -> Vec<u8> {
    let size = field_elem_byte_size::<F>();
    let bytes = elem.into_bigint().to_bytes_be();
    // Limb representation can be wider than the modulus, leading bytes are zero then
    bytes[bytes.len() - size..].to_vec()
}
