use crate::ff::field_elem_byte_size;
use alloc::{vec, vec::Vec};
use ark_ff::PrimeField;
use ark_std::rand::{Error, RngCore};

/// Extra bytes sampled beyond the field size so that reducing modulo the field order leaves a
/// statistically negligible bias.
const EXTRA_BYTES_FOR_UNIFORMITY: usize = 16;

/// Samples a uniform field element, surfacing a failure of the entropy source instead of
/// panicking like `UniformRand` does.
pub fn try_rand<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, Error> {
    let mut bytes = vec![0u8; field_elem_byte_size::<F>() + EXTRA_BYTES_FOR_UNIFORMITY];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(F::from_le_bytes_mod_order(&bytes))
}

/// Samples `count` field elements with `try_rand`, failing on the first entropy error.
pub fn try_n_rand<F: PrimeField, R: RngCore>(rng: &mut R, count: usize) -> Result<Vec<F>, Error> {
    (0..count).map(|_| try_rand(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    struct ExhaustedRng;

    impl RngCore for ExhaustedRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
            Err(Error::from(core::num::NonZeroU32::new(Error::CUSTOM_START).unwrap()))
        }
    }

    #[test]
    fn sampling() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let elems = try_n_rand::<Fr, _>(&mut rng, 10).unwrap();
        assert_eq!(elems.len(), 10);
        for i in 1..elems.len() {
            assert_ne!(elems[i - 1], elems[i]);
        }

        assert!(try_rand::<Fr, _>(&mut ExhaustedRng).is_err());
        assert!(try_n_rand::<Fr, _>(&mut ExhaustedRng, 3).is_err());
        assert!(try_n_rand::<Fr, _>(&mut ExhaustedRng, 0).unwrap().is_empty());
    }
}
