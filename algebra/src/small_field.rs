#![allow(non_local_definitions)]

use crate::prime_field::impl_prime_field_scalar;
use crate::traits::Scalar;
use ark_ff::fields::{Fp64, MontBackend, MontConfig};

#[derive(MontConfig)]
#[modulus = "101"]
#[generator = "2"]
pub struct F101Config;

/// The arkworks field with 101 elements.
pub type F101 = Fp64<MontBackend<F101Config, 1>>;

/// A toy prime field of order 101, used to check constants by hand.
/// Its two-adicity is 2, so FFT domains of size at most 4 exist.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct F101Scalar(pub(crate) F101);

impl_prime_field_scalar!(F101Scalar, F101);

impl F101Scalar {
    /// Return the canonical integer representative in `[0, 101)`.
    pub fn to_u64(&self) -> u64 {
        crate::utils::u64_limbs_from_bytes(&self.to_bytes())
            .first()
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::F101Scalar;
    use crate::prelude::*;
    use crate::traits::group_tests::{test_scalar_operations, test_scalar_serialization};
    use ark_ff::FftField;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<F101Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<F101Scalar>();
        assert_eq!(F101Scalar::bytes_len(), 1);
    }

    #[test]
    fn reduction_and_inverse() {
        assert_eq!(F101Scalar::from(102u32), F101Scalar::one());
        assert_eq!(F101Scalar::from(100u32).to_u64(), 100);
        // 14 * 13 = 182 = 81 mod 101
        assert_eq!(
            F101Scalar::from(14u32).mul(&F101Scalar::from(13u32)).to_u64(),
            81
        );
        let inv = F101Scalar::from(2u32).inv().unwrap();
        assert_eq!(inv.to_u64(), 51);
    }

    #[test]
    fn generator_and_roots() {
        let g = F101Scalar::multiplicative_generator();
        assert_eq!(g.to_u64(), 2);
        let exponent = u64_limbs_from_bytes(&F101Scalar::field_size_minus_one_half());
        assert_eq!(g.pow(&exponent), F101Scalar::one().neg());

        let root = F101Scalar::from_field(
            <<F101Scalar as Domain>::Field as FftField>::get_root_of_unity(4).unwrap(),
        );
        assert_eq!(root.pow(&[4]), F101Scalar::one());
        assert_ne!(root.pow(&[2]), F101Scalar::one());
    }
}
