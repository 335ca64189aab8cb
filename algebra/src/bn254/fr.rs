use crate::prime_field::impl_prime_field_scalar;
use crate::traits::Scalar;
use ark_bn254::Fr;

/// The wrapped struct for `ark_bn254::Fr`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Scalar(pub(crate) Fr);

impl_prime_field_scalar!(BN254Scalar, Fr);

impl BN254Scalar {
    /// Create a new scalar element from the arkworks-rs representation.
    pub const fn new(is_positive: bool, limbs: &[u64]) -> Self {
        BN254Scalar(Fr::from_sign_and_limbs(is_positive, limbs))
    }
}
