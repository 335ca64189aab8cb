/// Implement the arithmetic, `Scalar`, `Domain` and serde traits for a
/// newtype around an arkworks prime field.
macro_rules! impl_prime_field_scalar {
    ($t:ident, $inner:ty) => {
        impl core::fmt::Debug for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let value: num_bigint::BigUint =
                    ark_ff::PrimeField::into_bigint(self.0).into();
                <num_bigint::BigUint as core::fmt::Debug>::fmt(&value, f)
            }
        }

        impl $crate::One for $t {
            #[inline]
            fn one() -> Self {
                Self(<$inner as $crate::One>::one())
            }
        }

        impl $crate::Zero for $t {
            #[inline]
            fn zero() -> Self {
                Self(<$inner as $crate::Zero>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                $crate::Zero::is_zero(&self.0)
            }
        }

        impl core::ops::Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl core::ops::Mul for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl core::iter::Sum<$t> for $t {
            #[inline]
            fn sum<I: Iterator<Item = $t>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), core::ops::Add::add)
            }
        }

        impl<'a> core::ops::Add<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> core::ops::AddAssign<&'a $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += &rhs.0;
            }
        }

        impl<'a> core::ops::Sub<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> core::ops::SubAssign<&'a $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= &rhs.0;
            }
        }

        impl<'a> core::ops::Mul<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> core::ops::MulAssign<&'a $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= &rhs.0;
            }
        }

        impl<'a> core::iter::Sum<&'a $t> for $t {
            #[inline]
            fn sum<I: Iterator<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), core::ops::Add::add)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl From<u32> for $t {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $t {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl $crate::traits::Scalar for $t {
            #[inline]
            fn random<R: $crate::rand::CryptoRng + $crate::rand::RngCore>(rng: &mut R) -> Self {
                Self(<$inner as $crate::UniformRand>::rand(rng))
            }

            #[inline]
            fn multiplicative_generator() -> Self {
                Self(<$inner as ark_ff::FftField>::GENERATOR)
            }

            #[inline]
            fn get_field_size_le_bytes() -> ark_std::vec::Vec<u8> {
                let mut bytes = ark_ff::BigInteger::to_bytes_le(
                    &<$inner as ark_ff::PrimeField>::MODULUS,
                );
                bytes.truncate(Self::bytes_len());
                bytes
            }

            #[inline]
            fn bytes_len() -> usize {
                (<$inner as ark_ff::PrimeField>::MODULUS_BIT_SIZE as usize + 7) / 8
            }

            #[inline]
            fn to_bytes(&self) -> ark_std::vec::Vec<u8> {
                let mut bytes =
                    ark_ff::BigInteger::to_bytes_le(&ark_ff::PrimeField::into_bigint(self.0));
                bytes.truncate(Self::bytes_len());
                bytes
            }

            #[inline]
            fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                if bytes.len() > Self::bytes_len() {
                    return Err($crate::errors::AlgebraError::DeserializationError);
                }
                Ok(Self(<$inner as ark_ff::PrimeField>::from_le_bytes_mod_order(
                    bytes,
                )))
            }

            #[inline]
            fn inv(&self) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                ark_ff::Field::inverse(&self.0)
                    .map(Self)
                    .ok_or($crate::errors::AlgebraError::GroupInversionError)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(ark_ff::Field::square(&self.0))
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                Self(ark_ff::Field::pow(&self.0, exponent))
            }
        }

        impl $crate::traits::Domain for $t {
            type Field = $inner;

            #[inline]
            fn get_field(&self) -> Self::Field {
                self.0
            }

            #[inline]
            fn from_field(field: Self::Field) -> Self {
                Self(field)
            }
        }

        $crate::serialize_deserialize!($t);
    };
}

pub(crate) use impl_prime_field_scalar;
