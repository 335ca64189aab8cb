/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

/// A convenient macro to initialize a field element over the BN254 curve.
#[macro_export]
macro_rules! new_bn254_fr {
    ($c0:expr) => {{
        let (is_positive, limbs) = ark_ff::ark_ff_macros::to_sign_and_limbs!($c0);
        BN254Scalar::new(is_positive, &limbs)
    }};
}

#[cfg(test)]
mod bn254_groups_test {
    use crate::{
        bn254::{BN254Scalar, BN254G1, BN254_SCALAR_LEN},
        prelude::*,
        traits::group_tests::{test_scalar_operations, test_scalar_serialization},
    };
    use ark_bn254::G1Affine;
    use ark_ec::CurveGroup;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
        assert_eq!(BN254Scalar::bytes_len(), BN254_SCALAR_LEN);
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BN254Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);

        assert!(BN254Scalar::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn scalar_constant_macro() {
        let value = new_bn254_fr!("12345");
        assert_eq!(value, BN254Scalar::from(12345u32));
    }

    #[test]
    fn field_size_minus_one_half() {
        // the generator is a quadratic non-residue
        let g = BN254Scalar::multiplicative_generator();
        let exponent = u64_limbs_from_bytes(&BN254Scalar::field_size_minus_one_half());
        assert_eq!(g.pow(&exponent), BN254Scalar::one().neg());
    }

    #[test]
    fn curve_points_respresentation_of_g1() {
        let mut prng = test_rng();

        let g1 = BN254G1::get_base();
        let s1 = BN254Scalar::from(50 + prng.next_u32() % 50);

        let g1 = g1.mul(&s1);

        let g1_prime = BN254G1::random(&mut prng);

        // This is the projective representation of g1
        let g1_projective = g1.0;
        let g1_prime_projective = g1_prime.0;

        // This is the affine representation of g1_prime
        let g1_prime_affine = G1Affine::from(g1_prime_projective);

        let g1_pr_plus_g1_prime_pr = g1_projective.add(&g1_prime_projective);

        // These two operations correspond to summation of points,
        // one in projective form and the other in affine form
        let g1_pr_plus_g1_prime_af = g1_projective.add(&g1_prime_affine);
        assert_eq!(g1_pr_plus_g1_prime_pr, g1_pr_plus_g1_prime_af);

        let g1_pr_plus_g1_prime_af = g1_projective.add(&g1_prime_projective.into_affine());
        assert_eq!(g1_pr_plus_g1_prime_pr, g1_pr_plus_g1_prime_af);
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BN254G1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        assert_eq!(g1_bytes.len(), BN254G1::COMPRESSED_LEN);
        let g1_recovered = BN254G1::from_compressed_bytes(&g1_bytes).unwrap();
        assert_eq!(g1, g1_recovered);

        let json = serde_json::to_string(&g1).unwrap();
        let g1_de: BN254G1 = serde_json::from_str(&json).unwrap();
        assert_eq!(g1, g1_de);
    }

    #[test]
    fn point_validity() {
        let mut prng = test_rng();
        assert!(BN254G1::get_base().is_valid_point());
        assert!(BN254G1::random(&mut prng).is_valid_point());
        assert!(!BN254G1::get_identity().is_valid_point());
    }

    #[test]
    fn multi_exp_matches_naive_sum() {
        let mut prng = test_rng();
        let scalars: Vec<BN254Scalar> = (0..5).map(|_| BN254Scalar::random(&mut prng)).collect();
        let points: Vec<BN254G1> = (0..5).map(|_| BN254G1::random(&mut prng)).collect();

        let expected = scalars
            .iter()
            .zip(points.iter())
            .fold(BN254G1::get_identity(), |acc, (s, p)| acc.add(&p.mul(s)));

        let msm = BN254G1::multi_exp(
            &scalars.iter().collect::<Vec<_>>(),
            &points.iter().collect::<Vec<_>>(),
        );
        assert_eq!(msm, expected);
    }
}
