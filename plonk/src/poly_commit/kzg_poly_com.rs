use crate::errors::{PlonkError, Result};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use turbo_algebra::{bn254::BN254G1, prelude::*};

/// KZG commitment scheme over the group `G`, keeping only the powers of `s` in `G`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KZGCommitmentScheme<G> {
    /// The powers `s^i * G` for `i` in `0..=max_degree`.
    pub public_parameter_group_1: Vec<G>,
}

impl<G: Group> KZGCommitmentScheme<G> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<G> {
        let s = G::ScalarType::random(prng);

        let mut public_parameter_group_1: Vec<G> = Vec::with_capacity(max_degree + 1);
        let mut elem_g1 = G::get_base();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        KZGCommitmentScheme {
            public_parameter_group_1,
        }
    }
}

/// KZG commitment scheme over the BN254 curve
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254G1>;

impl<G> PolyComScheme for KZGCommitmentScheme<G>
where
    G: Group,
    G::ScalarType: Domain,
{
    type Field = G::ScalarType;
    type Commitment = G;

    fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len().saturating_sub(1)
    }

    fn commit(&self, polynomial: &FpPolynomial<Self::Field>) -> Result<G> {
        let coefs = polynomial.get_coefs_ref();
        if coefs.len() > self.public_parameter_group_1.len() {
            return Err(PlonkError::DegreeError);
        }

        let coefs_ref: Vec<&Self::Field> = coefs.iter().collect();
        let params_ref: Vec<&G> = self.public_parameter_group_1[0..coefs.len()]
            .iter()
            .collect();

        Ok(G::multi_exp(&coefs_ref, &params_ref))
    }
}
