use crate::errors::Result;
use crate::poly_commit::field_polynomial::FpPolynomial;
use turbo_algebra::traits::{Domain, Group};

/// Trait for polynomial commitment scheme.
pub trait PolyComScheme: Sized {
    /// Type of prime field.
    type Field: Domain;

    /// Type of commitment produces, a point of a group over `Field`.
    type Commitment: Group<ScalarType = Self::Field>;

    /// Return the max degree of the polynomials that can be committed.
    fn max_degree(&self) -> usize;

    /// Commits to the polynomial, commitment is binding.
    fn commit(&self, polynomial: &FpPolynomial<Self::Field>) -> Result<Self::Commitment>;

    /// Evaluate the polynomial at a point.
    fn eval(&self, polynomial: &FpPolynomial<Self::Field>, point: &Self::Field) -> Self::Field {
        polynomial.eval(point)
    }
}
