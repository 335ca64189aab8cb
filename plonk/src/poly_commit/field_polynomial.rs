use ark_poly::EvaluationDomain;
use turbo_algebra::prelude::*;

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order first.
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use turbo_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use turbo_algebra::bn254::BN254Scalar;
    /// use turbo_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BN254Scalar>::zero();
    /// let zero = BN254Scalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&zero), zero);
    /// assert_eq!(poly.eval(&BN254Scalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use turbo_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use turbo_algebra::bn254::BN254Scalar;
    /// use turbo_algebra::{Zero, One, ops::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero, zero]);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..=degree).map(|_| F::random(prng)).collect();
        Self::from_coefs(coefs)
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }

    /// Return the coefficient of order `order`, zero past the degree.
    pub fn coef(&self, order: usize) -> F {
        self.coefs.get(order).copied().unwrap_or_else(F::zero)
    }

    /// Evaluate a polynomial on a point.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Multiply polynomial by a constant scalar.
    /// # Example:
    /// ```
    /// use turbo_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use turbo_algebra::bn254::BN254Scalar;
    /// use turbo_algebra::{Zero, One, ops::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let mut poly = FpPolynomial::from_coefs(vec![zero, one, one]);
    /// poly.mul_scalar_assign(&two);
    /// assert_eq!(poly, FpPolynomial::from_coefs(vec![zero, two, two]));
    /// poly.mul_scalar_assign(&zero);
    /// assert!(poly.is_zero());
    /// ```
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }
}

impl<F: Domain> FpPolynomial<F> {
    /// Evaluate the polynomial over every element of `domain`.
    pub fn fft_with_domain<E: EvaluationDomain<F::Field>>(&self, domain: &E) -> Vec<F> {
        let coefs: Vec<F::Field> = self.coefs.iter().map(|x| x.get_field()).collect();
        domain
            .fft(&coefs)
            .into_iter()
            .map(F::from_field)
            .collect()
    }

    /// Evaluate the polynomial over the coset `k * domain`.
    pub fn coset_fft_with_domain<E: EvaluationDomain<F::Field>>(&self, domain: &E, k: &F) -> Vec<F> {
        let mut power = F::one();
        let coefs: Vec<F::Field> = self
            .coefs
            .iter()
            .map(|x| {
                let scaled = x.mul(&power);
                power.mul_assign(k);
                scaled.get_field()
            })
            .collect();
        domain
            .fft(&coefs)
            .into_iter()
            .map(F::from_field)
            .collect()
    }

    /// Interpolate the polynomial from its evaluations over `domain`.
    pub fn ifft_with_domain<E: EvaluationDomain<F::Field>>(domain: &E, values: &[F]) -> Self {
        let values: Vec<F::Field> = values.iter().map(|x| x.get_field()).collect();
        Self::from_coefs(
            domain
                .ifft(&values)
                .into_iter()
                .map(F::from_field)
                .collect(),
        )
    }
}
