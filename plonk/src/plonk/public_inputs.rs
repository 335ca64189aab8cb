use crate::errors::{PlonkError, Result};
use crate::plonk::domain::EvaluationDomain;
use turbo_algebra::prelude::*;

/// Compute the correction the permutation grand product needs when the
/// first `inputs.len()` rows of the second wire hold the public inputs:
///
/// `prod_i (x_i + gamma + beta * k0 * g^i) / (x_i + gamma + beta * g^i)`
///
/// where `g` is `subgroup_generator` and `k0` the coset generator of the
/// second wire. An empty list gives one.
pub fn compute_public_input_delta<F: Scalar>(
    inputs: &[F],
    beta: &F,
    gamma: &F,
    subgroup_generator: &F,
    k0: &F,
) -> Result<F> {
    let mut numerator = F::one();
    let mut denominator = F::one();
    let mut root = F::one();

    let beta_k0 = beta.mul(k0);
    for input in inputs.iter() {
        let input_plus_gamma = input.add(gamma);
        numerator.mul_assign(&input_plus_gamma.add(&beta_k0.mul(&root)));
        denominator.mul_assign(&input_plus_gamma.add(&beta.mul(&root)));
        root.mul_assign(subgroup_generator);
    }

    let denominator_inv = denominator
        .inv()
        .map_err(|_| PlonkError::DivisionByZero)?;
    Ok(numerator.mul(&denominator_inv))
}

/// Same as [`compute_public_input_delta`], with the generator and `k0`
/// taken from the domain. Fails when there are more inputs than rows.
pub fn compute_public_input_delta_checked<F: Domain>(
    inputs: &[F],
    beta: &F,
    gamma: &F,
    domain: &EvaluationDomain<F>,
) -> Result<F> {
    if inputs.len() > domain.size() {
        return Err(PlonkError::TooManyPublicInputs {
            inputs: inputs.len(),
            circuit_size: domain.size(),
        });
    }
    compute_public_input_delta(
        inputs,
        beta,
        gamma,
        &domain.generator(),
        &domain.coset_generators()[1],
    )
}
