//! The turbo arithmetic gate. Every row with a nonzero `q_arith` satisfies
//!
//! `q_arith * (q_m w_1 w_2 + q_1 w_1 + q_2 w_2 + q_3 w_3 + q_4 w_4 + q_c
//!     + alpha q_5 (w_4^2 - w_4)(w_4 - 2))
//!     + (q_arith^2 - q_arith) * delta (9 delta - 2 delta^2 - 7) = 0`
//!
//! with `delta = w_3 - 4 w_4`. The ternary term restricts `w_4` to
//! `{0, 1, 2}` when `q_5` is set. With `q_arith = 2` the last term adds
//! `12` times the high bit of `delta`, which lets a gate read the high bit
//! of a quad `delta` in `{0, 1, 2, 3}`.

use crate::errors::Result;
use crate::plonk::{
    keys::{check_len, ProgramWitness, ProvingKey, Selector, SelectorMap, VerificationKey, Wire, WireMap},
    transcript::{PlonkTranscript, ALPHA, NU, Z},
    widgets::{ChallengeCoefficients, ProverWidget, VerifierWidget},
};
use ark_std::{end_timer, start_timer};
use turbo_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Return `x (x - 1) (x - 2)`, zero exactly when `x` is 0, 1 or 2.
pub fn ternary_check<F: Scalar>(x: &F) -> F {
    let two = F::from(2u32);
    x.square().sub(x).mul(&x.sub(&two))
}

/// Return `(q_arith^2 - q_arith) * delta (9 delta - 2 delta^2 - 7)` where
/// `delta = w_3 - 4 w_4`.
pub fn quad_extraction<F: Scalar>(q_arith: &F, w_3: &F, w_4: &F) -> F {
    let delta = w_3.sub(&w_4.mul(&F::from(4u32)));
    let quad = delta.mul(
        &delta
            .mul(&F::from(9u32))
            .sub(&delta.square().mul(&F::from(2u32)))
            .sub(&F::from(7u32)),
    );
    q_arith.square().sub(q_arith).mul(&quad)
}

/// Return the value each selector multiplies in the gate, before scaling by
/// `q_arith`. The entry of `q_arith` itself is zero.
pub fn linear_scalars<F: Scalar>(wires: &WireMap<F>, alpha: &F) -> SelectorMap<F> {
    let mut scalars = SelectorMap::from_fn(|_| F::zero());
    scalars[Selector::Q1] = wires[Wire::W1];
    scalars[Selector::Q2] = wires[Wire::W2];
    scalars[Selector::Q3] = wires[Wire::W3];
    scalars[Selector::Q4] = wires[Wire::W4];
    scalars[Selector::Q5] = alpha.mul(&ternary_check(&wires[Wire::W4]));
    scalars[Selector::QM] = wires[Wire::W1].mul(&wires[Wire::W2]);
    scalars[Selector::QC] = F::one();
    scalars
}

/// Return the part of the gate identity linear in the selectors.
pub fn gate_term<F: Scalar>(selectors: &SelectorMap<F>, wires: &WireMap<F>, alpha: &F) -> F {
    let scalars = linear_scalars(wires, alpha);
    let base: F = selectors
        .iter()
        .map(|(s, q)| q.mul(&scalars[s]))
        .sum();
    base.mul(&selectors[Selector::QArith])
}

/// Return the full gate identity of one row.
pub fn gate_identity<F: Scalar>(selectors: &SelectorMap<F>, wires: &WireMap<F>, alpha: &F) -> F {
    gate_term(selectors, wires, alpha).add(&quad_extraction(
        &selectors[Selector::QArith],
        &wires[Wire::W3],
        &wires[Wire::W4],
    ))
}

fn read_wire_evals<F: Scalar>(transcript: &PlonkTranscript) -> Result<WireMap<F>> {
    let mut evals = WireMap::from_fn(|_| F::zero());
    for w in Wire::ALL {
        evals[w] = transcript.get_element(w.name())?;
    }
    Ok(evals)
}

/// The prover side of the turbo arithmetic gate.
pub struct TurboArithmeticProver<'a, F: Domain> {
    key: &'a ProvingKey<F>,
    witness: &'a ProgramWitness<F>,
}

impl<'a, F: Domain> TurboArithmeticProver<'a, F> {
    /// Bind the widget to a proving key and a witness over the same domain.
    pub fn new(key: &'a ProvingKey<F>, witness: &'a ProgramWitness<F>) -> Result<Self> {
        for (w, values) in witness.wire_ffts.iter() {
            check_len(w.name(), values, key.domain.large_size())?;
        }
        Ok(Self { key, witness })
    }
}

impl<'a, F: Domain> ProverWidget<F> for TurboArithmeticProver<'a, F> {
    fn compute_quotient_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        quotient: &mut [F],
    ) -> Result<F> {
        let domain = &self.key.domain;
        check_len("quotient", quotient, domain.large_size())?;
        let alpha: F = transcript.get_challenge(ALPHA)?;

        let timer = start_timer!(|| "Turbo arithmetic: quotient contribution");
        let selector_ffts = &self.key.selector_ffts;
        let wire_ffts = &self.witness.wire_ffts;
        let thread_size = domain.thread_size();
        let add_chunk = |(j, chunk): (usize, &mut [F])| {
            let start = j * thread_size;
            for (k, t) in chunk.iter_mut().enumerate() {
                let i = start + k;
                let selectors = selector_ffts.map(|values| values[i]);
                let wires = wire_ffts.map(|values| values[i]);
                t.add_assign(&alpha_base.mul(&gate_identity(&selectors, &wires, &alpha)));
            }
        };

        #[cfg(feature = "parallel")]
        quotient
            .par_chunks_mut(thread_size)
            .enumerate()
            .for_each(add_chunk);

        #[cfg(not(feature = "parallel"))]
        quotient.chunks_mut(thread_size).enumerate().for_each(add_chunk);
        end_timer!(timer);

        Ok(alpha_base.mul(&alpha.square()))
    }

    fn compute_transcript_elements(&self, transcript: &mut PlonkTranscript) -> Result<()> {
        let z: F = transcript.get_challenge(Z)?;
        let q_arith_eval = self.key.selectors[Selector::QArith].eval(&z);
        transcript.add_element(Selector::QArith.name(), &q_arith_eval)
    }

    fn compute_linear_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        r: &mut [F],
    ) -> Result<F> {
        check_len("linear_poly", r, self.key.domain.size())?;
        let alpha: F = transcript.get_challenge(ALPHA)?;
        let wire_evals = read_wire_evals(transcript)?;
        let q_arith_eval: F = transcript.get_element(Selector::QArith.name())?;

        let timer = start_timer!(|| "Turbo arithmetic: linear contribution");
        let scale = alpha_base.mul(&q_arith_eval);
        let scalars = linear_scalars(&wire_evals, &alpha);
        for (i, r_i) in r.iter_mut().enumerate() {
            let term: F = self
                .key
                .selectors
                .iter()
                .map(|(s, q)| q.coef(i).mul(&scalars[s]))
                .sum();
            r_i.add_assign(&term.mul(&scale));
        }
        end_timer!(timer);

        Ok(alpha_base.mul(&alpha.square()))
    }

    fn compute_opening_poly_contribution(
        &self,
        nu_base: &F,
        transcript: &PlonkTranscript,
        poly: &mut [F],
    ) -> Result<F> {
        check_len("opening_poly", poly, self.key.domain.size())?;
        let nu: F = transcript.get_challenge(NU)?;

        let q_arith = &self.key.selectors[Selector::QArith];
        for (i, p) in poly.iter_mut().enumerate() {
            p.add_assign(&q_arith.coef(i).mul(nu_base));
        }

        Ok(nu_base.mul(&nu))
    }
}

/// The verifier side of the turbo arithmetic gate.
pub struct TurboArithmeticVerifier<'a, G: Group> {
    key: &'a VerificationKey<G>,
}

impl<'a, G: Group> TurboArithmeticVerifier<'a, G> {
    /// Bind the widget to a verification key.
    pub fn new(key: &'a VerificationKey<G>) -> Self {
        Self { key }
    }
}

impl<'a, G: Group> VerifierWidget<G> for TurboArithmeticVerifier<'a, G> {
    fn compute_quotient_evaluation_contribution(
        &self,
        alpha_base: &G::ScalarType,
        transcript: &PlonkTranscript,
        t_eval: &mut G::ScalarType,
    ) -> Result<G::ScalarType> {
        let alpha: G::ScalarType = transcript.get_challenge(ALPHA)?;
        let w_3: G::ScalarType = transcript.get_element(Wire::W3.name())?;
        let w_4: G::ScalarType = transcript.get_element(Wire::W4.name())?;
        let q_arith_eval: G::ScalarType = transcript.get_element(Selector::QArith.name())?;

        t_eval.add_assign(&alpha_base.mul(&quad_extraction(&q_arith_eval, &w_3, &w_4)));

        Ok(alpha_base.mul(&alpha.square()))
    }

    fn compute_batch_evaluation_contribution(
        &self,
        batch_eval: &mut G::ScalarType,
        nu_base: &G::ScalarType,
        transcript: &PlonkTranscript,
    ) -> Result<G::ScalarType> {
        let q_arith_eval: G::ScalarType = transcript.get_element(Selector::QArith.name())?;
        let nu: G::ScalarType = transcript.get_challenge(NU)?;

        batch_eval.add_assign(&q_arith_eval.mul(nu_base));

        Ok(nu_base.mul(&nu))
    }

    fn append_scalar_multiplication_inputs(
        &self,
        challenge: &ChallengeCoefficients<G::ScalarType>,
        transcript: &PlonkTranscript,
        points: &mut Vec<G>,
        scalars: &mut Vec<G::ScalarType>,
    ) -> Result<ChallengeCoefficients<G::ScalarType>> {
        let wire_evals = read_wire_evals(transcript)?;
        let q_arith_eval: G::ScalarType = transcript.get_element(Selector::QArith.name())?;

        let linear = challenge
            .alpha_base
            .mul(&challenge.linear_nu)
            .mul(&q_arith_eval);
        let selector_scalars = linear_scalars(&wire_evals, &challenge.alpha_step);

        for (s, commitment) in self.key.selector_commitments.iter() {
            // commitments to all-zero selectors are the identity
            if !commitment.is_valid_point() {
                continue;
            }
            let scalar = match s {
                Selector::QArith => challenge.nu_base,
                _ => selector_scalars[s].mul(&linear),
            };
            points.push(*commitment);
            scalars.push(scalar);
        }

        Ok(ChallengeCoefficients {
            alpha_base: challenge.alpha_base.mul(&challenge.alpha_step.square()),
            alpha_step: challenge.alpha_step,
            nu_base: challenge.nu_base.mul(&challenge.nu_step),
            nu_step: challenge.nu_step,
            linear_nu: challenge.linear_nu,
        })
    }
}
