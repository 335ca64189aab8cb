//! The gate widget contract shared by every gate type, and the sets an
//! orchestrator uses to thread the combiners through the widgets in order.

use crate::errors::Result;
use crate::plonk::transcript::PlonkTranscript;
use turbo_algebra::prelude::*;

/// Module for the turbo arithmetic gate.
pub mod turbo_arithmetic;

/// The combiners threaded through the verifier widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeCoefficients<F> {
    /// The power of `alpha` scaling the next identity.
    pub alpha_base: F,
    /// The challenge `alpha`.
    pub alpha_step: F,
    /// The power of `nu` scaling the next opened polynomial.
    pub nu_base: F,
    /// The challenge `nu`.
    pub nu_step: F,
    /// The power of `nu` scaling the linearization polynomial.
    pub linear_nu: F,
}

/// The prover half of a gate widget.
pub trait ProverWidget<F: Domain> {
    /// Add the gate identity, scaled by `alpha_base`, to every row of the
    /// quotient evaluations over the large coset. Return the next `alpha_base`.
    fn compute_quotient_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        quotient: &mut [F],
    ) -> Result<F>;

    /// Announce the evaluations at `z` the verifier needs.
    fn compute_transcript_elements(&self, transcript: &mut PlonkTranscript) -> Result<()>;

    /// Add the linearized gate identity, scaled by `alpha_base`, to the
    /// coefficients of the linearization polynomial `r`. Return the next `alpha_base`.
    fn compute_linear_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        r: &mut [F],
    ) -> Result<F>;

    /// Fold the polynomials this gate opens, scaled by `nu_base`, into the
    /// coefficients of the batched opening polynomial. Return the next `nu_base`.
    fn compute_opening_poly_contribution(
        &self,
        nu_base: &F,
        transcript: &PlonkTranscript,
        poly: &mut [F],
    ) -> Result<F>;
}

/// The verifier half of a gate widget.
pub trait VerifierWidget<G: Group> {
    /// Add the terms of the identity that cannot be linearized to the claimed
    /// quotient evaluation. Return the next `alpha_base`.
    fn compute_quotient_evaluation_contribution(
        &self,
        alpha_base: &G::ScalarType,
        transcript: &PlonkTranscript,
        t_eval: &mut G::ScalarType,
    ) -> Result<G::ScalarType>;

    /// Fold the announced evaluations, scaled by `nu_base`, into the batched
    /// evaluation. Return the next `nu_base`.
    fn compute_batch_evaluation_contribution(
        &self,
        batch_eval: &mut G::ScalarType,
        nu_base: &G::ScalarType,
        transcript: &PlonkTranscript,
    ) -> Result<G::ScalarType>;

    /// Append the commitments of the gate and their scalars to the inputs of
    /// the verifier's multi-scalar multiplication. Return the next combiners.
    fn append_scalar_multiplication_inputs(
        &self,
        challenge: &ChallengeCoefficients<G::ScalarType>,
        transcript: &PlonkTranscript,
        points: &mut Vec<G>,
        scalars: &mut Vec<G::ScalarType>,
    ) -> Result<ChallengeCoefficients<G::ScalarType>>;
}

/// An ordered list of prover widgets.
pub struct ProverWidgetSet<'a, F: Domain> {
    widgets: Vec<Box<dyn ProverWidget<F> + 'a>>,
}

impl<'a, F: Domain> Default for ProverWidgetSet<'a, F> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }
}

impl<'a, F: Domain> ProverWidgetSet<'a, F> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget.
    pub fn push<W: ProverWidget<F> + 'a>(&mut self, widget: W) {
        self.widgets.push(Box::new(widget));
    }

    /// Return the number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Return true if there is no widget.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Run every widget's quotient contribution, threading `alpha_base`.
    pub fn compute_quotient_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        quotient: &mut [F],
    ) -> Result<F> {
        let mut alpha_base = *alpha_base;
        for widget in self.widgets.iter() {
            alpha_base = widget.compute_quotient_contribution(&alpha_base, transcript, quotient)?;
        }
        Ok(alpha_base)
    }

    /// Run every widget's transcript announcement.
    pub fn compute_transcript_elements(&self, transcript: &mut PlonkTranscript) -> Result<()> {
        for widget in self.widgets.iter() {
            widget.compute_transcript_elements(transcript)?;
        }
        Ok(())
    }

    /// Run every widget's linear contribution, threading `alpha_base`.
    pub fn compute_linear_contribution(
        &self,
        alpha_base: &F,
        transcript: &PlonkTranscript,
        r: &mut [F],
    ) -> Result<F> {
        let mut alpha_base = *alpha_base;
        for widget in self.widgets.iter() {
            alpha_base = widget.compute_linear_contribution(&alpha_base, transcript, r)?;
        }
        Ok(alpha_base)
    }

    /// Run every widget's opening contribution, threading `nu_base`.
    pub fn compute_opening_poly_contribution(
        &self,
        nu_base: &F,
        transcript: &PlonkTranscript,
        poly: &mut [F],
    ) -> Result<F> {
        let mut nu_base = *nu_base;
        for widget in self.widgets.iter() {
            nu_base = widget.compute_opening_poly_contribution(&nu_base, transcript, poly)?;
        }
        Ok(nu_base)
    }
}

/// An ordered list of verifier widgets.
pub struct VerifierWidgetSet<'a, G: Group> {
    widgets: Vec<Box<dyn VerifierWidget<G> + 'a>>,
}

impl<'a, G: Group> Default for VerifierWidgetSet<'a, G> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }
}

impl<'a, G: Group> VerifierWidgetSet<'a, G> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget.
    pub fn push<W: VerifierWidget<G> + 'a>(&mut self, widget: W) {
        self.widgets.push(Box::new(widget));
    }

    /// Return the number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Return true if there is no widget.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Run every widget's quotient evaluation contribution, threading `alpha_base`.
    pub fn compute_quotient_evaluation_contribution(
        &self,
        alpha_base: &G::ScalarType,
        transcript: &PlonkTranscript,
        t_eval: &mut G::ScalarType,
    ) -> Result<G::ScalarType> {
        let mut alpha_base = *alpha_base;
        for widget in self.widgets.iter() {
            alpha_base =
                widget.compute_quotient_evaluation_contribution(&alpha_base, transcript, t_eval)?;
        }
        Ok(alpha_base)
    }

    /// Run every widget's batch evaluation contribution, threading `nu_base`.
    pub fn compute_batch_evaluation_contribution(
        &self,
        batch_eval: &mut G::ScalarType,
        nu_base: &G::ScalarType,
        transcript: &PlonkTranscript,
    ) -> Result<G::ScalarType> {
        let mut nu_base = *nu_base;
        for widget in self.widgets.iter() {
            nu_base = widget.compute_batch_evaluation_contribution(batch_eval, &nu_base, transcript)?;
        }
        Ok(nu_base)
    }

    /// Collect every widget's multi-scalar multiplication inputs, threading the combiners.
    pub fn append_scalar_multiplication_inputs(
        &self,
        challenge: &ChallengeCoefficients<G::ScalarType>,
        transcript: &PlonkTranscript,
        points: &mut Vec<G>,
        scalars: &mut Vec<G::ScalarType>,
    ) -> Result<ChallengeCoefficients<G::ScalarType>> {
        let mut challenge = *challenge;
        for widget in self.widgets.iter() {
            challenge =
                widget.append_scalar_multiplication_inputs(&challenge, transcript, points, scalars)?;
        }
        Ok(challenge)
    }
}
