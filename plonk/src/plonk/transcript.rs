use crate::errors::{PlonkError, Result};
use crate::plonk::keys::VerificationKey;
use ark_std::collections::BTreeMap;
use merlin::Transcript;
use rand_chacha::ChaChaRng;
use turbo_algebra::prelude::*;

/// Name of the challenge combining the gate identities.
pub const ALPHA: &str = "alpha";
/// Name of the first permutation challenge.
pub const BETA: &str = "beta";
/// Name of the second permutation challenge.
pub const GAMMA: &str = "gamma";
/// Name of the challenge batching the opened polynomials.
pub const NU: &str = "nu";
/// Name of the evaluation point.
pub const Z: &str = "z";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Challenge,
    Element,
}

/// A Fiat-Shamir transcript that also records every derived challenge and
/// every announced evaluation under its name. Each name is written once.
#[derive(Clone)]
pub struct PlonkTranscript {
    transcript: Transcript,
    group_order: usize,
    entries: BTreeMap<&'static str, (EntryKind, Vec<u8>)>,
}

impl PlonkTranscript {
    /// Start a new transcript for a circuit of size `group_order`.
    pub fn new(label: &'static [u8], group_order: usize) -> Self {
        let mut transcript = Transcript::new(label);
        transcript.append_message(b"New Domain", b"PLONK");
        transcript.append_u64(b"CS size", group_order as u64);
        Self {
            transcript,
            group_order,
            entries: BTreeMap::new(),
        }
    }

    /// Absorb the verification key.
    pub fn append_verification_key<G: Group>(&mut self, vk: &VerificationKey<G>) {
        self.transcript.append_message(
            b"field size",
            &G::ScalarType::get_field_size_le_bytes(),
        );
        for (_, q) in vk.selector_commitments.iter() {
            self.append_commitment(q);
        }
        self.append_field_elem(&vk.generator);
        for generator in vk.coset_generators.iter() {
            self.append_field_elem(generator);
        }
    }

    /// Absorb a commitment.
    pub fn append_commitment<G: Group>(&mut self, commitment: &G) {
        self.transcript
            .append_message(b"append commitment", &commitment.to_compressed_bytes());
    }

    fn append_field_elem<F: Scalar>(&mut self, elem: &F) {
        self.transcript
            .append_message(b"append field point", &elem.to_bytes());
    }

    fn reserve(&self, name: &'static str) -> Result<()> {
        if self.entries.contains_key(name) {
            Err(PlonkError::DuplicateTranscriptEntry(name))
        } else {
            Ok(())
        }
    }

    /// Record a prover-announced evaluation.
    pub fn add_element<F: Scalar>(&mut self, name: &'static str, value: &F) -> Result<()> {
        self.reserve(name)?;
        let bytes = value.to_bytes();
        self.transcript.append_message(name.as_bytes(), &bytes);
        self.entries.insert(name, (EntryKind::Element, bytes));
        Ok(())
    }

    /// Derive, record and return the challenge `name`.
    pub fn derive_challenge<F: Scalar>(&mut self, name: &'static str) -> Result<F> {
        self.reserve(name)?;
        let challenge: F =
            transcript_get_challenge_field_elem(&mut self.transcript, self.group_order, name);
        self.entries
            .insert(name, (EntryKind::Challenge, challenge.to_bytes()));
        Ok(challenge)
    }

    /// Read back the challenge `name`.
    pub fn get_challenge<F: Scalar>(&self, name: &'static str) -> Result<F> {
        self.get(name, EntryKind::Challenge)
    }

    /// Read back the evaluation `name`.
    pub fn get_element<F: Scalar>(&self, name: &'static str) -> Result<F> {
        self.get(name, EntryKind::Element)
    }

    fn get<F: Scalar>(&self, name: &'static str, kind: EntryKind) -> Result<F> {
        match self.entries.get(name) {
            Some((k, bytes)) if *k == kind => Ok(F::from_bytes(bytes)?),
            _ => Err(PlonkError::MissingTranscriptEntry(name)),
        }
    }
}

/// Return the challenge result, never an element of the subgroup of order `group_order`.
pub(crate) fn transcript_get_challenge_field_elem<F: Scalar>(
    transcript: &mut Transcript,
    group_order: usize,
    label: &'static str,
) -> F {
    let mut buff = [0u8; 32];
    transcript.challenge_bytes(label.as_bytes(), &mut buff);
    let mut prng = ChaChaRng::from_seed(buff);
    loop {
        let elem = F::random(&mut prng);
        // elem should not be root-of-unity
        if elem.pow(&[group_order as u64]) != F::one() {
            return elem;
        }
    }
}
