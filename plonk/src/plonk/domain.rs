use crate::errors::{PlonkError, Result};
use ark_poly::{EvaluationDomain as ArkEvaluationDomain, Radix2EvaluationDomain};
use ark_std::{end_timer, start_timer};
use rand_chacha::ChaChaRng;
use turbo_algebra::prelude::*;

/// The number of wires per gate, one coset generator each.
pub const NUM_WIRES: usize = 4;

/// Parameters fixing the small and the large evaluation domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// The number of rows of the circuit, a power of two.
    pub circuit_size: usize,
    /// The ratio between the large and the small domain, a power of two.
    pub extension_factor: usize,
    /// The number of chunks the large domain is split into.
    pub num_threads: usize,
}

impl DomainConfig {
    /// A configuration with a large domain four times the circuit size.
    pub fn new(circuit_size: usize) -> Self {
        Self {
            circuit_size,
            extension_factor: 4,
            num_threads: 1,
        }
    }

    /// Set the number of chunks of the large domain.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }
}

/// The small subgroup indexing circuit rows, the large subgroup used for
/// quotient evaluations, and the coset generators separating the wires.
#[derive(Clone, Debug)]
pub struct EvaluationDomain<F: Domain> {
    config: DomainConfig,
    small: Radix2EvaluationDomain<F::Field>,
    large: Radix2EvaluationDomain<F::Field>,
    generator: F,
    large_generator: F,
    coset_offset: F,
    coset_generators: Vec<F>,
    thread_size: usize,
}

impl<F: Domain> EvaluationDomain<F> {
    /// Build both domains and pick the coset generators.
    pub fn new(config: &DomainConfig) -> Result<Self> {
        let size = config.circuit_size;
        let large_size = size.saturating_mul(config.extension_factor);
        let mismatch = PlonkError::DomainMismatch { size, large_size };

        if !size.is_power_of_two() || !config.extension_factor.is_power_of_two() {
            return Err(mismatch);
        }
        let small = Radix2EvaluationDomain::<F::Field>::new(size).ok_or(mismatch.clone())?;
        let large = Radix2EvaluationDomain::<F::Field>::new(large_size).ok_or(mismatch.clone())?;
        if small.size() != size || large.size() != large_size {
            return Err(mismatch);
        }

        if config.num_threads == 0 || large_size % config.num_threads != 0 {
            return Err(PlonkError::InvalidChunking {
                num_threads: config.num_threads,
                thread_size: large_size.checked_div(config.num_threads).unwrap_or(0),
                large_size,
            });
        }

        let ks_timer = start_timer!(|| "Choose the coset generators");
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let coset_generators = choose_ks::<_, F>(&mut prng, NUM_WIRES, size);
        end_timer!(ks_timer);

        Ok(Self {
            config: *config,
            small,
            large,
            generator: F::from_field(small.element(1)),
            large_generator: F::from_field(large.element(1)),
            coset_offset: F::multiplicative_generator(),
            coset_generators,
            thread_size: large_size / config.num_threads,
        })
    }

    /// Return the configuration the domains were built from.
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Return the size of the small domain, i.e. the circuit size.
    pub fn size(&self) -> usize {
        self.config.circuit_size
    }

    /// Return the generator of the small domain.
    pub fn generator(&self) -> F {
        self.generator
    }

    /// Return the size of the large domain.
    pub fn large_size(&self) -> usize {
        self.large.size()
    }

    /// Return the generator of the large domain.
    pub fn large_generator(&self) -> F {
        self.large_generator
    }

    /// Return the number of chunks the large domain is split into.
    pub fn num_threads(&self) -> usize {
        self.config.num_threads
    }

    /// Return the number of rows in each chunk of the large domain.
    pub fn thread_size(&self) -> usize {
        self.thread_size
    }

    /// Return the coset generators, one per wire, the first one being one.
    pub fn coset_generators(&self) -> &[F] {
        &self.coset_generators
    }

    /// Return the offset of the coset on which large-domain evaluations live.
    pub fn coset_offset(&self) -> F {
        self.coset_offset
    }

    /// Return the arkworks small domain.
    pub fn small_domain(&self) -> &Radix2EvaluationDomain<F::Field> {
        &self.small
    }

    /// Return the arkworks large domain.
    pub fn large_domain(&self) -> &Radix2EvaluationDomain<F::Field> {
        &self.large
    }

    /// Return the `i`-th point of the large coset, `offset * large_generator^i`.
    pub fn large_coset_point(&self, i: usize) -> F {
        self.coset_offset
            .mul(&F::from_field(self.large.element(i)))
    }
}

/// Choose `n_wires_per_gate` coset generators: the first is one and the
/// others are quadratic non-residues lying in distinct cosets of the
/// subgroup of order `group_order`.
pub fn choose_ks<R: CryptoRng + RngCore, F: Scalar>(
    prng: &mut R,
    n_wires_per_gate: usize,
    group_order: usize,
) -> Vec<F> {
    let mut k = vec![F::one()];
    let mut coset_tags = vec![F::one()];
    let exp = u64_limbs_from_bytes(&F::field_size_minus_one_half());
    let order = [group_order as u64];

    for _ in 1..n_wires_per_gate {
        loop {
            let ki = F::random(prng);
            if ki.is_zero() || ki.pow(&exp) == F::one() {
                continue;
            }
            let tag = ki.pow(&order);
            if coset_tags.iter().all(|x| x != &tag) {
                k.push(ki);
                coset_tags.push(tag);
                break;
            }
        }
    }
    k
}
