use crate::errors::{PlonkError, Result};
use crate::plonk::domain::{EvaluationDomain, NUM_WIRES};
use crate::poly_commit::field_polynomial::FpPolynomial;
use turbo_algebra::prelude::*;

/// The number of selectors of the turbo arithmetic gate.
pub const NUM_SELECTORS: usize = 8;

/// The selectors of the turbo arithmetic gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// Coefficient of `w_1`.
    Q1,
    /// Coefficient of `w_2`.
    Q2,
    /// Coefficient of `w_3`.
    Q3,
    /// Coefficient of `w_4`.
    Q4,
    /// Coefficient of the ternary check on `w_4`.
    Q5,
    /// Coefficient of `w_1 * w_2`.
    QM,
    /// Constant term.
    QC,
    /// Enables the gate, and the quad extraction when set to two.
    QArith,
}

impl Selector {
    /// All selectors, in commitment order.
    pub const ALL: [Selector; NUM_SELECTORS] = [
        Selector::Q1,
        Selector::Q2,
        Selector::Q3,
        Selector::Q4,
        Selector::Q5,
        Selector::QM,
        Selector::QC,
        Selector::QArith,
    ];

    /// Return the transcript name of the selector's evaluation.
    pub const fn name(self) -> &'static str {
        match self {
            Selector::Q1 => "q_1",
            Selector::Q2 => "q_2",
            Selector::Q3 => "q_3",
            Selector::Q4 => "q_4",
            Selector::Q5 => "q_5",
            Selector::QM => "q_m",
            Selector::QC => "q_c",
            Selector::QArith => "q_arith",
        }
    }
}

/// The wires of a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wire {
    /// Left wire.
    W1,
    /// Right wire.
    W2,
    /// Output wire.
    W3,
    /// Fourth wire.
    W4,
}

impl Wire {
    /// All wires, in column order.
    pub const ALL: [Wire; NUM_WIRES] = [Wire::W1, Wire::W2, Wire::W3, Wire::W4];

    /// Return the transcript name of the wire's evaluation.
    pub const fn name(self) -> &'static str {
        match self {
            Wire::W1 => "w_1",
            Wire::W2 => "w_2",
            Wire::W3 => "w_3",
            Wire::W4 => "w_4",
        }
    }
}

macro_rules! keyed_array {
    ($map:ident, $key:ident, $len:expr) => {
        #[doc = concat!("A value for every [`", stringify!($key), "`].")]
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $map<T>(pub [T; $len]);

        impl<T> $map<T> {
            /// Build the map by calling `f` on every key.
            pub fn from_fn<U: FnMut($key) -> T>(mut f: U) -> Self {
                Self(core::array::from_fn(|i| f($key::ALL[i])))
            }

            /// Iterate over the keys and their values.
            pub fn iter(&self) -> impl Iterator<Item = ($key, &T)> {
                $key::ALL.into_iter().zip(self.0.iter())
            }

            /// Apply `f` to every value.
            pub fn map<V, U: FnMut(&T) -> V>(&self, mut f: U) -> $map<V> {
                $map::from_fn(|key| f(&self[key]))
            }
        }

        impl<T> Index<$key> for $map<T> {
            type Output = T;

            fn index(&self, key: $key) -> &T {
                &self.0[key as usize]
            }
        }

        impl<T> IndexMut<$key> for $map<T> {
            fn index_mut(&mut self, key: $key) -> &mut T {
                &mut self.0[key as usize]
            }
        }
    };
}

keyed_array!(SelectorMap, Selector, NUM_SELECTORS);
keyed_array!(WireMap, Wire, NUM_WIRES);

pub(crate) fn check_len<T>(name: &'static str, values: &[T], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(PlonkError::PolynomialSizeMismatch {
            name,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn interpolate<F: Domain>(values: &[F], domain: &EvaluationDomain<F>) -> FpPolynomial<F> {
    FpPolynomial::ifft_with_domain(domain.small_domain(), values)
}

fn extend<F: Domain>(poly: &FpPolynomial<F>, domain: &EvaluationDomain<F>) -> Vec<F> {
    poly.coset_fft_with_domain(domain.large_domain(), &domain.coset_offset())
}

/// The prover parameters of the gate: the selectors in coefficient form and
/// their evaluations over the large coset.
#[derive(Clone, Debug)]
pub struct ProvingKey<F: Domain> {
    /// The evaluation domains.
    pub domain: EvaluationDomain<F>,
    /// Selectors in coefficient form.
    pub selectors: SelectorMap<FpPolynomial<F>>,
    /// Selector evaluations over the large coset.
    pub selector_ffts: SelectorMap<Vec<F>>,
}

impl<F: Domain> ProvingKey<F> {
    /// Build the key from the selector value of every row.
    pub fn new(selector_values: &SelectorMap<Vec<F>>, domain: &EvaluationDomain<F>) -> Result<Self> {
        for (s, values) in selector_values.iter() {
            check_len(s.name(), values, domain.size())?;
        }
        let selectors = selector_values.map(|values| interpolate(values, domain));
        let selector_ffts = selectors.map(|poly| extend(poly, domain));

        Ok(Self {
            domain: domain.clone(),
            selectors,
            selector_ffts,
        })
    }
}

/// The witness of the program: the wires in coefficient form and their
/// evaluations over the large coset.
#[derive(Clone, Debug)]
pub struct ProgramWitness<F> {
    /// Wires in coefficient form.
    pub wires: WireMap<FpPolynomial<F>>,
    /// Wire evaluations over the large coset.
    pub wire_ffts: WireMap<Vec<F>>,
}

impl<F: Domain> ProgramWitness<F> {
    /// Build the witness from the wire values of every row.
    pub fn new(wire_values: &WireMap<Vec<F>>, domain: &EvaluationDomain<F>) -> Result<Self> {
        for (w, values) in wire_values.iter() {
            check_len(w.name(), values, domain.size())?;
        }
        let wires = wire_values.map(|values| interpolate(values, domain));
        let wire_ffts = wires.map(|poly| extend(poly, domain));

        Ok(Self { wires, wire_ffts })
    }

    /// Return the wire evaluations at `point`.
    pub fn eval(&self, point: &F) -> WireMap<F> {
        self.wires.map(|w| w.eval(point))
    }
}

/// The verifier parameters of the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerificationKey<G: Group> {
    /// The number of rows of the circuit.
    pub circuit_size: usize,
    /// The generator of the small domain.
    pub generator: G::ScalarType,
    /// The coset generators, one per wire.
    pub coset_generators: Vec<G::ScalarType>,
    /// The commitments to the selectors.
    pub selector_commitments: SelectorMap<G>,
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::{
        domain::{DomainConfig, EvaluationDomain},
        keys::{
            ProgramWitness, ProvingKey, Selector, SelectorMap, VerificationKey, Wire, WireMap,
        },
    };
    use turbo_algebra::{
        bn254::{BN254Scalar, BN254G1},
        prelude::*,
    };

    #[test]
    fn test_keyed_arrays() {
        let map = SelectorMap::from_fn(|s| s.name());
        assert_eq!(map[Selector::QArith], "q_arith");
        assert_eq!(map[Selector::QM], "q_m");
        let names: Vec<&str> = map.iter().map(|(_, n)| *n).collect();
        assert_eq!(names, vec!["q_1", "q_2", "q_3", "q_4", "q_5", "q_m", "q_c", "q_arith"]);

        let mut wires = WireMap::from_fn(|w| w as usize);
        wires[Wire::W3] = 7;
        assert_eq!(wires.0, [0, 1, 7, 3]);
        assert_eq!(wires.map(|x| x * 2)[Wire::W4], 6);
    }

    #[test]
    fn test_proving_key_evaluations() {
        let mut prng = test_rng();
        let domain = EvaluationDomain::<BN254Scalar>::new(&DomainConfig::new(4)).unwrap();
        let values = SelectorMap::from_fn(|_| {
            (0..4)
                .map(|_| BN254Scalar::random(&mut prng))
                .collect::<Vec<_>>()
        });
        let pk = ProvingKey::new(&values, &domain).unwrap();

        for s in Selector::ALL {
            // rows of the small domain
            let mut point = BN254Scalar::one();
            for row in 0..4 {
                assert_eq!(pk.selectors[s].eval(&point), values[s][row]);
                point.mul_assign(&domain.generator());
            }
            // rows of the large coset
            assert_eq!(pk.selector_ffts[s].len(), domain.large_size());
            for row in [0, 5, 15] {
                assert_eq!(
                    pk.selectors[s].eval(&domain.large_coset_point(row)),
                    pk.selector_ffts[s][row]
                );
            }
        }
    }

    #[test]
    fn test_witness_size_mismatch() {
        let domain = EvaluationDomain::<BN254Scalar>::new(&DomainConfig::new(4)).unwrap();
        let mut values = WireMap::from_fn(|_| vec![BN254Scalar::one(); 4]);
        values[Wire::W2].push(BN254Scalar::zero());
        assert_eq!(
            ProgramWitness::new(&values, &domain).unwrap_err(),
            PlonkError::PolynomialSizeMismatch {
                name: "w_2",
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_verification_key_serialization() {
        let mut prng = test_rng();
        let domain = EvaluationDomain::<BN254Scalar>::new(&DomainConfig::new(4)).unwrap();
        let mut selector_commitments = SelectorMap::from_fn(|_| BN254G1::random(&mut prng));
        selector_commitments[Selector::Q5] = BN254G1::get_identity();
        let vk = VerificationKey {
            circuit_size: domain.size(),
            generator: domain.generator(),
            coset_generators: domain.coset_generators().to_vec(),
            selector_commitments,
        };

        let json = serde_json::to_string(&vk).unwrap();
        let vk_de: VerificationKey<BN254G1> = serde_json::from_str(&json).unwrap();
        assert_eq!(vk, vk_de);
        assert!(!vk_de.selector_commitments[Selector::Q5].is_valid_point());

        let value = serde_json::to_value(&vk).unwrap();
        let vk_value: VerificationKey<BN254G1> = serde_json::from_value(value).unwrap();
        assert_eq!(vk, vk_value);
    }
}
