use crate::errors::Result;
use crate::plonk::{
    domain::EvaluationDomain,
    keys::{ProvingKey, SelectorMap, VerificationKey},
};
use crate::poly_commit::pcs::PolyComScheme;
use ark_std::{end_timer, start_timer};

/// The prover and verifier parameters produced by the indexer.
pub type PlonkKeys<PCS> = (
    ProvingKey<<PCS as PolyComScheme>::Field>,
    VerificationKey<<PCS as PolyComScheme>::Commitment>,
);

/// Run the indexer: interpolate the selector columns and commit to them.
/// Every column must hold exactly one value per row of `domain`.
pub fn indexer<PCS: PolyComScheme>(
    selector_values: &SelectorMap<Vec<PCS::Field>>,
    domain: &EvaluationDomain<PCS::Field>,
    pcs: &PCS,
) -> Result<PlonkKeys<PCS>> {
    let indexer_timer = start_timer!(|| "TurboPlonk::Indexer");

    let pk_timer = start_timer!(|| "Interpolate the selectors");
    let pk = ProvingKey::new(selector_values, domain)?;
    end_timer!(pk_timer);

    let commit_timer = start_timer!(|| "Commit the selectors");
    let commitments = pk
        .selectors
        .0
        .iter()
        .map(|poly| pcs.commit(poly))
        .collect::<Result<Vec<_>>>()?;
    let selector_commitments = SelectorMap::from_fn(|s| commitments[s as usize]);
    end_timer!(commit_timer);

    let vk = VerificationKey {
        circuit_size: domain.size(),
        generator: domain.generator(),
        coset_generators: domain.coset_generators().to_vec(),
        selector_commitments,
    };

    end_timer!(indexer_timer);
    Ok((pk, vk))
}
