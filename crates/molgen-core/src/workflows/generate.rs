use crate::core::models::molecule::{MoleculeRecord, StructureProfile};
use crate::core::templates::Template;
use crate::engine::attributes;
use crate::engine::config::GenerationConfig;
use crate::engine::sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Generates a batch of mock compound records ranked by drug-likeness.
///
/// The random source is owned by this invocation: seeded from
/// [`GenerationConfig::seed`] when set, from OS entropy otherwise. A `count`
/// of zero yields an empty batch.
#[instrument(skip_all, name = "generation_workflow", fields(count = config.count))]
pub fn run(config: &GenerationConfig) -> Vec<MoleculeRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(config, &mut rng)
}

/// Same as [`run`], but draws from a caller-provided random source.
pub fn run_with_rng(config: &GenerationConfig, rng: &mut impl Rng) -> Vec<MoleculeRecord> {
    let templates = Template::all();
    let mut batch = Vec::with_capacity(config.count);

    info!("Generating {} candidate record(s).", config.count);

    for index in 1..=config.count {
        // Scaffold selection: uniform template, then uniform variation.
        let template = templates.choose(rng).copied().unwrap_or(templates[0]);
        let variation = template
            .variations
            .choose(rng)
            .copied()
            .unwrap_or(template.variations[0]);

        // Descriptor and score sampling.
        let descriptors = sampler::sample_descriptors(rng);
        let quality = sampler::sample_quality_scores(&descriptors, rng);
        let counts = sampler::sample_structure_counts(rng);

        // Attribute generation and assembly. Only mw, logP, and tpsa are
        // normalized to two decimals; the score axes keep full precision.
        let record = MoleculeRecord {
            id: attributes::record_id(index, rng),
            name: attributes::compound_name(template.scaffold, index, rng),
            smiles: attributes::resolve_smiles(&template, variation).to_string(),
            formula: attributes::molecular_formula(descriptors.mw, rng),
            molecular_weight: round2(descriptors.mw),
            log_p: round2(descriptors.log_p),
            hbd: descriptors.hbd,
            hba: descriptors.hba,
            tpsa: round2(descriptors.tpsa),
            drug_likeness: quality.drug_likeness,
            synthesis_score: quality.synthesis_score,
            novelty: quality.novelty,
            target_affinity: quality.target_affinity,
            admet_score: quality.admet_score,
            mechanism: attributes::mechanism(config.mechanism.as_deref(), rng),
            advantages: attributes::advantages(
                template.scaffold,
                quality.drug_likeness,
                quality.novelty,
                rng,
            ),
            concerns: attributes::concerns(&descriptors, rng),
            structure: StructureProfile {
                rings: counts.rings,
                aromatic_rings: counts.aromatic_rings,
                heteroatoms: counts.heteroatoms,
                functional_groups: attributes::functional_groups(template.scaffold, rng),
            },
        };

        debug!(
            id = %record.id,
            scaffold = template.scaffold.label(),
            drug_likeness = record.drug_likeness,
            "Assembled candidate record."
        );
        batch.push(record);
    }

    // Stable sort: ties keep their insertion order.
    batch.sort_by(|a, b| {
        b.drug_likeness
            .partial_cmp(&a.drug_likeness)
            .unwrap_or(Ordering::Equal)
    });

    info!("Batch complete, ranked by drug-likeness.");
    batch
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
