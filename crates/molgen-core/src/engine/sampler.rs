use crate::core::models::descriptors::{Descriptors, QualityScores};
use crate::core::scoring;
use rand::Rng;

/// Sampled ring and heteroatom counts, before functional groups are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StructureCounts {
    pub rings: u8,
    pub aromatic_rings: u8,
    pub heteroatoms: u8,
}

/// Draws one physicochemical descriptor block, each field independently
/// uniform within its domain range.
pub(crate) fn sample_descriptors(rng: &mut impl Rng) -> Descriptors {
    Descriptors {
        mw: rng.gen_range(150.0..550.0),
        log_p: rng.gen_range(-2.0..6.0),
        hbd: rng.gen_range(0..=5),
        hba: rng.gen_range(0..=9),
        tpsa: rng.gen_range(20.0..160.0),
    }
}

/// Computes the drug-likeness of `descriptors` and samples the four
/// independent quality axes from their fixed sub-ranges.
pub(crate) fn sample_quality_scores(
    descriptors: &Descriptors,
    rng: &mut impl Rng,
) -> QualityScores {
    QualityScores {
        drug_likeness: scoring::drug_likeness(descriptors),
        synthesis_score: rng.gen_range(0.3..1.0),
        novelty: rng.gen_range(0.4..1.0),
        target_affinity: rng.gen_range(0.5..1.0),
        admet_score: rng.gen_range(0.4..1.0),
    }
}

/// Samples ring and heteroatom counts. Aromatic rings are drawn strictly
/// below the total ring count.
pub(crate) fn sample_structure_counts(rng: &mut impl Rng) -> StructureCounts {
    let rings = rng.gen_range(1..=4);
    StructureCounts {
        rings,
        aromatic_rings: rng.gen_range(0..rings),
        heteroatoms: rng.gen_range(0..=7),
    }
}
