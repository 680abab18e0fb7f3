use crate::core::models::descriptors::Descriptors;
use crate::core::templates::{ScaffoldType, Template};
use crate::core::vocab;
use rand::Rng;
use rand::seq::SliceRandom;

const MAX_ADVANTAGES: usize = 3;
const MAX_CONCERNS: usize = 2;

/// Batch-unique record identifier: incrementing index plus a random suffix.
pub(crate) fn record_id(index: usize, rng: &mut impl Rng) -> String {
    format!("mol_{}_{}", index, rng.gen_range(1000..=9999))
}

/// Composes `{prefix}{stem}{suffix}-{index}` from the fixed name vocabularies.
///
/// Collisions between names in the same batch are possible and not prevented;
/// uniqueness is only checked post-hoc by consumers.
pub(crate) fn compound_name(scaffold: ScaffoldType, index: usize, rng: &mut impl Rng) -> String {
    let prefix = vocab::NAME_PREFIXES
        .choose(rng)
        .copied()
        .unwrap_or(vocab::NAME_PREFIXES[0]);
    let suffix = vocab::NAME_SUFFIXES
        .choose(rng)
        .copied()
        .unwrap_or(vocab::NAME_SUFFIXES[0]);
    format!("{}{}{}-{}", prefix, scaffold.stem(), suffix, index)
}

/// Resolves a variation to its literal SMILES encoding, falling back to the
/// template's base structure for variations without an explicit entry.
pub(crate) fn resolve_smiles(template: &Template, variation: &str) -> &'static str {
    vocab::variation_smiles(variation).unwrap_or(template.base_structure)
}

/// Derives a compact element-count formula from the molecular weight.
///
/// Carbon scales with the weight, hydrogen with carbon; nitrogen and oxygen
/// counts are sampled and omitted from the rendering when zero.
pub(crate) fn molecular_formula(mw: f64, rng: &mut impl Rng) -> String {
    let carbon = (mw / 20.0).floor() as u32;
    let hydrogen = (carbon as f64 * 1.5).floor() as u32;
    let nitrogen: u32 = rng.gen_range(0..3);
    let oxygen: u32 = rng.gen_range(0..4);

    let mut formula = format!("C{}H{}", carbon, hydrogen);
    if nitrogen > 0 {
        formula.push_str(&format!("N{}", nitrogen));
    }
    if oxygen > 0 {
        formula.push_str(&format!("O{}", oxygen));
    }
    formula
}

/// Draws 1 to 3 distinct functional groups from the scaffold's vocabulary.
pub(crate) fn functional_groups(scaffold: ScaffoldType, rng: &mut impl Rng) -> Vec<String> {
    let vocabulary = vocab::functional_group_vocabulary(scaffold);
    let count = rng.gen_range(1..=3);
    vocabulary
        .choose_multiple(rng, count)
        .map(|group| (*group).to_string())
        .collect()
}

/// Passes an explicit mechanism through verbatim, or samples one of the fixed
/// mechanism-of-action descriptions.
pub(crate) fn mechanism(explicit: Option<&str>, rng: &mut impl Rng) -> String {
    match explicit {
        Some(text) => text.to_string(),
        None => vocab::MECHANISMS
            .choose(rng)
            .copied()
            .unwrap_or(vocab::MECHANISMS[0])
            .to_string(),
    }
}

/// Builds the advantage list: conditional candidates plus two generic entries,
/// then up to three drawn distinct without replacement.
pub(crate) fn advantages(
    scaffold: ScaffoldType,
    drug_likeness: f64,
    novelty: f64,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut candidates: Vec<&'static str> = Vec::new();
    if drug_likeness > 0.8 {
        candidates.push(vocab::ADV_DRUG_LIKENESS);
    }
    if novelty > 0.7 {
        candidates.push(vocab::ADV_NOVEL_STRUCTURE);
    }
    match scaffold {
        ScaffoldType::NaturalProduct => candidates.push(vocab::ADV_NATURAL_PRODUCT),
        ScaffoldType::Heterocycle => candidates.push(vocab::ADV_AQUEOUS_SOLUBILITY),
        ScaffoldType::PeptideMimic => candidates.push(vocab::ADV_SELECTIVITY),
        ScaffoldType::BenzeneDerivative | ScaffoldType::AliphaticChain => {}
    }
    candidates.push(vocab::ADV_OPTIMIZATION_POTENTIAL);
    candidates.push(vocab::ADV_VIABLE_SYNTHESIS);

    candidates
        .choose_multiple(rng, MAX_ADVANTAGES)
        .map(|advantage| (*advantage).to_string())
        .collect()
}

/// Builds the concern list from the descriptor thresholds.
///
/// The rule-of-five triggers (high logP, high molecular weight) are always
/// kept when they fire; only the secondary observations compete for any
/// remaining slot. A generic fallback covers the no-trigger case.
pub(crate) fn concerns(descriptors: &Descriptors, rng: &mut impl Rng) -> Vec<String> {
    let mut selected: Vec<&'static str> = Vec::new();
    if descriptors.log_p > 5.0 {
        selected.push(vocab::CONCERN_HIGH_LIPOPHILICITY);
    }
    if descriptors.mw > 500.0 {
        selected.push(vocab::CONCERN_HIGH_MOLECULAR_WEIGHT);
    }

    let mut secondary: Vec<&'static str> = Vec::new();
    if descriptors.tpsa > 140.0 {
        secondary.push(vocab::CONCERN_LOW_PERMEABILITY);
    }
    if descriptors.log_p < 0.0 {
        secondary.push(vocab::CONCERN_LOW_LIPOPHILICITY);
    }

    if selected.is_empty() && secondary.is_empty() {
        return vec![vocab::CONCERN_UNVALIDATED.to_string()];
    }

    let open_slots = MAX_CONCERNS.saturating_sub(selected.len());
    selected.extend(secondary.choose_multiple(rng, open_slots).copied());
    selected.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn descriptors(mw: f64, log_p: f64, tpsa: f64) -> Descriptors {
        Descriptors {
            mw,
            log_p,
            hbd: 2,
            hba: 4,
            tpsa,
        }
    }

    #[test]
    fn record_ids_carry_index_and_four_digit_suffix() {
        let mut rng = rng();
        for index in 1..=50 {
            let id = record_id(index, &mut rng);
            let mut parts = id.split('_');
            assert_eq!(parts.next(), Some("mol"));
            assert_eq!(parts.next(), Some(index.to_string().as_str()));
            let suffix: u32 = parts.next().unwrap().parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
            assert_eq!(parts.next(), None);
        }
    }

    #[test]
    fn compound_names_follow_the_prefix_stem_suffix_index_shape() {
        let mut rng = rng();
        for _ in 0..50 {
            let name = compound_name(ScaffoldType::PeptideMimic, 3, &mut rng);
            assert!(name.ends_with("-3"));
            assert!(name.contains("peptide"));
            assert!(vocab::NAME_PREFIXES.iter().any(|p| name.starts_with(p)));
        }
    }

    #[test]
    fn known_variations_resolve_to_their_table_entry() {
        let heterocycle = Template::all()[1];
        assert_eq!(resolve_smiles(&heterocycle, "indole"), "C1=CC=C2C(=C1)C=CN2");
    }

    #[test]
    fn unknown_variations_fall_back_to_the_base_structure() {
        let peptide = Template::all()[3];
        assert_eq!(resolve_smiles(&peptide, "turn_mimic"), "NC(=O)C");
        assert_eq!(resolve_smiles(&peptide, "no_such_variation"), "NC(=O)C");
    }

    #[test]
    fn formula_scales_carbon_with_weight_and_hides_zero_counts() {
        let mut rng = rng();
        for _ in 0..100 {
            let formula = molecular_formula(437.0, &mut rng);
            assert!(formula.starts_with("C21H31"));
            assert!(!formula.contains("N0"));
            assert!(!formula.contains("O0"));
        }
    }

    #[test]
    fn formula_carbon_count_is_positive_across_the_weight_range() {
        let mut rng = rng();
        let low = molecular_formula(150.0, &mut rng);
        assert!(low.starts_with("C7H10"));
        let high = molecular_formula(549.99, &mut rng);
        assert!(high.starts_with("C27H40"));
    }

    #[test]
    fn functional_groups_are_distinct_and_from_the_scaffold_vocabulary() {
        let mut rng = rng();
        for template in Template::all() {
            let vocabulary = vocab::functional_group_vocabulary(template.scaffold);
            for _ in 0..50 {
                let groups = functional_groups(template.scaffold, &mut rng);
                assert!((1..=3).contains(&groups.len()));
                let distinct: HashSet<_> = groups.iter().collect();
                assert_eq!(distinct.len(), groups.len());
                for group in &groups {
                    assert!(vocabulary.contains(&group.as_str()));
                }
            }
        }
    }

    #[test]
    fn explicit_mechanism_passes_through_verbatim() {
        let mut rng = rng();
        let text = "Inibição seletiva de quinase";
        assert_eq!(mechanism(Some(text), &mut rng), text);
    }

    #[test]
    fn sampled_mechanism_comes_from_the_fixed_vocabulary() {
        let mut rng = rng();
        for _ in 0..50 {
            let sampled = mechanism(None, &mut rng);
            assert!(vocab::MECHANISMS.contains(&sampled.as_str()));
        }
    }

    #[test]
    fn advantages_are_nonempty_distinct_and_capped_at_three() {
        let mut rng = rng();
        for _ in 0..100 {
            let list = advantages(ScaffoldType::NaturalProduct, 0.95, 0.9, &mut rng);
            assert!(!list.is_empty());
            assert!(list.len() <= 3);
            let distinct: HashSet<_> = list.iter().collect();
            assert_eq!(distinct.len(), list.len());
        }
    }

    #[test]
    fn low_scores_on_a_plain_scaffold_leave_only_the_generic_advantages() {
        let mut rng = rng();
        let list = advantages(ScaffoldType::BenzeneDerivative, 0.5, 0.5, &mut rng);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&vocab::ADV_OPTIMIZATION_POTENTIAL.to_string()));
        assert!(list.contains(&vocab::ADV_VIABLE_SYNTHESIS.to_string()));
    }

    #[test]
    fn high_molecular_weight_always_raises_the_weight_concern() {
        let mut rng = rng();
        for _ in 0..100 {
            let list = concerns(&descriptors(520.0, 5.6, 151.0), &mut rng);
            assert!(list.contains(&vocab::CONCERN_HIGH_MOLECULAR_WEIGHT.to_string()));
            assert!(list.contains(&vocab::CONCERN_HIGH_LIPOPHILICITY.to_string()));
            assert_eq!(list.len(), 2);
        }
    }

    #[test]
    fn high_log_p_always_raises_the_lipophilicity_concern() {
        let mut rng = rng();
        for _ in 0..100 {
            let list = concerns(&descriptors(300.0, 5.4, 151.0), &mut rng);
            assert!(list.contains(&vocab::CONCERN_HIGH_LIPOPHILICITY.to_string()));
            assert!(list.len() <= 2);
        }
    }

    #[test]
    fn negative_log_p_raises_the_low_lipophilicity_concern() {
        let mut rng = rng();
        let list = concerns(&descriptors(300.0, -1.2, 90.0), &mut rng);
        assert_eq!(list, vec![vocab::CONCERN_LOW_LIPOPHILICITY.to_string()]);
    }

    #[test]
    fn unremarkable_descriptors_fall_back_to_the_generic_concern() {
        let mut rng = rng();
        let list = concerns(&descriptors(300.0, 2.0, 90.0), &mut rng);
        assert_eq!(list, vec![vocab::CONCERN_UNVALIDATED.to_string()]);
    }

    #[test]
    fn concerns_are_always_nonempty_and_distinct() {
        let mut rng = rng();
        let cases = [
            descriptors(520.0, 5.6, 151.0),
            descriptors(520.0, -1.0, 151.0),
            descriptors(300.0, 2.0, 90.0),
            descriptors(300.0, 5.5, 90.0),
        ];
        for case in &cases {
            for _ in 0..50 {
                let list = concerns(case, &mut rng);
                assert!(!list.is_empty());
                assert!(list.len() <= 2);
                let distinct: HashSet<_> = list.iter().collect();
                assert_eq!(distinct.len(), list.len());
            }
        }
    }
}
