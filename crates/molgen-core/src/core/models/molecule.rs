use serde::{Deserialize, Serialize};

/// Synthetic structural summary attached to each generated compound record.
///
/// The counts are sampled, not derived from the SMILES encoding; they only have
/// to be internally consistent (`aromatic_rings` is always strictly less than
/// `rings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureProfile {
    /// Total ring count, between 1 and 4.
    pub rings: u8,
    /// Aromatic ring count, always strictly less than `rings`.
    pub aromatic_rings: u8,
    /// Heteroatom count, between 0 and 7.
    pub heteroatoms: u8,
    /// Characteristic functional groups, distinct, drawn from the scaffold's
    /// fixed vocabulary.
    pub functional_groups: Vec<String>,
}

/// A fully assembled mock compound record.
///
/// This is the output entity of the generation pipeline. A record is populated
/// once at construction and treated as an immutable value afterwards. Field
/// names serialize in camelCase to match the metadata schema downstream tooling
/// expects (`molecularWeight`, `drugLikeness`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeRecord {
    /// Batch-unique identifier, `mol_{index}_{4-digit random suffix}`.
    pub id: String,
    /// Generated compound name; uniqueness within a batch is not guaranteed.
    pub name: String,
    /// Structural encoding, one of a fixed finite set of literal SMILES strings.
    pub smiles: String,
    /// Compact element-count formula derived from the molecular weight.
    pub formula: String,
    /// Molecular weight in g/mol, rounded to two decimal places.
    pub molecular_weight: f64,
    /// Octanol-water partition coefficient, rounded to two decimal places.
    pub log_p: f64,
    /// Hydrogen-bond donor count.
    pub hbd: u8,
    /// Hydrogen-bond acceptor count.
    pub hba: u8,
    /// Topological polar surface area, rounded to two decimal places.
    pub tpsa: f64,
    /// Rule-of-five-style heuristic in [0, 1]; the batch is ranked by this.
    pub drug_likeness: f64,
    /// Synthetic accessibility estimate in [0.3, 1.0).
    pub synthesis_score: f64,
    /// Structural novelty estimate in [0.4, 1.0).
    pub novelty: f64,
    /// Predicted target affinity in [0.5, 1.0).
    pub target_affinity: f64,
    /// ADMET profile estimate in [0.4, 1.0).
    pub admet_score: f64,
    /// Mechanism-of-action description.
    pub mechanism: String,
    /// Narrative advantages; non-empty and free of duplicates.
    pub advantages: Vec<String>,
    /// Narrative concerns; non-empty and free of duplicates.
    pub concerns: Vec<String>,
    /// Sampled structural summary.
    pub structure: StructureProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MoleculeRecord {
        MoleculeRecord {
            id: "mol_1_4821".to_string(),
            name: "Neobenzine-1".to_string(),
            smiles: "C1=CC=CC=C1".to_string(),
            formula: "C12H18O2".to_string(),
            molecular_weight: 248.31,
            log_p: 2.41,
            hbd: 1,
            hba: 3,
            tpsa: 58.2,
            drug_likeness: 1.0,
            synthesis_score: 0.72,
            novelty: 0.55,
            target_affinity: 0.81,
            admet_score: 0.63,
            mechanism: "Antagonismo de receptor".to_string(),
            advantages: vec!["Síntese viável".to_string()],
            concerns: vec!["Necessita validação experimental".to_string()],
            structure: StructureProfile {
                rings: 2,
                aromatic_rings: 1,
                heteroatoms: 2,
                functional_groups: vec!["hydroxyl".to_string()],
            },
        }
    }

    #[test]
    fn record_serializes_with_camel_case_field_names() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(json.contains("\"molecularWeight\":248.31"));
        assert!(json.contains("\"logP\":2.41"));
        assert!(json.contains("\"drugLikeness\":1.0"));
        assert!(json.contains("\"aromaticRings\":1"));
        assert!(json.contains("\"functionalGroups\":[\"hydroxyl\"]"));
    }
}
