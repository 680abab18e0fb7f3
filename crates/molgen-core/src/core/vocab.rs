use super::templates::ScaffoldType;
use phf::{Map, phf_map};

// Narrative strings are opaque fixed-vocabulary data; they are not subject
// to localization.

static VARIATION_SMILES: Map<&'static str, &'static str> = phf_map! {
    "substituted" => "C1=CC(C)=CC(O)=C1",
    "fused_rings" => "C1=CC=C2C=CC=CC2=C1",
    "heteroaromatic" => "C1=CN=CC=C1",
    "pyridine" => "C1=CC=NC=C1",
    "pyrimidine" => "C1=CN=CN=C1",
    "quinoline" => "C1=CC=C2N=CC=CC2=C1",
    "indole" => "C1=CC=C2C(=C1)C=CN2",
    "branched" => "CC(C)CC(C)C",
    "cyclic" => "C1CCCCC1",
    "unsaturated" => "C=CC=CC=C",
    "beta_sheet" => "NC(=O)C(N)C(=O)N",
    "alpha_helix" => "NC(C)C(=O)NC(C)C(=O)N",
    "steroid" => "C1CC2CCC3C(CCC4CCCCC34)C2CC1",
    "terpene" => "CC(C)=CCCC(C)=C",
    "alkaloid" => "CN1CCC2=CC=CC=C2C1",
    "flavonoid" => "C1=CC(=CC=C1C2=CC(=O)C3=C(C=C(C=C3O2)O)O)O",
};

pub static NAME_PREFIXES: [&str; 8] = [
    "Neo", "Iso", "Meta", "Para", "Ortho", "Cyclo", "Tetra", "Penta",
];

pub static NAME_SUFFIXES: [&str; 8] = ["ine", "ole", "ane", "ide", "ate", "yl", "one", "al"];

pub static MECHANISMS: [&str; 8] = [
    "Inibição competitiva do sítio ativo",
    "Modulação alostérica positiva",
    "Antagonismo de receptor",
    "Inibição enzimática reversível",
    "Bloqueio de canal iônico",
    "Ativação de receptor acoplado à proteína G",
    "Inibição da síntese proteica",
    "Modulação da expressão gênica",
];

pub const ADV_DRUG_LIKENESS: &str = "Excelente drug-likeness";
pub const ADV_NOVEL_STRUCTURE: &str = "Estrutura altamente inovadora";
pub const ADV_NATURAL_PRODUCT: &str = "Baseado em produto natural";
pub const ADV_AQUEOUS_SOLUBILITY: &str = "Boa solubilidade aquosa";
pub const ADV_SELECTIVITY: &str = "Alta seletividade";
pub const ADV_OPTIMIZATION_POTENTIAL: &str = "Potencial para otimização";
pub const ADV_VIABLE_SYNTHESIS: &str = "Síntese viável";

pub const CONCERN_HIGH_LIPOPHILICITY: &str = "Alta lipofilicidade";
pub const CONCERN_HIGH_MOLECULAR_WEIGHT: &str = "Peso molecular elevado";
pub const CONCERN_LOW_PERMEABILITY: &str = "TPSA alta - possível baixa permeabilidade";
pub const CONCERN_LOW_LIPOPHILICITY: &str = "Baixa lipofilicidade";
pub const CONCERN_UNVALIDATED: &str = "Necessita validação experimental";

/// Looks up the literal SMILES encoding for a named variation.
///
/// Returns `None` for variations without an explicit entry (e.g. `turn_mimic`);
/// callers fall back to the owning template's base structure.
pub fn variation_smiles(variation: &str) -> Option<&'static str> {
    VARIATION_SMILES.get(variation).copied()
}

/// The fixed functional-group vocabulary for a scaffold family.
pub fn functional_group_vocabulary(scaffold: ScaffoldType) -> &'static [&'static str; 4] {
    match scaffold {
        ScaffoldType::BenzeneDerivative => &["hydroxyl", "methyl", "amino", "carboxyl"],
        ScaffoldType::Heterocycle => &["amino", "carbonyl", "hydroxyl", "methoxy"],
        ScaffoldType::AliphaticChain => &["hydroxyl", "amino", "carboxyl", "ester"],
        ScaffoldType::PeptideMimic => &["amide", "amino", "carboxyl", "hydroxyl"],
        ScaffoldType::NaturalProduct => &["hydroxyl", "methyl", "carbonyl", "ether"],
    }
}
