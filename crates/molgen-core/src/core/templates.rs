/// Structural archetype a generated compound is derived from.
///
/// The catalog covers five broad scaffold families commonly seen in medicinal
/// chemistry; each maps to a representative base encoding and a vocabulary of
/// characteristic functional groups (see [`super::vocab`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldType {
    /// Aromatic carbocycle derivative (benzene-based).
    BenzeneDerivative,
    /// Nitrogen- or oxygen-containing ring system.
    Heterocycle,
    /// Open-chain aliphatic skeleton.
    AliphaticChain,
    /// Peptide-bond mimic.
    PeptideMimic,
    /// Natural-product-like fused scaffold.
    NaturalProduct,
}

impl ScaffoldType {
    /// Canonical label, e.g. `benzene_derivative`.
    pub fn label(&self) -> &'static str {
        match self {
            ScaffoldType::BenzeneDerivative => "benzene_derivative",
            ScaffoldType::Heterocycle => "heterocycle",
            ScaffoldType::AliphaticChain => "aliphatic_chain",
            ScaffoldType::PeptideMimic => "peptide_mimic",
            ScaffoldType::NaturalProduct => "natural_product",
        }
    }

    /// First segment of the label, used as the stem of generated compound names.
    pub fn stem(&self) -> &'static str {
        match self {
            ScaffoldType::BenzeneDerivative => "benzene",
            ScaffoldType::Heterocycle => "heterocycle",
            ScaffoldType::AliphaticChain => "aliphatic",
            ScaffoldType::PeptideMimic => "peptide",
            ScaffoldType::NaturalProduct => "natural",
        }
    }
}

/// One entry of the static scaffold catalog: an archetype, its representative
/// base encoding, and the named variations it can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub scaffold: ScaffoldType,
    pub base_structure: &'static str,
    pub variations: &'static [&'static str],
}

static TEMPLATES: [Template; 5] = [
    Template {
        scaffold: ScaffoldType::BenzeneDerivative,
        base_structure: "C1=CC=CC=C1",
        variations: &["substituted", "fused_rings", "heteroaromatic"],
    },
    Template {
        scaffold: ScaffoldType::Heterocycle,
        base_structure: "C1=CN=CC=C1",
        variations: &["pyridine", "pyrimidine", "quinoline", "indole"],
    },
    Template {
        scaffold: ScaffoldType::AliphaticChain,
        base_structure: "CCCCCC",
        variations: &["branched", "cyclic", "unsaturated"],
    },
    Template {
        scaffold: ScaffoldType::PeptideMimic,
        base_structure: "NC(=O)C",
        variations: &["beta_sheet", "alpha_helix", "turn_mimic"],
    },
    Template {
        scaffold: ScaffoldType::NaturalProduct,
        base_structure: "C1CC2CCC1C2",
        variations: &["steroid", "terpene", "alkaloid", "flavonoid"],
    },
];

impl Template {
    /// The full catalog, fixed at compile time.
    pub fn all() -> &'static [Template] {
        &TEMPLATES
    }
}
