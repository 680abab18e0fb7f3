use serde::{Deserialize, Serialize};

/// Randomized physicochemical descriptor block for one candidate compound.
///
/// Each field is drawn independently and uniformly from its domain-plausible
/// range; no cross-field correlation is modeled. This is a deliberate
/// simplification, not a physical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Descriptors {
    /// Molecular weight in g/mol, in [150, 550).
    pub mw: f64,
    /// Octanol-water partition coefficient, in [-2, 6).
    pub log_p: f64,
    /// Hydrogen-bond donor count, in {0..5}.
    pub hbd: u8,
    /// Hydrogen-bond acceptor count, in {0..9}.
    pub hba: u8,
    /// Topological polar surface area, in [20, 160).
    pub tpsa: f64,
}

/// Quality scores attached to a candidate compound.
///
/// `drug_likeness` is computed from the descriptors; the other four axes are
/// sampled independently of them so they remain orthogonal axes of variation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub drug_likeness: f64,
    pub synthesis_score: f64,
    pub novelty: f64,
    pub target_affinity: f64,
    pub admet_score: f64,
}
