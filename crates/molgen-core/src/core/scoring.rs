use super::models::descriptors::Descriptors;

const MW_LIMIT: f64 = 500.0;
const LOG_P_LIMIT: f64 = 5.0;
const HBD_LIMIT: u8 = 5;
const HBA_LIMIT: u8 = 10;
const TPSA_LIMIT: f64 = 140.0;

const RULE_PENALTY: f64 = 0.2;
const TPSA_PENALTY: f64 = 0.1;

/// Rule-of-five-style drug-likeness heuristic.
///
/// Starts at 1.0 and applies a fixed penalty for each violated threshold
/// (molecular weight, logP, donor and acceptor counts, TPSA), clamping the
/// result to [0, 1]. This mirrors the classic Lipinski rules of thumb; it is
/// not a certified scoring function.
pub fn drug_likeness(descriptors: &Descriptors) -> f64 {
    let mut score = 1.0;
    if descriptors.mw > MW_LIMIT {
        score -= RULE_PENALTY;
    }
    if descriptors.log_p > LOG_P_LIMIT {
        score -= RULE_PENALTY;
    }
    if descriptors.hbd > HBD_LIMIT {
        score -= RULE_PENALTY;
    }
    if descriptors.hba > HBA_LIMIT {
        score -= RULE_PENALTY;
    }
    if descriptors.tpsa > TPSA_LIMIT {
        score -= TPSA_PENALTY;
    }
    score.clamp(0.0, 1.0)
}
