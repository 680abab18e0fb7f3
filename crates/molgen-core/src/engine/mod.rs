//! # Engine Module
//!
//! The randomized half of the pipeline: everything here consumes an explicitly
//! passed random source (`rng: &mut impl Rng`), so tests can inject a
//! deterministic generator and the host decides how the source is owned.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Batch size, optional seed, and the
//!   optional mechanism override, with a validating builder
//! - **Descriptor Sampling** (`sampler`) - Uniform draws of physicochemical
//!   descriptors, structure counts, and quality-score axes
//! - **Attribute Generation** (`attributes`) - Pure generators for identity,
//!   encoding, formula, and narrative fields
//!
//! No function in this layer performs I/O or can fail: all draws are over
//! bounded ranges and every vocabulary lookup has a documented fallback.

pub(crate) mod attributes;
pub mod config;
pub(crate) mod sampler;
