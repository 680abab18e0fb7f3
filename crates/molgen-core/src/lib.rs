//! # molgen Core Library
//!
//! A library for synthesizing plausible, structurally diverse mock small-molecule
//! records from randomized inputs constrained by domain heuristics.
//!
//! It produces datasets for downstream tooling that expects realistic-looking
//! molecule metadata (descriptors, drug-likeness scores, narrative annotations)
//! without depending on a real cheminformatics engine: structures are drawn from a
//! fixed catalog of scaffold archetypes, and every numeric property is sampled from
//! domain-plausible ranges rather than computed from chemistry.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! pipeline modular and testable.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`MoleculeRecord`, `Descriptors`), the static scaffold catalog and its fixed
//!   vocabularies, and pure scoring math (`drug_likeness`).
//!
//! - **[`engine`]: The Logic Core.** Consumes a caller-provided random source to
//!   sample descriptors and synthesize the individual record attributes (names,
//!   formulas, structural encodings, narrative fields). Holds the generation
//!   configuration.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the `engine` and `core` together to assemble complete records and return
//!   a batch ranked by drug-likeness. This is the sole entry point consumers need.

pub mod core;
pub mod engine;
pub mod workflows;
