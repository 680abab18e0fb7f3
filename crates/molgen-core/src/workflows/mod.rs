//! # Workflows Module
//!
//! High-level entry points that tie the `engine` and `core` layers together.
//!
//! ## Architecture
//!
//! - **Generation Workflow** ([`generate`]) - Assembles complete compound
//!   records from the scaffold catalog, the descriptor sampler, and the
//!   attribute generators, and returns the batch ranked by drug-likeness.
//!
//! The workflow holds no state between invocations beyond the immutable
//! catalogs; the returned batch is owned solely by the caller.

pub mod generate;
