// ============================================================================
// Value Module
// Tri-state value container and the refinement constraints it carries
// ============================================================================
//
// This module provides:
// - Value: Known / Null / Unknown container for a single typed datum
// - Kind: the closed set of kinds the numeric core operates on
// - Refinement/Bound: partial numeric bounds attached to unknowns
//
// Design principles:
// - Values are immutable; operations construct new values
// - An empty Refinement and a plain Unknown are the same thing
// - A Refinement never enforces lower <= upper; propagation output is trusted

mod refinement;
mod value;

pub use refinement::{Bound, Refinement};
pub use value::{Kind, Payload, Value};
