// ============================================================================
// Numeric Module
// Refinement-propagating arithmetic and comparisons over tri-state values
// ============================================================================
//
// This module provides:
// - The 14 numeric operations (add .. int) over Value operands
// - Refinement propagation rules for add/subtract/multiply/divide
// - Comparison operations that resolve against refinements where possible
// - FunctionError: the error taxonomy for all of the above
//
// Design principles:
// - Validate operand kinds before any computation
// - Null and unknown rules run before payload arithmetic
// - Every operation is a pure function of its inputs; inputs are never
//   mutated and results are freshly constructed

mod compare;
mod errors;
mod functions;
mod propagate;

pub use compare::{
    equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, max, min,
    not_equal,
};
pub use errors::{FunctionError, FunctionResult};
pub use functions::{
    abs, add, ceil, divide, floor, int, log, modulo, multiply, negate, parseint, pow, signum,
    subtract,
};
