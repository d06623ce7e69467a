// ============================================================================
// Configuration Value Numeric Core
// Tri-state value model with unknown-value refinement propagation
// ============================================================================

//! # cval-numeric
//!
//! The numeric-arithmetic core of a dynamically-typed configuration-value
//! system: a tri-state (known/null/unknown) value model used to exchange
//! typed data between tools.
//!
//! ## Features
//!
//! - **Tri-state values**: every datum is known, null, or unknown
//! - **Refinement propagation**: arithmetic on unknowns carries partial
//!   lower/upper bounds through add, subtract, multiply and divide,
//!   sign-aware where the operator demands it
//! - **Full numeric façade**: add, subtract, multiply, divide, modulo,
//!   negate, abs, ceil, floor, log, pow, signum, parseint and integer
//!   truncation, each with its own null/unknown contract
//! - **Refinement-aware comparisons**: ordering and extrema resolve to
//!   known booleans when the bounds prove the answer
//! - **Pure and thread-safe**: no shared state, no I/O; every operation is
//!   a synchronous function of immutable inputs
//!
//! ## Example
//!
//! ```rust
//! use cval_numeric::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // A value that is not known yet, but proven to be in [2, 5]
//! let pending = Value::unknown_refined(
//!     Kind::Number,
//!     Refinement::between(
//!         Bound::inclusive(Decimal::from(2)),
//!         Bound::inclusive(Decimal::from(5)),
//!     ),
//! );
//!
//! // Arithmetic keeps the bounds honest: pending + 3 is in [5, 8]
//! let shifted = add(&pending, &Value::number(Decimal::from(3))).unwrap();
//! let bounds = shifted.refinement().unwrap();
//! assert_eq!(bounds.lower.unwrap().value, Decimal::from(5));
//! assert_eq!(bounds.upper.unwrap().value, Decimal::from(8));
//!
//! // And comparisons can resolve before the value ever does
//! let verdict = greater_than(&shifted, &Value::number(Decimal::from(4))).unwrap();
//! assert!(verdict.is_true());
//! ```

pub mod config;
pub mod numeric;
pub mod value;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        abs, add, ceil, divide, equal, floor, greater_than, greater_than_or_equal, int, less_than,
        less_than_or_equal, log, max, min, modulo, multiply, negate, not_equal, parseint, pow,
        signum, subtract, FunctionError, FunctionResult,
    };
    pub use crate::value::{Bound, Kind, Payload, Refinement, Value};
}
