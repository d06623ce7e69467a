// ============================================================================
// Shared Constants
// Process-wide read-only constants used by the numeric rules
// ============================================================================

use rust_decimal::Decimal;

/// Canonical zero, used for exact-zero results and zero-divisor checks.
pub const ZERO: Decimal = Decimal::ZERO;

/// The boundary separating positive from negative scalars in the sign-based
/// propagation rules. Scalars strictly above it preserve bound order, scalars
/// strictly below it swap the bounds.
pub const POSITIVE_BOUNDARY: Decimal = Decimal::ZERO;

/// Smallest explicit radix accepted by `parseint`.
pub const MIN_PARSE_BASE: u32 = 2;

/// Largest explicit radix accepted by `parseint`.
pub const MAX_PARSE_BASE: u32 = 36;
