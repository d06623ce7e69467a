// ============================================================================
// Refinement Propagation
// Per-operator rules carrying partial bounds through unknown arithmetic
// ============================================================================
//
// The rules are one-sided in places (multiply needs exactly one known
// scalar, divide only supports a known divisor). Downstream consumers depend
// on these asymmetries, so they are reproduced rather than completed.

use crate::config;
use crate::value::{Bound, Kind, Refinement, Value};
use rust_decimal::Decimal;

/// Binary operators that participate in refinement propagation.
///
/// Closed set: other operators never carry bounds through an unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

// ============================================================================
// Operand Extraction
// ============================================================================

/// Split an operand into its refinement (empty unless it is a refined
/// unknown) and its known decimal payload (present only when known).
///
/// Pure and total: never fails, never allocates beyond the refinement clone.
pub(crate) fn operand_parts(value: &Value) -> (Refinement, Option<Decimal>) {
    let refinement = value.refinement().cloned().unwrap_or_default();
    (refinement, value.as_number())
}

// ============================================================================
// Bound Helpers
// ============================================================================

/// Apply `op` to a bound's value, keeping its inclusivity. Dropping the bound
/// on decimal overflow is always sound: it only loses a constraint.
fn mapped(bound: Option<Bound>, op: impl Fn(Decimal) -> Option<Decimal>) -> Option<Bound> {
    bound.and_then(|b| op(b.value).map(|v| Bound::new(v, b.inclusive)))
}

/// Combine two same-direction bounds. The result holds only when both source
/// bounds hold, so inclusivity is the AND of the sources.
fn combined(
    x: Option<Bound>,
    y: Option<Bound>,
    op: impl Fn(Decimal, Decimal) -> Option<Decimal>,
) -> Option<Bound> {
    match (x, y) {
        (Some(x), Some(y)) => {
            op(x.value, y.value).map(|v| Bound::new(v, x.inclusive && y.inclusive))
        }
        _ => None,
    }
}

// ============================================================================
// Per-Operator Rules
// ============================================================================

/// Addition shifts whichever bounds exist; with two unknowns a bound survives
/// only when both operands constrain the same direction.
fn propagate_add(
    ref_a: &Refinement,
    ref_b: &Refinement,
    known_a: Option<Decimal>,
    known_b: Option<Decimal>,
) -> Refinement {
    match (known_a, known_b) {
        (Some(a), None) => Refinement::new(
            mapped(ref_b.lower, |v| a.checked_add(v)),
            mapped(ref_b.upper, |v| a.checked_add(v)),
        ),
        (None, Some(b)) => Refinement::new(
            mapped(ref_a.lower, |v| v.checked_add(b)),
            mapped(ref_a.upper, |v| v.checked_add(b)),
        ),
        (None, None) => Refinement::new(
            combined(ref_a.lower, ref_b.lower, |x, y| x.checked_add(y)),
            combined(ref_a.upper, ref_b.upper, |x, y| x.checked_add(y)),
        ),
        (Some(_), Some(_)) => Refinement::default(),
    }
}

/// Subtraction reverses ordering on the subtracted operand, so a known
/// minuend pairs its result-lower with the subtrahend's *upper* bound and
/// vice versa.
fn propagate_subtract(
    ref_a: &Refinement,
    ref_b: &Refinement,
    known_a: Option<Decimal>,
    known_b: Option<Decimal>,
) -> Refinement {
    match (known_a, known_b) {
        (None, Some(b)) => Refinement::new(
            mapped(ref_a.lower, |v| v.checked_sub(b)),
            mapped(ref_a.upper, |v| v.checked_sub(b)),
        ),
        (Some(a), None) => Refinement::new(
            mapped(ref_b.upper, |v| a.checked_sub(v)),
            mapped(ref_b.lower, |v| a.checked_sub(v)),
        ),
        (None, None) => Refinement::new(
            combined(ref_a.lower, ref_b.upper, |x, y| x.checked_sub(y)),
            combined(ref_a.upper, ref_b.lower, |x, y| x.checked_sub(y)),
        ),
        (Some(_), Some(_)) => Refinement::default(),
    }
}

/// Multiplication propagates only when exactly one operand is known. A
/// positive scalar preserves bound order, a negative scalar swaps the bounds
/// with their inclusivities. A zero scalar produces nothing here; the façade
/// short-circuits it to an exact zero before dispatch.
fn propagate_multiply(
    ref_a: &Refinement,
    ref_b: &Refinement,
    known_a: Option<Decimal>,
    known_b: Option<Decimal>,
) -> Refinement {
    let (scalar, other) = match (known_a, known_b) {
        (Some(a), None) => (a, ref_b),
        (None, Some(b)) => (b, ref_a),
        _ => return Refinement::default(),
    };

    if scalar > config::POSITIVE_BOUNDARY {
        Refinement::new(
            mapped(other.lower, |v| v.checked_mul(scalar)),
            mapped(other.upper, |v| v.checked_mul(scalar)),
        )
    } else if scalar < config::POSITIVE_BOUNDARY {
        Refinement::new(
            mapped(other.upper, |v| v.checked_mul(scalar)),
            mapped(other.lower, |v| v.checked_mul(scalar)),
        )
    } else {
        Refinement::default()
    }
}

/// Division supports only a known divisor over a refined dividend; the
/// reverse case produces no refinement. Sign handling mirrors multiply.
fn propagate_divide(
    ref_a: &Refinement,
    known_a: Option<Decimal>,
    known_b: Option<Decimal>,
) -> Refinement {
    let divisor = match (known_a, known_b) {
        (None, Some(b)) => b,
        _ => return Refinement::default(),
    };

    if divisor > config::POSITIVE_BOUNDARY {
        Refinement::new(
            mapped(ref_a.lower, |v| v.checked_div(divisor)),
            mapped(ref_a.upper, |v| v.checked_div(divisor)),
        )
    } else if divisor < config::POSITIVE_BOUNDARY {
        Refinement::new(
            mapped(ref_a.upper, |v| v.checked_div(divisor)),
            mapped(ref_a.lower, |v| v.checked_div(divisor)),
        )
    } else {
        Refinement::default()
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Select the propagation rule for `op` and wrap its result in an unknown
/// number. An empty refinement means "no additional constraint known".
///
/// Invoked by the façade only when at least one operand is unknown.
pub(crate) fn propagate(op: BinaryOp, a: &Value, b: &Value) -> Value {
    let (ref_a, known_a) = operand_parts(a);
    let (ref_b, known_b) = operand_parts(b);

    let refinement = match op {
        BinaryOp::Add => propagate_add(&ref_a, &ref_b, known_a, known_b),
        BinaryOp::Subtract => propagate_subtract(&ref_a, &ref_b, known_a, known_b),
        BinaryOp::Multiply => propagate_multiply(&ref_a, &ref_b, known_a, known_b),
        BinaryOp::Divide => propagate_divide(&ref_a, known_a, known_b),
    };

    tracing::trace!(?op, refined = !refinement.is_empty(), "propagated refinement");
    Value::unknown_refined(Kind::Number, refinement)
}
