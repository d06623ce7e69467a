// ============================================================================
// Comparison Operations
// Ordering, equality and extrema over tri-state numbers
// ============================================================================
//
// Ordering comparisons widen each operand to an interval (a known number is
// the degenerate inclusive interval, a refined unknown contributes whichever
// bounds it carries) and resolve to a known bool only when the intervals
// prove the answer for every possible resolution. Anything else stays an
// unknown bool.

use super::errors::{FunctionError, FunctionResult};
use super::functions::expect_number;
use crate::value::{Bound, Kind, Value};

/// Interval view of a numeric operand. A missing side is unbounded.
struct Interval {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

/// Widen an operand to its interval. Null never resolves a comparison, so it
/// has no interval at all.
fn interval(value: &Value) -> Option<Interval> {
    if let Some(known) = value.as_number() {
        return Some(Interval {
            lower: Some(Bound::inclusive(known)),
            upper: Some(Bound::inclusive(known)),
        });
    }
    value.refinement().map(|r| Interval {
        lower: r.lower,
        upper: r.upper,
    })
}

/// `a < b` in every resolution: a's upper stays below b's lower, or they
/// touch without both bounds being inclusive.
fn surely_below(a: &Interval, b: &Interval) -> bool {
    match (a.upper, b.lower) {
        (Some(upper), Some(lower)) => {
            upper.value < lower.value
                || (upper.value == lower.value && !(upper.inclusive && lower.inclusive))
        }
        _ => false,
    }
}

/// `a <= b` in every resolution. Touching bounds are enough regardless of
/// inclusivity: a <= a.upper = b.lower <= b.
fn surely_at_or_below(a: &Interval, b: &Interval) -> bool {
    match (a.upper, b.lower) {
        (Some(upper), Some(lower)) => upper.value <= lower.value,
        _ => false,
    }
}

fn resolve_order(
    a: &Value,
    b: &Value,
    surely_true: impl Fn(&Interval, &Interval) -> bool,
    surely_false: impl Fn(&Interval, &Interval) -> bool,
) -> Value {
    if let (Some(ia), Some(ib)) = (interval(a), interval(b)) {
        if surely_true(&ia, &ib) {
            return Value::boolean(true);
        }
        if surely_false(&ia, &ib) {
            return Value::boolean(false);
        }
    }
    Value::unknown(Kind::Bool)
}

// ============================================================================
// Ordering
// ============================================================================

pub fn less_than(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    Ok(resolve_order(a, b, surely_below, |x, y| {
        surely_at_or_below(y, x)
    }))
}

pub fn less_than_or_equal(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    Ok(resolve_order(a, b, surely_at_or_below, |x, y| {
        surely_below(y, x)
    }))
}

pub fn greater_than(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    Ok(resolve_order(
        a,
        b,
        |x, y| surely_below(y, x),
        surely_at_or_below,
    ))
}

pub fn greater_than_or_equal(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    Ok(resolve_order(
        a,
        b,
        |x, y| surely_at_or_below(y, x),
        surely_below,
    ))
}

// ============================================================================
// Equality
// ============================================================================

/// Equality over any kinds. An unknown operand always yields an unknown
/// bool; refinements never prove equality. Two nulls of the same kind are
/// equal, and known payloads of different kinds are simply not equal.
pub fn equal(a: &Value, b: &Value) -> FunctionResult<Value> {
    if a.is_unknown() || b.is_unknown() {
        return Ok(Value::unknown(Kind::Bool));
    }
    if a.is_null() || b.is_null() {
        return Ok(Value::boolean(
            a.is_null() && b.is_null() && a.kind() == b.kind(),
        ));
    }
    Ok(Value::boolean(a == b))
}

pub fn not_equal(a: &Value, b: &Value) -> FunctionResult<Value> {
    let eq = equal(a, b)?;
    Ok(match eq.as_bool() {
        Some(result) => Value::boolean(!result),
        None => eq,
    })
}

// ============================================================================
// Extrema
// ============================================================================

/// Largest of one or more numbers. See [`extremum`] for the null and
/// unknown rules.
pub fn max(values: &[Value]) -> FunctionResult<Value> {
    extremum(values, true)
}

/// Smallest of one or more numbers.
pub fn min(values: &[Value]) -> FunctionResult<Value> {
    extremum(values, false)
}

/// Nulls are filtered out (all null means null). An unknown whose relevant
/// bound sits at or inside the best known value cannot beat it, so it is
/// dominated and filtered too. Surviving unknowns make the result unknown,
/// except that a single unknown with no knowns at all is returned as-is,
/// refinement preserved.
fn extremum(values: &[Value], pick_max: bool) -> FunctionResult<Value> {
    if values.is_empty() {
        return Err(FunctionError::domain(
            "extremum of an empty set of values",
        ));
    }
    for value in values {
        expect_number(value)?;
    }

    let knowns = values.iter().filter_map(|v| v.as_number());
    let best = if pick_max { knowns.max() } else { knowns.min() };

    let survivors: Vec<&Value> = values
        .iter()
        .filter(|v| v.is_unknown())
        .filter(|v| {
            let Some(best) = best else { return true };
            let refinement = v.refinement().cloned().unwrap_or_default();
            let dominated = if pick_max {
                matches!(refinement.upper, Some(upper) if upper.value <= best)
            } else {
                matches!(refinement.lower, Some(lower) if lower.value >= best)
            };
            !dominated
        })
        .collect();

    Ok(match (best, survivors.as_slice()) {
        (Some(best), []) => Value::number(best),
        (None, []) => Value::null(Kind::Number),
        (None, [single]) => (*single).clone(),
        _ => Value::unknown(Kind::Number),
    })
}
