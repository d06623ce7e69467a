// ============================================================================
// Numeric Façade
// The public numeric operations over tri-state values
// ============================================================================
//
// Every operation validates operand kinds first, then applies its null and
// unknown rules before touching the payloads. modulo, ceil, floor and log go
// through an f64 intermediate and come back to decimal through text. That is
// precision-lossy for very large magnitudes, but it keeps results consistent
// with the float semantics consumers of these operations already rely on.

use super::errors::{FunctionError, FunctionResult};
use super::propagate::{propagate, BinaryOp};
use crate::config;
use crate::value::{Bound, Kind, Refinement, Value};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use std::cmp::Ordering;
use std::str::FromStr;

// ============================================================================
// Operand Validation and Float Round-Trips
// ============================================================================

pub(super) fn expect_kind(value: &Value, expected: Kind) -> FunctionResult<()> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(FunctionError::TypeMismatch {
            expected,
            actual: value.kind(),
        })
    }
}

pub(super) fn expect_number(value: &Value) -> FunctionResult<()> {
    expect_kind(value, Kind::Number)
}

fn to_f64(value: Decimal) -> FunctionResult<f64> {
    value.to_f64().ok_or(FunctionError::Overflow)
}

/// Bring an f64 intermediate back into decimal through its text form.
fn decimal_from_f64(value: f64) -> FunctionResult<Decimal> {
    if value.is_nan() {
        return Err(FunctionError::domain("floating-point intermediate is undefined"));
    }
    if value.is_infinite() {
        return Err(FunctionError::Overflow);
    }
    Decimal::from_str(&value.to_string()).map_err(|_| FunctionError::Overflow)
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Add two numbers. Null if either operand is null; an unknown operand
/// dispatches refinement propagation.
pub fn add(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if a.is_null() || b.is_null() {
        return Ok(Value::null(Kind::Number));
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x
            .checked_add(y)
            .map(Value::number)
            .ok_or(FunctionError::Overflow),
        _ => Ok(propagate(BinaryOp::Add, a, b)),
    }
}

/// Subtract `b` from `a`. Null if either operand is null; an unknown operand
/// dispatches refinement propagation.
pub fn subtract(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if a.is_null() || b.is_null() {
        return Ok(Value::null(Kind::Number));
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x
            .checked_sub(y)
            .map(Value::number)
            .ok_or(FunctionError::Overflow),
        _ => Ok(propagate(BinaryOp::Subtract, a, b)),
    }
}

/// Multiply two numbers.
///
/// A known zero operand resolves to an exact zero even when the other
/// operand is unknown; the check runs before the unknown branch.
pub fn multiply(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if a.is_null() || b.is_null() {
        return Ok(Value::null(Kind::Number));
    }
    if a.as_number() == Some(config::ZERO) || b.as_number() == Some(config::ZERO) {
        return Ok(Value::number(config::ZERO));
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x
            .checked_mul(y)
            .map(Value::number)
            .ok_or(FunctionError::Overflow),
        _ => Ok(propagate(BinaryOp::Multiply, a, b)),
    }
}

/// Divide `a` by `b`.
///
/// # Errors
/// A known zero divisor is a fatal domain error for any dividend, including
/// an unknown one.
pub fn divide(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if a.is_null() || b.is_null() {
        return Ok(Value::null(Kind::Number));
    }
    if b.as_number() == Some(config::ZERO) {
        return Err(FunctionError::domain("attempted to divide by zero"));
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x
            .checked_div(y)
            .map(Value::number)
            .ok_or(FunctionError::Overflow),
        _ => Ok(propagate(BinaryOp::Divide, a, b)),
    }
}

/// Remainder of `a / b`, following the dividend's sign (fmod-style, not
/// Euclidean). No refinement support: any null or unknown operand yields a
/// plain unknown.
///
/// # Errors
/// A zero divisor is a fatal domain error.
pub fn modulo(a: &Value, b: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if a.is_null() || b.is_null() || a.is_unknown() || b.is_unknown() {
        return Ok(Value::unknown(Kind::Number));
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => {
            if y == config::ZERO {
                return Err(FunctionError::domain("attempted to modulo by zero"));
            }
            let remainder = to_f64(x)? % to_f64(y)?;
            decimal_from_f64(remainder).map(Value::number)
        }
        _ => Ok(Value::unknown(Kind::Number)),
    }
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Negate a number. For a refined unknown the bounds are negated and
/// swapped; null and plain unknowns pass through.
pub fn negate(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    if let Some(x) = a.as_number() {
        return Ok(Value::number(-x));
    }
    if a.is_null() {
        return Ok(a.clone());
    }
    let r = a.refinement().cloned().unwrap_or_default();
    if r.is_empty() {
        return Ok(a.clone());
    }
    Ok(Value::unknown_refined(
        Kind::Number,
        Refinement::new(
            r.upper.map(|u| Bound::new(-u.value, u.inclusive)),
            r.lower.map(|l| Bound::new(-l.value, l.inclusive)),
        ),
    ))
}

/// Absolute value.
///
/// Refinement handling is asymmetric: a fully non-negative range
/// is returned unchanged, a fully non-positive range is swap-negated, a
/// range straddling zero becomes [0, max magnitude], and a lone non-positive
/// upper bound derives only a lower bound. Every other unknown shape falls
/// back to a plain unknown.
pub fn abs(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    if let Some(x) = a.as_number() {
        return Ok(Value::number(x.abs()));
    }
    if a.is_null() {
        return Ok(a.clone());
    }
    let r = a.refinement().cloned().unwrap_or_default();
    match (r.lower, r.upper) {
        (Some(lower), Some(upper)) => {
            if lower.value >= config::ZERO {
                Ok(a.clone())
            } else if upper.value <= config::ZERO {
                Ok(Value::unknown_refined(
                    Kind::Number,
                    Refinement::between(
                        Bound::new(-upper.value, upper.inclusive),
                        Bound::new(-lower.value, lower.inclusive),
                    ),
                ))
            } else {
                // Straddles zero: ties on magnitude keep the lower bound's flag
                let lower_magnitude = lower.value.abs();
                let upper_magnitude = upper.value.abs();
                let result_upper = if lower_magnitude >= upper_magnitude {
                    Bound::new(lower_magnitude, lower.inclusive)
                } else {
                    Bound::new(upper_magnitude, upper.inclusive)
                };
                Ok(Value::unknown_refined(
                    Kind::Number,
                    Refinement::between(Bound::inclusive(config::ZERO), result_upper),
                ))
            }
        }
        (Some(lower), None) if lower.value >= config::ZERO => Ok(a.clone()),
        (None, Some(upper)) if upper.value <= config::ZERO => Ok(Value::unknown_refined(
            Kind::Number,
            Refinement::at_least(Bound::new(-upper.value, upper.inclusive)),
        )),
        _ => Ok(Value::unknown(Kind::Number)),
    }
}

/// Round up to the nearest integer. Null and unknown pass through unchanged.
pub fn ceil(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    match a.as_number() {
        Some(x) => decimal_from_f64(to_f64(x)?.ceil()).map(Value::number),
        None => Ok(a.clone()),
    }
}

/// Round down to the nearest integer. Null and unknown pass through
/// unchanged.
pub fn floor(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    match a.as_number() {
        Some(x) => decimal_from_f64(to_f64(x)?.floor()).map(Value::number),
        None => Ok(a.clone()),
    }
}

/// Sign of a number as exactly -1, 0 or 1. Null and unknown pass through.
pub fn signum(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    match a.as_number() {
        Some(x) => Ok(Value::number(match x.cmp(&config::ZERO) {
            Ordering::Greater => Decimal::ONE,
            Ordering::Less => Decimal::NEGATIVE_ONE,
            Ordering::Equal => config::ZERO,
        })),
        None => Ok(a.clone()),
    }
}

/// Truncate toward zero. Null and unknown pass through.
pub fn int(a: &Value) -> FunctionResult<Value> {
    expect_number(a)?;
    match a.as_number() {
        Some(x) => Ok(Value::number(x.trunc())),
        None => Ok(a.clone()),
    }
}

// ============================================================================
// Logarithm, Exponentiation, Parsing
// ============================================================================

/// Logarithm of `num` in base `base`, as a floating-point ratio rounded back
/// through decimal text. Any null or unknown operand yields a plain unknown.
///
/// # Errors
/// `num <= 0`, `base <= 0` and `base == 1` are fatal domain errors.
pub fn log(num: &Value, base: &Value) -> FunctionResult<Value> {
    expect_number(num)?;
    expect_number(base)?;
    let (Some(n), Some(b)) = (num.as_number(), base.as_number()) else {
        return Ok(Value::unknown(Kind::Number));
    };
    if n <= config::ZERO {
        return Err(FunctionError::domain("log of a non-positive number"));
    }
    if b <= config::ZERO {
        return Err(FunctionError::domain("log base must be positive"));
    }
    if b == Decimal::ONE {
        return Err(FunctionError::domain("log base must not be 1"));
    }
    decimal_from_f64(to_f64(n)?.log(to_f64(b)?)).map(Value::number)
}

/// Raise `num` to `power`. Any null or unknown operand yields a plain
/// unknown. Integral exponents use the decimal provider's exact
/// exponentiation; fractional exponents go through the f64 intermediate.
///
/// # Errors
/// An invalid operation, such as a fractional power of a negative base, is a
/// fatal domain error.
pub fn pow(num: &Value, power: &Value) -> FunctionResult<Value> {
    expect_number(num)?;
    expect_number(power)?;
    let (Some(n), Some(p)) = (num.as_number(), power.as_number()) else {
        return Ok(Value::unknown(Kind::Number));
    };
    if p.fract() == config::ZERO {
        if let Some(exponent) = p.to_i64() {
            return n
                .checked_powi(exponent)
                .map(Value::number)
                .ok_or(FunctionError::Overflow);
        }
    }
    let result = to_f64(n)?.powf(to_f64(p)?);
    if result.is_nan() {
        return Err(FunctionError::domain("invalid exponentiation"));
    }
    decimal_from_f64(result).map(Value::number)
}

/// Parse an integer out of a string in the given base. Base 0 infers the
/// radix from a `0x`/`0o`/`0b` prefix and defaults to 10; explicit bases 2,
/// 8 and 16 accept their matching prefix.
///
/// An unparsable string returns null rather than an error, so callers can
/// treat a failed parse like any other absent value.
///
/// # Errors
/// A base other than 0 or 2..=36 is a fatal domain error.
pub fn parseint(text: &Value, base: &Value) -> FunctionResult<Value> {
    expect_kind(text, Kind::String)?;
    expect_number(base)?;
    if text.is_null() || base.is_null() {
        return Ok(Value::null(Kind::Number));
    }
    if text.is_unknown() || base.is_unknown() {
        return Ok(Value::unknown(Kind::Number));
    }
    let radix = base
        .as_number()
        .filter(|b| b.fract() == config::ZERO)
        .and_then(|b| b.to_u32())
        .filter(|r| *r == 0 || (config::MIN_PARSE_BASE..=config::MAX_PARSE_BASE).contains(r))
        .ok_or_else(|| FunctionError::domain("parse base must be 0 or between 2 and 36"))?;

    Ok(match parse_integer(text.as_str().unwrap_or_default(), radix) {
        Some(parsed) => Value::number(parsed),
        None => {
            tracing::debug!(radix, "unparsable integer text, soft-failing to null");
            Value::null(Kind::Number)
        }
    })
}

fn parse_integer(text: &str, base: u32) -> Option<Decimal> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = match base {
        0 => match unsigned.get(..2).map(|p| p.to_ascii_lowercase()).as_deref() {
            Some("0x") => (16, &unsigned[2..]),
            Some("0o") => (8, &unsigned[2..]),
            Some("0b") => (2, &unsigned[2..]),
            _ => (10, unsigned),
        },
        16 => (16, strip_radix_prefix(unsigned, "0x")),
        8 => (8, strip_radix_prefix(unsigned, "0o")),
        2 => (2, strip_radix_prefix(unsigned, "0b")),
        _ => (base, unsigned),
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = Decimal::from_i128(magnitude)?;
    Some(if negative { -value } else { value })
}

fn strip_radix_prefix<'a>(digits: &'a str, prefix: &str) -> &'a str {
    match digits.get(..2) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &digits[2..],
        _ => digits,
    }
}
