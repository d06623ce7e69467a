// ============================================================================
// Refinement
// Partial numeric constraints carried by unknown values
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single directional constraint on an unknown number.
///
/// `inclusive` records whether the bounded value may equal `value` itself
/// (`>=`/`<=`) or must stay strictly beyond it (`>`/`<`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    pub value: Decimal,
    pub inclusive: bool,
}

impl Bound {
    #[inline]
    pub const fn new(value: Decimal, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    /// Bound that the value may reach (`>=` or `<=`).
    #[inline]
    pub const fn inclusive(value: Decimal) -> Self {
        Self::new(value, true)
    }

    /// Bound that the value must stay strictly beyond (`>` or `<`).
    #[inline]
    pub const fn exclusive(value: Decimal) -> Self {
        Self::new(value, false)
    }
}

/// Partial bounds attached to an unknown numeric value.
///
/// Each side is independently optional; an absent side means "no known
/// constraint in that direction". The empty refinement is the plain,
/// unrefined unknown. A refinement never proves what the value *is*, only
/// narrows the set of values it could resolve to.
///
/// Whether `lower.value <= upper.value` holds is not enforced here; chained
/// propagation is trusted to produce whatever the rules yield.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Refinement {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Refinement {
    pub const fn new(lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Self { lower, upper }
    }

    /// Constrained on both sides.
    pub const fn between(lower: Bound, upper: Bound) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    /// Constrained from below only.
    pub const fn at_least(lower: Bound) -> Self {
        Self::new(Some(lower), None)
    }

    /// Constrained from above only.
    pub const fn at_most(upper: Bound) -> Self {
        Self::new(None, Some(upper))
    }

    /// True when neither side carries a constraint.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let refinement = Refinement::default();
        assert!(refinement.is_empty());
        assert_eq!(refinement.lower, None);
        assert_eq!(refinement.upper, None);
    }

    #[test]
    fn test_constructors() {
        let lower = Bound::inclusive(Decimal::from(2));
        let upper = Bound::exclusive(Decimal::from(5));

        let both = Refinement::between(lower, upper);
        assert!(!both.is_empty());
        assert_eq!(both.lower, Some(lower));
        assert_eq!(both.upper, Some(upper));

        assert_eq!(Refinement::at_least(lower).upper, None);
        assert_eq!(Refinement::at_most(upper).lower, None);
    }

    #[test]
    fn test_bound_inclusivity() {
        assert!(Bound::inclusive(Decimal::ONE).inclusive);
        assert!(!Bound::exclusive(Decimal::ONE).inclusive);
    }
}
