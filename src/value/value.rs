// ============================================================================
// Value
// Tri-state (known / null / unknown) container for a single typed datum
// ============================================================================

use super::refinement::Refinement;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kinds of data this numeric core operates on.
///
/// The broader value system carries more kinds (collections, objects, ...);
/// this crate only needs numbers, strings (for `parseint`) and bools (for
/// comparison results).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Number,
    String,
    Bool,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Number => write!(f, "number"),
            Kind::String => write!(f, "string"),
            Kind::Bool => write!(f, "bool"),
        }
    }
}

/// Concrete payload of a known value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload {
    Number(Decimal),
    String(String),
    Bool(bool),
}

impl Payload {
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Number(_) => Kind::Number,
            Payload::String(_) => Kind::String,
            Payload::Bool(_) => Kind::Bool,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum State {
    Known(Payload),
    Null,
    Unknown(Refinement),
}

/// A single typed datum in one of three states: a concrete known payload,
/// an explicit null, or an unknown that may carry a [`Refinement`].
///
/// Values are immutable once constructed; every operation in this crate
/// produces a new `Value` and never mutates its inputs, so values are safe
/// to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Value {
    kind: Kind,
    state: State,
}

impl Value {
    // ========================================================================
    // Construction
    // ========================================================================

    /// A known number.
    pub fn number(value: Decimal) -> Self {
        Self {
            kind: Kind::Number,
            state: State::Known(Payload::Number(value)),
        }
    }

    /// A known string.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: Kind::String,
            state: State::Known(Payload::String(value.into())),
        }
    }

    /// A known bool.
    pub fn boolean(value: bool) -> Self {
        Self {
            kind: Kind::Bool,
            state: State::Known(Payload::Bool(value)),
        }
    }

    /// An explicit null of the given kind.
    pub fn null(kind: Kind) -> Self {
        Self {
            kind,
            state: State::Null,
        }
    }

    /// A plain unknown of the given kind, with no refinement.
    pub fn unknown(kind: Kind) -> Self {
        Self {
            kind,
            state: State::Unknown(Refinement::default()),
        }
    }

    /// An unknown carrying partial bounds. An empty refinement is
    /// indistinguishable from [`Value::unknown`].
    pub fn unknown_refined(kind: Kind, refinement: Refinement) -> Self {
        Self {
            kind,
            state: State::Unknown(refinement),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self.state, State::Known(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.state, State::Null)
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self.state, State::Unknown(_))
    }

    /// True for an unknown that carries at least one bound.
    pub fn is_refined(&self) -> bool {
        matches!(&self.state, State::Unknown(r) if !r.is_empty())
    }

    /// The known numeric payload, if any.
    pub fn as_number(&self) -> Option<Decimal> {
        match &self.state {
            State::Known(Payload::Number(d)) => Some(*d),
            _ => None,
        }
    }

    /// The known string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match &self.state {
            State::Known(Payload::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The known bool payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match &self.state {
            State::Known(Payload::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn is_true(&self) -> bool {
        self.as_bool() == Some(true)
    }

    #[inline]
    pub fn is_false(&self) -> bool {
        self.as_bool() == Some(false)
    }

    /// The refinement of an unknown value. `Some` for every unknown, with an
    /// empty refinement standing for the plain unknown.
    pub fn refinement(&self) -> Option<&Refinement> {
        match &self.state {
            State::Unknown(r) => Some(r),
            _ => None,
        }
    }
}
