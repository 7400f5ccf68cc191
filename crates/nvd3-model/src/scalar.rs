//! Numeric scalars that remember whether they started out as integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single numeric cell.
///
/// Integers stay integers through teardown so that x values such as
/// milliseconds since epoch serialize as `946684800000`, not `946684800000.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Returns false for NaN and ±infinity. Integers are always finite.
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => v.is_finite(),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finiteness() {
        assert!(Scalar::Int(i64::MAX).is_finite());
        assert!(Scalar::Float(1.5).is_finite());
        assert!(!Scalar::Float(f64::NAN).is_finite());
        assert!(!Scalar::Float(f64::INFINITY).is_finite());
        assert!(!Scalar::Float(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn serializes_as_bare_numbers() {
        let json = serde_json::to_string(&vec![Scalar::Int(3), Scalar::Float(2.5)]).unwrap();
        assert_eq!(json, "[3,2.5]");
    }

    #[test]
    fn deserialize_keeps_integer_identity() {
        let values: Vec<Scalar> = serde_json::from_str("[1, 1.0, -4, 2.25]").unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Int(1),
                Scalar::Float(1.0),
                Scalar::Int(-4),
                Scalar::Float(2.25)
            ]
        );
    }
}
