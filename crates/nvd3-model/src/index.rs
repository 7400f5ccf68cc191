//! Row labels shared by the values of a series or table.

use serde::{Deserialize, Serialize};

use crate::Scalar;

/// Nanoseconds per millisecond, the unit change applied to temporal indices.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Ordered labels, one per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Index {
    /// Ordinal or numeric labels.
    Flat(Vec<Scalar>),
    /// Timestamps as nanoseconds since the Unix epoch.
    Datetime(Vec<i64>),
    /// Composite labels, one tuple per point. Teardown rejects these.
    Multi(Vec<Vec<Scalar>>),
}

impl Index {
    /// Positional index `0..len`.
    pub fn range(len: usize) -> Self {
        Self::Flat((0..len).map(|i| Scalar::Int(i as i64)).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Datetime(values) => values.len(),
            Self::Multi(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Datetime(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Short name used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Flat(_) => "flat",
            Self::Datetime(_) => "datetime",
            Self::Multi(_) => "multi",
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl From<Vec<i64>> for Index {
    fn from(values: Vec<i64>) -> Self {
        Self::Flat(values.into_iter().map(Scalar::Int).collect())
    }
}

impl From<Vec<f64>> for Index {
    fn from(values: Vec<f64>) -> Self {
        Self::Flat(values.into_iter().map(Scalar::Float).collect())
    }
}
