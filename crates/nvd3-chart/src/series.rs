//! Chart series and their NVD3 data payload.

use serde::{Serialize, Serializer};

use nvd3_model::{PointSet, Scalar};

/// A named series held by a chart.
///
/// Serializes to the NVD3 datum shape
/// `{"key": ..., "values": [{"x": ..., "y": ...}, ...]}`. Points are paired
/// positionally, so extra x or y values beyond the shorter side are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub x: Vec<Scalar>,
    pub y: Vec<Scalar>,
    pub color: Option<String>,
}

impl ChartSeries {
    pub fn new(key: impl Into<String>, x: Vec<Scalar>, y: Vec<Scalar>) -> Self {
        Self {
            key: key.into(),
            x,
            y,
            color: None,
        }
    }

    pub fn from_point_set(key: impl Into<String>, points: PointSet) -> Self {
        let (_, x, y) = points.into_parts();
        Self::new(key, x, y)
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Number of drawable points.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize)]
struct Point {
    x: Scalar,
    y: Scalar,
}

#[derive(Serialize)]
struct Datum<'a> {
    key: &'a str,
    values: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

impl Serialize for ChartSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Datum {
            key: &self.key,
            values: self
                .x
                .iter()
                .zip(&self.y)
                .map(|(x, y)| Point { x: *x, y: *y })
                .collect(),
            color: self.color.as_deref(),
        }
        .serialize(serializer)
    }
}
