//! Canonical, chart-ready coordinates.

use serde::Serialize;

use crate::Scalar;

/// Parallel x/y coordinates for one series.
///
/// `x` and `y` always have the same length. Every `y` is finite; x values are
/// milliseconds since epoch for temporal data and the raw label otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointSet {
    name: Option<String>,
    x: Vec<Scalar>,
    y: Vec<Scalar>,
}

impl PointSet {
    pub fn empty(name: Option<String>) -> Self {
        Self {
            name,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn with_capacity(name: Option<String>, capacity: usize) -> Self {
        Self {
            name,
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn from_pairs<I, X, Y>(name: Option<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Scalar>,
        Y: Into<Scalar>,
    {
        let mut points = Self::empty(name);
        for (x, y) in pairs {
            points.push(x.into(), y.into());
        }
        points
    }

    pub fn push(&mut self, x: Scalar, y: Scalar) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn x(&self) -> &[Scalar] {
        &self.x
    }

    pub fn y(&self) -> &[Scalar] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (Scalar, Scalar)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn into_parts(self) -> (Option<String>, Vec<Scalar>, Vec<Scalar>) {
        (self.name, self.x, self.y)
    }
}
