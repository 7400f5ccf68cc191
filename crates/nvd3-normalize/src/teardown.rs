//! Conversion of labeled series and tables into canonical point sets.
//!
//! Values that cannot be drawn (missing, NaN, ±infinity) are dropped together
//! with their index label. Temporal indices are converted from nanoseconds to
//! milliseconds since epoch, which is what d3 date scales expect.

use serde::Serialize;
use tracing::{debug, trace};

use nvd3_model::{
    Index, LabeledSeries, NANOS_PER_MILLI, Nvd3Error, PointSet, Result, Scalar, Table, TabularData,
};

/// Output of [`normalize`], mirroring the shape of its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Series(PointSet),
    Table(Vec<PointSet>),
}

impl Normalized {
    /// Flattens into a list of point sets (one for a series).
    pub fn into_point_sets(self) -> Vec<PointSet> {
        match self {
            Self::Series(points) => vec![points],
            Self::Table(sets) => sets,
        }
    }
}

/// Normalizes a series or a table.
pub fn normalize(data: &TabularData) -> Result<Normalized> {
    match data {
        TabularData::Series(series) => normalize_series(series).map(Normalized::Series),
        TabularData::Table(table) => normalize_table(table).map(Normalized::Table),
    }
}

/// Converts an index into x values.
///
/// Timestamps become integer milliseconds since epoch using floor division,
/// so `-1ns` maps to `-1ms` and `1_999_999ns` to `1ms`. Flat labels pass
/// through unchanged.
///
/// # Errors
///
/// Returns [`Nvd3Error::UnsupportedIndex`] for a multi-level index.
pub fn normalize_index(index: &Index) -> Result<Vec<Scalar>> {
    match index {
        Index::Flat(values) => Ok(values.clone()),
        Index::Datetime(nanos) => Ok(nanos
            .iter()
            .map(|ns| Scalar::Int(ns.div_euclid(NANOS_PER_MILLI)))
            .collect()),
        Index::Multi(tuples) => {
            let levels = tuples.iter().map(Vec::len).max().unwrap_or(0);
            Err(Nvd3Error::UnsupportedIndex(format!(
                "{levels} levels over {} entries",
                tuples.len()
            )))
        }
    }
}

/// Converts one series, dropping non-finite and missing values.
pub fn normalize_series(series: &LabeledSeries) -> Result<PointSet> {
    let x_values = normalize_index(series.index())?;
    let points = collect_points(
        series.name().map(str::to_string),
        &x_values,
        series.values(),
    );
    debug!(
        series = points.name().unwrap_or("<unnamed>"),
        index = series.index().kind(),
        kept = points.len(),
        dropped = series.len() - points.len(),
        "normalized series"
    );
    Ok(points)
}

/// Converts every column of a table, in column order.
///
/// Each column is filtered on its own, so point sets from one table may have
/// different lengths. A multi-level index fails the whole table.
pub fn normalize_table(table: &Table) -> Result<Vec<PointSet>> {
    let x_values = normalize_index(table.index())?;
    let sets: Vec<PointSet> = table
        .columns()
        .map(|(name, values)| {
            let points = collect_points(Some(name.to_string()), &x_values, values);
            trace!(
                column = name,
                kept = points.len(),
                dropped = values.len() - points.len(),
                "normalized column"
            );
            points
        })
        .collect();
    debug!(
        columns = sets.len(),
        rows = table.height(),
        index = table.index().kind(),
        "normalized table"
    );
    Ok(sets)
}

fn collect_points(
    name: Option<String>,
    x_values: &[Scalar],
    values: &[Option<Scalar>],
) -> PointSet {
    let mut points = PointSet::with_capacity(name, values.len());
    for (x, y) in x_values.iter().zip(values) {
        if let Some(y) = y.filter(|y| y.is_finite()) {
            points.push(*x, y);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(values: &[f64]) -> Vec<Option<Scalar>> {
        values.iter().map(|v| Some(Scalar::Float(*v))).collect()
    }

    #[test]
    fn flat_index_passes_through() {
        let index = Index::Flat(vec![Scalar::Int(3), Scalar::Float(0.5)]);
        assert_eq!(
            normalize_index(&index).unwrap(),
            vec![Scalar::Int(3), Scalar::Float(0.5)]
        );
    }

    #[test]
    fn datetime_index_floors_to_millis() {
        let index = Index::Datetime(vec![946_684_800_000_000_000, 1_999_999, -1, -1_000_000, 0]);
        assert_eq!(
            normalize_index(&index).unwrap(),
            vec![
                Scalar::Int(946_684_800_000),
                Scalar::Int(1),
                Scalar::Int(-1),
                Scalar::Int(-1),
                Scalar::Int(0)
            ]
        );
    }

    #[test]
    fn multi_index_is_rejected() {
        let index = Index::Multi(vec![
            vec![Scalar::Int(0), Scalar::Int(1)],
            vec![Scalar::Int(1), Scalar::Int(2)],
        ]);
        let err = normalize_index(&index).unwrap_err();
        assert!(matches!(err, Nvd3Error::UnsupportedIndex(_)));
        assert_eq!(
            err.to_string(),
            "index cannot be a multi-level index: 2 levels over 2 entries"
        );
    }

    #[test]
    fn missing_values_are_dropped() {
        let series = LabeledSeries::new(
            None,
            Index::range(4),
            vec![Some(Scalar::Int(1)), None, Some(Scalar::Float(2.5)), None],
        )
        .unwrap();
        let points = normalize_series(&series).unwrap();
        assert_eq!(points.x(), &[Scalar::Int(0), Scalar::Int(2)]);
        assert_eq!(points.y(), &[Scalar::Int(1), Scalar::Float(2.5)]);
    }

    #[test]
    fn table_columns_filter_independently() {
        let table = Table::new(Index::range(3))
            .with_column("a", floats(&[1.0, f64::NAN, 3.0]))
            .unwrap()
            .with_column("b", floats(&[4.0, 5.0, 6.0]))
            .unwrap();
        let sets = normalize_table(&table).unwrap();
        assert_eq!(sets[0].len(), 2);
        assert_eq!(sets[1].len(), 3);
        assert_eq!(sets[1].x(), &[Scalar::Int(0), Scalar::Int(1), Scalar::Int(2)]);
    }

    #[test]
    fn dispatch_matches_input_shape() {
        let series = LabeledSeries::from_values(Some("s".to_string()), floats(&[1.0]));
        let single = normalize(&TabularData::Series(series)).unwrap();
        assert!(matches!(single, Normalized::Series(_)));
        assert_eq!(single.into_point_sets().len(), 1);

        let table = Table::new(Index::range(0));
        let many = normalize(&TabularData::Table(table)).unwrap();
        assert_eq!(many, Normalized::Table(Vec::new()));
    }
}
