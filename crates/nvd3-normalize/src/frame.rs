//! Polars adapter: builds series and tables from data frames.
//!
//! Numeric columns keep their integer/float identity. Datetime and date index
//! columns are converted to nanoseconds since epoch so that teardown can apply
//! a single unit conversion regardless of the frame's time unit.

use polars::prelude::{Column, DataFrame, DataType, PolarsError, TimeUnit};
use tracing::debug;

use nvd3_model::{Index, LabeledSeries, Nvd3Error, PointSet, Result, Scalar, Table, Values};

use crate::teardown::normalize_table;

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Builds a table from every column of `frame` except `index_column`.
///
/// When `index_column` is `None` the rows are labeled `0..height`.
pub fn table_from_frame(frame: &DataFrame, index_column: Option<&str>) -> Result<Table> {
    let index = match index_column {
        Some(name) => index_from_column(frame_column(frame, name)?)?,
        None => Index::range(frame.height()),
    };

    let mut table = Table::new(index);
    for column in frame.get_columns() {
        let name = column.name().as_str();
        if Some(name) == index_column {
            continue;
        }
        table.insert_column(name, values_from_column(column)?)?;
    }
    debug!(
        columns = table.width(),
        rows = table.height(),
        index = table.index().kind(),
        "built table from data frame"
    );
    Ok(table)
}

/// Builds a series named after `column`, labeled by `index` or positionally.
pub fn series_from_column(column: &Column, index: Option<&Column>) -> Result<LabeledSeries> {
    let index = match index {
        Some(index) => index_from_column(index)?,
        None => Index::range(column.len()),
    };
    LabeledSeries::new(
        Some(column.name().to_string()),
        index,
        values_from_column(column)?,
    )
}

/// Tears down every non-index column of a data frame.
pub fn normalize_frame(frame: &DataFrame, index_column: Option<&str>) -> Result<Vec<PointSet>> {
    normalize_table(&table_from_frame(frame, index_column)?)
}

/// Converts an index column. Null labels are rejected.
pub fn index_from_column(column: &Column) -> Result<Index> {
    let name = column.name().as_str();
    if column.null_count() > 0 {
        return Err(Nvd3Error::NullIndex(name.to_string()));
    }

    match column.dtype() {
        DataType::Datetime(unit, _) => {
            let factor = match unit {
                TimeUnit::Nanoseconds => 1,
                TimeUnit::Microseconds => 1_000,
                TimeUnit::Milliseconds => 1_000_000,
            };
            scale(name, physical_i64(column)?, factor).map(Index::Datetime)
        }
        DataType::Date => scale(name, physical_i64(column)?, NANOS_PER_DAY).map(Index::Datetime),
        _ => values_from_column(column)
            .map(|labels| Index::Flat(labels.into_iter().flatten().collect())),
    }
}

/// Converts a numeric column into values; nulls become missing cells.
pub fn values_from_column(column: &Column) -> Result<Values> {
    let dtype = column.dtype();
    if dtype.is_integer() {
        let cast = column.cast(&DataType::Int64).map_err(frame_error)?;
        let chunked = cast.i64().map_err(frame_error)?;
        Ok(chunked.into_iter().map(|v| v.map(Scalar::Int)).collect())
    } else if dtype.is_float() {
        let cast = column.cast(&DataType::Float64).map_err(frame_error)?;
        let chunked = cast.f64().map_err(frame_error)?;
        Ok(chunked.into_iter().map(|v| v.map(Scalar::Float)).collect())
    } else if matches!(dtype, DataType::Null) {
        Ok(vec![None; column.len()])
    } else {
        Err(Nvd3Error::UnsupportedDtype {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
        })
    }
}

fn frame_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column> {
    frame
        .column(name)
        .map_err(|_| Nvd3Error::ColumnNotFound(name.to_string()))
}

fn physical_i64(column: &Column) -> Result<Vec<i64>> {
    let cast = column.cast(&DataType::Int64).map_err(frame_error)?;
    let chunked = cast.i64().map_err(frame_error)?;
    Ok(chunked.into_iter().flatten().collect())
}

/// Scales raw temporal values to epoch nanoseconds.
///
/// Values outside the nanosecond range (1677-09-21 to 2262-04-11) are rejected.
fn scale(name: &str, values: Vec<i64>, factor: i64) -> Result<Vec<i64>> {
    values
        .into_iter()
        .map(|value| {
            value.checked_mul(factor).ok_or_else(|| {
                Nvd3Error::Frame(format!(
                    "index column '{name}' value {value} is outside the nanosecond timestamp range"
                ))
            })
        })
        .collect()
}

fn frame_error(err: PolarsError) -> Nvd3Error {
    Nvd3Error::Frame(err.to_string())
}
