//! Shape inspection of untyped JSON input.
//!
//! Accepted shapes:
//!
//! - series: `{"name": "price", "index": [...], "values": [...]}`
//! - table: `{"index": [...], "columns": {"a": [...], "b": [...]}}`
//!
//! `index` is optional (positional when absent) and may be a plain array,
//! `{"datetime": [ns, ...]}` or `{"multi": [[...], ...]}`. Cells may be
//! numbers, `null` (missing) or one of the strings `"NaN"`, `"Infinity"`,
//! `"-Infinity"`.

use serde_json::{Map, Number, Value};

use nvd3_model::{Index, LabeledSeries, Nvd3Error, Result, Scalar, Table, TabularData, Values};

use crate::teardown::{Normalized, normalize};

/// Parses JSON text and inspects its shape.
pub fn tabular_from_json_str(text: &str) -> Result<TabularData> {
    let value: Value = serde_json::from_str(text)?;
    tabular_from_json(&value)
}

/// Classifies a JSON value as a series or a table.
///
/// # Errors
///
/// Returns [`Nvd3Error::UnrecognizedInput`] when the value matches neither
/// shape or holds non-numeric cells.
pub fn tabular_from_json(value: &Value) -> Result<TabularData> {
    let Value::Object(object) = value else {
        return Err(unrecognized(format!(
            "expected an object, found {}",
            json_type(value)
        )));
    };

    match (object.get("values"), object.get("columns")) {
        (Some(_), Some(_)) => Err(unrecognized(
            "object has both 'values' and 'columns'".to_string(),
        )),
        (Some(values), None) => series_from_object(object, values).map(TabularData::Series),
        (None, Some(columns)) => table_from_object(object, columns).map(TabularData::Table),
        (None, None) => Err(unrecognized(
            "object has neither 'values' nor 'columns'".to_string(),
        )),
    }
}

/// Inspects and normalizes a JSON value in one step.
pub fn normalize_json(value: &Value) -> Result<Normalized> {
    normalize(&tabular_from_json(value)?)
}

fn series_from_object(object: &Map<String, Value>, values: &Value) -> Result<LabeledSeries> {
    let name = match object.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(unrecognized(format!(
                "series name must be a string, found {}",
                json_type(other)
            )));
        }
    };
    let values = parse_values(values, name.as_deref().unwrap_or("values"))?;
    let index = parse_index(object.get("index"), values.len())?;
    LabeledSeries::new(name, index, values)
}

fn table_from_object(object: &Map<String, Value>, columns: &Value) -> Result<Table> {
    let Value::Object(columns) = columns else {
        return Err(unrecognized(format!(
            "'columns' must be an object, found {}",
            json_type(columns)
        )));
    };

    let mut parsed = Vec::with_capacity(columns.len());
    for (name, values) in columns {
        parsed.push((name.as_str(), parse_values(values, name)?));
    }
    let height = parsed.first().map_or(0, |(_, values)| values.len());
    let mut table = Table::new(parse_index(object.get("index"), height)?);
    for (name, values) in parsed {
        table.insert_column(name, values)?;
    }
    Ok(table)
}

fn parse_index(index: Option<&Value>, len: usize) -> Result<Index> {
    let Some(index) = index else {
        return Ok(Index::range(len));
    };
    match index {
        Value::Null => Ok(Index::range(len)),
        Value::Array(labels) => labels
            .iter()
            .map(|label| parse_label(label, "index"))
            .collect::<Result<Vec<_>>>()
            .map(Index::Flat),
        Value::Object(object) => {
            if let Some(nanos) = object.get("datetime") {
                parse_datetime(nanos).map(Index::Datetime)
            } else if let Some(tuples) = object.get("multi") {
                parse_multi(tuples).map(Index::Multi)
            } else {
                Err(unrecognized(
                    "index object must have a 'datetime' or 'multi' key".to_string(),
                ))
            }
        }
        other => Err(unrecognized(format!(
            "index must be an array or object, found {}",
            json_type(other)
        ))),
    }
}

fn parse_datetime(value: &Value) -> Result<Vec<i64>> {
    let Value::Array(items) = value else {
        return Err(unrecognized("'datetime' index must be an array".to_string()));
    };
    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                unrecognized(format!(
                    "datetime index entries must be integer nanoseconds, found {item}"
                ))
            })
        })
        .collect()
}

fn parse_multi(value: &Value) -> Result<Vec<Vec<Scalar>>> {
    let Value::Array(tuples) = value else {
        return Err(unrecognized("'multi' index must be an array".to_string()));
    };
    tuples
        .iter()
        .map(|tuple| match tuple {
            Value::Array(parts) => parts
                .iter()
                .map(|part| parse_label(part, "multi index"))
                .collect::<Result<Vec<_>>>(),
            other => Err(unrecognized(format!(
                "multi index entries must be arrays, found {}",
                json_type(other)
            ))),
        })
        .collect()
}

fn parse_values(value: &Value, context: &str) -> Result<Values> {
    let Value::Array(cells) = value else {
        return Err(unrecognized(format!(
            "'{context}' must be an array, found {}",
            json_type(value)
        )));
    };
    cells
        .iter()
        .map(|cell| match cell {
            Value::Null => Ok(None),
            other => parse_cell(other, context).map(Some),
        })
        .collect()
}

fn parse_label(value: &Value, context: &str) -> Result<Scalar> {
    match value {
        Value::Number(number) => Ok(number_to_scalar(number)),
        other => Err(unrecognized(format!(
            "{context} labels must be numbers, found {}",
            json_type(other)
        ))),
    }
}

fn parse_cell(value: &Value, context: &str) -> Result<Scalar> {
    match value {
        Value::Number(number) => Ok(number_to_scalar(number)),
        Value::String(text) => match text.as_str() {
            "NaN" => Ok(Scalar::Float(f64::NAN)),
            "Infinity" => Ok(Scalar::Float(f64::INFINITY)),
            "-Infinity" => Ok(Scalar::Float(f64::NEG_INFINITY)),
            _ => Err(unrecognized(format!(
                "'{context}' holds non-numeric value \"{text}\""
            ))),
        },
        other => Err(unrecognized(format!(
            "'{context}' holds non-numeric value of type {}",
            json_type(other)
        ))),
    }
}

fn number_to_scalar(number: &Number) -> Scalar {
    match number.as_i64() {
        Some(v) => Scalar::Int(v),
        None => Scalar::Float(number.as_f64().unwrap_or(f64::NAN)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unrecognized(message: String) -> Nvd3Error {
    Nvd3Error::UnrecognizedInput(message)
}
