//! Raw tabular input: labeled series and tables of named columns.

use indexmap::IndexMap;

use crate::{Index, Nvd3Error, Result, Scalar};

/// Column values; `None` marks a missing cell.
pub type Values = Vec<Option<Scalar>>;

/// A named sequence of values aligned with an [`Index`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    name: Option<String>,
    index: Index,
    values: Values,
}

impl LabeledSeries {
    /// Builds a series, rejecting an index whose length differs from the values.
    pub fn new(name: Option<String>, index: Index, values: Values) -> Result<Self> {
        check_length(name.as_deref().unwrap_or("series"), &index, values.len())?;
        Ok(Self {
            name,
            index,
            values,
        })
    }

    /// Builds a series over the positional index `0..values.len()`.
    pub fn from_values(name: Option<String>, values: Values) -> Self {
        Self {
            name,
            index: Index::range(values.len()),
            values,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn values(&self) -> &[Option<Scalar>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Named columns sharing one index, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    index: Index,
    columns: IndexMap<String, Values>,
}

impl Table {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            columns: IndexMap::new(),
        }
    }

    /// Adds a column. Re-using a name replaces that column in place.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Values) -> Result<()> {
        let name = name.into();
        check_length(&name, &self.index, values.len())?;
        self.columns.insert(name, values);
        Ok(())
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Values) -> Result<Self> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.index.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<Scalar>])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Copies one column out as a series named after the column.
    pub fn column(&self, name: &str) -> Option<LabeledSeries> {
        self.columns.get(name).map(|values| LabeledSeries {
            name: Some(name.to_string()),
            index: self.index.clone(),
            values: values.clone(),
        })
    }
}

/// Input accepted by the normalizer: a single series or a table of columns.
#[derive(Debug, Clone, PartialEq)]
pub enum TabularData {
    Series(LabeledSeries),
    Table(Table),
}

impl From<LabeledSeries> for TabularData {
    fn from(series: LabeledSeries) -> Self {
        Self::Series(series)
    }
}

impl From<Table> for TabularData {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

fn check_length(context: &str, index: &Index, actual: usize) -> Result<()> {
    if index.len() != actual {
        return Err(Nvd3Error::LengthMismatch {
            context: context.to_string(),
            expected: index.len(),
            actual,
        });
    }
    Ok(())
}
