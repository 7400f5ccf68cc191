//! Chart state: named series and axes, rendered into an NVD3 script.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nvd3_model::{Nvd3Error, PointSet, Result, Scalar, TabularData};
use nvd3_normalize::normalize;

use crate::axis::{Axis, AxisName};
use crate::script;
use crate::series::ChartSeries;

/// Element id used when none is given.
pub const DEFAULT_CHART_ID: &str = "chart";

/// NVD3 chart models this crate can configure.
/// See <https://github.com/novus/nvd3/tree/master/src/models>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "lineChart")]
    Line,
    #[serde(rename = "multiBarChart")]
    MultiBar,
    #[serde(rename = "discreteBarChart")]
    DiscreteBar,
    #[serde(rename = "stackedAreaChart")]
    StackedArea,
    #[serde(rename = "multiBarHorizontalChart")]
    MultiBarHorizontal,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::MultiBar,
        ChartKind::DiscreteBar,
        ChartKind::StackedArea,
        ChartKind::MultiBarHorizontal,
    ];

    /// Name of the `nv.models` constructor.
    pub fn model(self) -> &'static str {
        match self {
            Self::Line => "lineChart",
            Self::MultiBar => "multiBarChart",
            Self::DiscreteBar => "discreteBarChart",
            Self::StackedArea => "stackedAreaChart",
            Self::MultiBarHorizontal => "multiBarHorizontalChart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model())
    }
}

impl FromStr for ChartKind {
    type Err = Nvd3Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.model() == s)
            .ok_or_else(|| Nvd3Error::Configuration(format!("unknown NVD3 model '{s}'")))
    }
}

/// Series and axes of one chart, keyed by name in insertion order.
///
/// Adding a series or axis under an existing name replaces it without moving
/// it. Rendering never mutates the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    chart_id: String,
    series: IndexMap<String, ChartSeries>,
    axes: IndexMap<AxisName, Axis>,
}

impl Chart {
    pub fn new(kind: ChartKind, chart_id: impl Into<String>) -> Self {
        Self {
            kind,
            chart_id: chart_id.into(),
            series: IndexMap::new(),
            axes: IndexMap::new(),
        }
    }

    pub fn builder() -> ChartBuilder {
        ChartBuilder::default()
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn model(&self) -> &'static str {
        self.kind.model()
    }

    pub fn chart_id(&self) -> &str {
        &self.chart_id
    }

    pub fn add_axis(&mut self, axis: Axis) {
        self.axes.insert(axis.name().clone(), axis);
    }

    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    /// Adds a series and returns its key.
    ///
    /// Without a name the key is `Series{N}`, N being the series count after
    /// this one is added. The count is the only input, so an auto name can
    /// collide with (and replace) an existing series.
    pub fn add_series<X, Y>(&mut self, name: Option<&str>, x: X, y: Y) -> String
    where
        X: IntoIterator,
        X::Item: Into<Scalar>,
        Y: IntoIterator,
        Y::Item: Into<Scalar>,
    {
        let key = name.map_or_else(|| self.next_series_name(), str::to_string);
        let series = ChartSeries::new(
            key.clone(),
            x.into_iter().map(Into::into).collect(),
            y.into_iter().map(Into::into).collect(),
        );
        self.insert_series(series);
        key
    }

    /// Inserts a fully built series under its own key.
    pub fn insert_series(&mut self, series: ChartSeries) {
        let key = series.key.clone();
        if self.series.insert(key.clone(), series).is_some() {
            warn!(chart = %self.chart_id, series = %key, "replaced existing series");
        }
    }

    /// Adds a normalized point set, keyed by its name or an auto name.
    pub fn add_point_set(&mut self, points: PointSet) -> String {
        let key = points
            .name()
            .map_or_else(|| self.next_series_name(), str::to_string);
        self.insert_series(ChartSeries::from_point_set(key.clone(), points));
        key
    }

    pub fn add_point_sets(&mut self, sets: impl IntoIterator<Item = PointSet>) -> Vec<String> {
        sets.into_iter()
            .map(|points| self.add_point_set(points))
            .collect()
    }

    /// Normalizes a series or table and adds the resulting point sets.
    pub fn add_data(&mut self, data: &TabularData) -> Result<Vec<String>> {
        let sets = normalize(data)?.into_point_sets();
        Ok(self.add_point_sets(sets))
    }

    /// Sets the stroke/fill color of an existing series.
    pub fn set_color(&mut self, key: &str, color: impl Into<String>) -> Result<()> {
        let series = self
            .series
            .get_mut(key)
            .ok_or_else(|| Nvd3Error::Configuration(format!("no series named '{key}'")))?;
        series.color = Some(color.into());
        Ok(())
    }

    pub fn get_series(&self, key: &str) -> Option<&ChartSeries> {
        self.series.get(key)
    }

    pub fn series(&self) -> impl Iterator<Item = &ChartSeries> {
        self.series.values()
    }

    pub fn series_keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// The `<script>` block that builds the chart.
    pub fn javascript(&self) -> Result<String> {
        debug!(
            chart = %self.chart_id,
            model = self.model(),
            series = self.series.len(),
            axes = self.axes.len(),
            "rendering chart script"
        );
        script::javascript(self)
    }

    /// The element the script attaches to.
    pub fn html(&self) -> String {
        script::html(&self.chart_id)
    }

    /// HTML element followed by the script.
    pub fn render(&self) -> Result<String> {
        Ok(format!("{}\n{}", self.html(), self.javascript()?))
    }

    fn next_series_name(&self) -> String {
        format!("Series{}", self.series.len() + 1)
    }
}

/// Builder for [`Chart`]; the chart kind is required.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    chart_id: Option<String>,
    kind: Option<ChartKind>,
    axes: Vec<Axis>,
}

impl ChartBuilder {
    #[must_use]
    pub fn id(mut self, chart_id: impl Into<String>) -> Self {
        self.chart_id = Some(chart_id.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// # Errors
    ///
    /// Returns [`Nvd3Error::Configuration`] when no chart kind was set.
    pub fn build(self) -> Result<Chart> {
        let kind = self
            .kind
            .ok_or_else(|| Nvd3Error::Configuration("NVD3 model type not defined".to_string()))?;
        let mut chart = Chart::new(
            kind,
            self.chart_id
                .unwrap_or_else(|| DEFAULT_CHART_ID.to_string()),
        );
        for axis in self.axes {
            chart.add_axis(axis);
        }
        Ok(chart)
    }
}
