//! Turn labeled series and tables into NVD3 chart scripts.
//!
//! Data flows one way: tabular input is normalized into `{name, x, y}` point
//! sets, the point sets become chart series, and the chart renders an HTML
//! element plus the `<script>` that draws into it.
//!
//! ```ignore
//! use nvd3::{Axis, ChartModel, LineChart, TabularData, Table, Index};
//!
//! let mut chart = LineChart::new("prices");
//! chart.chart_mut().add_data(&TabularData::from(table))?;
//! chart.add_axis(Axis::new("xAxis")?.with_tick_format("%Y-%m-%d"));
//! let html = chart.render()?;
//! ```

pub mod logging;

pub use nvd3_chart::{
    Axis, AxisConfig, AxisName, Chart, ChartBuilder, ChartConfig, ChartKind, ChartModel,
    ChartSeries, Color, DEFAULT_CHART_ID, DiscreteBarChart, LineChart, MultiBarChart,
    MultiBarHorizontalChart, StackedAreaChart, data_literal, is_date_format,
};
pub use nvd3_model::{
    Index, LabeledSeries, NANOS_PER_MILLI, Nvd3Error, PointSet, Result, Scalar, Table,
    TabularData, Values,
};
pub use nvd3_normalize::{
    Normalized, index_from_column, normalize, normalize_frame, normalize_index, normalize_json,
    normalize_series, normalize_table, series_from_column, table_from_frame, tabular_from_json,
    tabular_from_json_str, values_from_column,
};

/// Builds a chart from its JSON configuration and fills it with `data`.
///
/// # Errors
///
/// Fails on malformed configuration or data that cannot be normalized.
pub fn chart_from_config(config: &str, data: &TabularData) -> Result<Chart> {
    let mut chart = ChartConfig::from_json_str(config)?.build()?;
    chart.add_data(data)?;
    Ok(chart)
}
