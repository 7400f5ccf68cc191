//! NVD3 chart state and script rendering.
//!
//! - **axis**: validated axis names and option-to-JavaScript conversion
//! - **chart**: series/axis registry, builder and rendering entry points
//! - **models**: one typed chart per NVD3 model
//! - **config**: JSON chart configuration
//! - **script**: the `<script>` and element templates

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod models;
pub mod script;
pub mod series;

pub use axis::{Axis, AxisName, is_date_format};
pub use chart::{Chart, ChartBuilder, ChartKind, DEFAULT_CHART_ID};
pub use color::Color;
pub use config::{AxisConfig, ChartConfig};
pub use models::{
    ChartModel, DiscreteBarChart, LineChart, MultiBarChart, MultiBarHorizontalChart,
    StackedAreaChart,
};
pub use script::data_literal;
pub use series::ChartSeries;
