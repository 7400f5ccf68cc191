//! Declarative chart configuration.
//!
//! ```json
//! {
//!   "id": "prices",
//!   "kind": "lineChart",
//!   "axes": [{ "name": "xAxis", "label": "date", "tickFormat": "%Y-%m-%d" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use nvd3_model::{Nvd3Error, Result};

use crate::axis::Axis;
use crate::chart::{Chart, ChartKind, DEFAULT_CHART_ID};

/// Chart settings read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartConfig {
    /// Element id; `"chart"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// NVD3 model name. Required to build a chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,

    #[serde(default)]
    pub axes: Vec<AxisConfig>,
}

/// Axis settings. Missing options take NVD3's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AxisConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub stagger_labels: bool,

    #[serde(default)]
    pub rotate_labels: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_max_min: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
}

impl AxisConfig {
    /// # Errors
    ///
    /// Returns [`Nvd3Error::InvalidAxisName`] for an unknown axis name.
    pub fn to_axis(&self) -> Result<Axis> {
        let mut axis = Axis::new(self.name.as_str())?
            .with_stagger_labels(self.stagger_labels)
            .with_rotate_labels(self.rotate_labels)
            .with_show_max_min(self.show_max_min.unwrap_or(true));
        axis.label.clone_from(&self.label);
        axis.tick_format.clone_from(&self.tick_format);
        Ok(axis)
    }
}

impl ChartConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Builds an empty chart with the configured axes.
    ///
    /// # Errors
    ///
    /// Returns [`Nvd3Error::Configuration`] without a `kind` and
    /// [`Nvd3Error::InvalidAxisName`] for a bad axis name.
    pub fn build(&self) -> Result<Chart> {
        let kind = self
            .kind
            .ok_or_else(|| Nvd3Error::Configuration("NVD3 model type not defined".to_string()))?;
        let mut builder = Chart::builder()
            .kind(kind)
            .id(self.id.as_deref().unwrap_or(DEFAULT_CHART_ID));
        for axis in &self.axes {
            builder = builder.axis(axis.to_axis()?);
        }
        let chart = builder.build()?;
        debug!(
            chart = chart.chart_id(),
            model = chart.model(),
            axes = self.axes.len(),
            "built chart from configuration"
        );
        Ok(chart)
    }
}
