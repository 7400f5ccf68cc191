//! One chart type per NVD3 model.
//!
//! Each type wraps a [`Chart`] with its kind fixed at compile time. Visit the
//! NVD3 example page <http://nvd3.org/examples/> for what the models draw.

use nvd3_model::{Result, Scalar};

use crate::axis::Axis;
use crate::chart::{Chart, ChartKind, DEFAULT_CHART_ID};

/// Shared behavior of the typed chart models.
pub trait ChartModel {
    const KIND: ChartKind;

    fn chart(&self) -> &Chart;

    fn chart_mut(&mut self) -> &mut Chart;

    fn model(&self) -> &'static str {
        Self::KIND.model()
    }

    fn add_axis(&mut self, axis: Axis) {
        self.chart_mut().add_axis(axis);
    }

    fn add_series<X, Y>(&mut self, name: Option<&str>, x: X, y: Y) -> String
    where
        X: IntoIterator,
        X::Item: Into<Scalar>,
        Y: IntoIterator,
        Y::Item: Into<Scalar>,
    {
        self.chart_mut().add_series(name, x, y)
    }

    fn javascript(&self) -> Result<String> {
        self.chart().javascript()
    }

    fn html(&self) -> String {
        self.chart().html()
    }

    fn render(&self) -> Result<String> {
        self.chart().render()
    }
}

macro_rules! chart_model {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Chart);

        impl $name {
            pub fn new(chart_id: impl Into<String>) -> Self {
                Self(Chart::new($kind, chart_id))
            }

            pub fn into_chart(self) -> Chart {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(DEFAULT_CHART_ID)
            }
        }

        impl ChartModel for $name {
            const KIND: ChartKind = $kind;

            fn chart(&self) -> &Chart {
                &self.0
            }

            fn chart_mut(&mut self) -> &mut Chart {
                &mut self.0
            }
        }

        impl From<$name> for Chart {
            fn from(model: $name) -> Self {
                model.0
            }
        }
    };
}

chart_model!(
    /// `nv.models.lineChart`
    LineChart => ChartKind::Line
);
chart_model!(
    /// `nv.models.multiBarChart`
    MultiBarChart => ChartKind::MultiBar
);
chart_model!(
    /// `nv.models.discreteBarChart`
    DiscreteBarChart => ChartKind::DiscreteBar
);
chart_model!(
    /// `nv.models.stackedAreaChart`
    StackedAreaChart => ChartKind::StackedArea
);
chart_model!(
    /// `nv.models.multiBarHorizontalChart`
    MultiBarHorizontalChart => ChartKind::MultiBarHorizontal
);
