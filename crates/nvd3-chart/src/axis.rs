//! Axis configuration for NVD3 charts.
//!
//! An [`Axis`] only records options that differ from NVD3's defaults, and
//! [`Axis::to_config`] turns them into JavaScript expressions ready to be
//! chained onto `chart.<axisName>`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use nvd3_model::{Nvd3Error, Result};

static AXIS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[xy][0-2]?Axis$").expect("Invalid axis name regex"));

/// d3 time-format directives, e.g. `%Y`, `%b`, `%H`.
/// See <https://github.com/mbostock/d3/wiki/Time-Formatting>.
static DATE_FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%[aAbBcdeHIjmMLpSUwWxXyYZ]").expect("Invalid date format regex")
});

/// Validated axis accessor name such as `xAxis` or `y2Axis`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisName(String);

impl AxisName {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !AXIS_NAME_REGEX.is_match(&value) {
            return Err(Nvd3Error::InvalidAxisName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AxisName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true when a tick format starts with a d3 time directive.
///
/// Only the start of the string is checked: `%Y-%m` is a date format,
/// `,.0f` and `.0%` are not, and neither is `%z`.
pub fn is_date_format(tick_format: &str) -> bool {
    DATE_FORMAT_REGEX.is_match(tick_format)
}

/// Axis of an NVD3 chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: AxisName,
    /// Text shown along the axis, e.g. "distance (km)".
    pub label: Option<String>,
    /// Stagger tick labels, useful when they are too wide.
    pub stagger_labels: bool,
    /// Degrees clockwise to rotate tick labels.
    pub rotate_labels: i32,
    /// Always draw ticks at the smallest and largest values.
    pub show_max_min: bool,
    /// d3 format specifier for tick labels.
    pub tick_format: Option<String>,
}

impl Axis {
    /// Creates an axis with NVD3's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Nvd3Error::InvalidAxisName`] unless `name` matches
    /// `^[xy][0-2]?Axis$`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self::from_name(AxisName::new(name)?))
    }

    pub fn from_name(name: AxisName) -> Self {
        Self {
            name,
            label: None,
            stagger_labels: false,
            rotate_labels: 0,
            show_max_min: true,
            tick_format: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_stagger_labels(mut self, enable: bool) -> Self {
        self.stagger_labels = enable;
        self
    }

    #[must_use]
    pub fn with_rotate_labels(mut self, degrees: i32) -> Self {
        self.rotate_labels = degrees;
        self
    }

    #[must_use]
    pub fn with_show_max_min(mut self, enable: bool) -> Self {
        self.show_max_min = enable;
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, format: impl Into<String>) -> Self {
        self.tick_format = Some(format.into());
        self
    }

    pub fn name(&self) -> &AxisName {
        &self.name
    }

    /// Option name to JavaScript expression, non-default options only.
    pub fn to_config(&self) -> IndexMap<&'static str, String> {
        let mut config = IndexMap::new();

        if !self.show_max_min {
            config.insert("showMaxMin", "false".to_string());
        }
        if let Some(label) = &self.label {
            config.insert("axisLabel", js_string(label));
        }
        if self.stagger_labels {
            config.insert("staggerLabels", "true".to_string());
        }
        if self.rotate_labels != 0 {
            config.insert("rotateLabels", self.rotate_labels.to_string());
        }
        if let Some(format) = &self.tick_format {
            let literal = js_string(format);
            let expression = if is_date_format(format) {
                format!("function(d) {{ return d3.time.format({literal})(new Date(d)); }}")
            } else {
                format!("d3.format({literal})")
            };
            config.insert("tickFormat", expression);
        }
        config
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_config())?)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Axis: {}>", self.name)
    }
}

/// Quotes a string as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
