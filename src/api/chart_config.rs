use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartTheme, ColorSpec, CssColor};

pub const VALUE_AXIS_ID: &str = "y";
pub const CATEGORY_AXIS_ID: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => f.write_str("bar"),
            Self::Line => f.write_str("line"),
        }
    }
}

/// Complete description of one chart: what to draw and how to style it.
///
/// The JSON form mirrors the configuration object of Chart.js-style
/// libraries, so a host page can hand `to_json_string()` straight to its
/// charting runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: default_border_width(),
        }
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: impl Into<ColorSpec>, width: f64) -> Self {
        self.border_color = Some(color.into());
        self.border_width = width;
        self
    }

    fn validate(&self, label_count: usize) -> ChartResult<()> {
        if self.data.len() != label_count {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` has {} values for {} labels",
                self.label,
                self.data.len(),
                label_count
            )));
        }
        if self.data.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` contains non-finite values",
                self.label
            )));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "border width must be finite and >= 0".to_owned(),
            ));
        }
        for spec in [&self.background_color, &self.border_color].into_iter().flatten() {
            if spec.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` has an empty colour list",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_responsive")]
    pub responsive: bool,
    #[serde(default)]
    pub scales: IndexMap<String, ScaleOptions>,
    #[serde(default)]
    pub plugins: PluginOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: default_responsive(),
            scales: IndexMap::new(),
            plugins: PluginOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub begin_at_zero: bool,
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(default)]
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default = "default_legend_display", skip_serializing_if = "is_true")]
    pub display: bool,
    #[serde(default)]
    pub labels: LegendLabelOptions,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: default_legend_display(),
            labels: LegendLabelOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendLabelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

impl ChartConfig {
    /// Creates a bar chart over `labels` with default options.
    #[must_use]
    pub fn bar(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            chart_type: ChartType::Bar,
            data: ChartData { labels, datasets },
            options: ChartOptions::default(),
        }
    }

    /// Sets whether the chart follows its container size.
    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.options.responsive = responsive;
        self
    }

    /// Anchors the value axis at zero.
    #[must_use]
    pub fn with_value_axis_from_zero(mut self) -> Self {
        self.scale_mut(VALUE_AXIS_ID).begin_at_zero = true;
        self
    }

    /// Applies grid, tick and legend colours of `theme` to both axes.
    #[must_use]
    pub fn with_theme(mut self, theme: &ChartTheme) -> Self {
        for axis in [VALUE_AXIS_ID, CATEGORY_AXIS_ID] {
            let scale = self.scale_mut(axis);
            scale.grid.color = Some(theme.grid_color.clone());
            scale.ticks.color = Some(theme.tick_color.clone());
        }
        self.options.plugins.legend.labels.color = Some(theme.legend_color.clone());
        self
    }

    #[must_use]
    pub fn value_axis(&self) -> Option<&ScaleOptions> {
        self.options.scales.get(VALUE_AXIS_ID)
    }

    #[must_use]
    pub fn category_axis(&self) -> Option<&ScaleOptions> {
        self.options.scales.get(CATEGORY_AXIS_ID)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data.datasets.is_empty() {
            return Err(ChartError::InvalidData(
                "chart needs at least one dataset".to_owned(),
            ));
        }
        let label_count = self.data.labels.len();
        for dataset in &self.data.datasets {
            dataset.validate(label_count)?;
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a JSON chart configuration.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn scale_mut(&mut self, axis: &str) -> &mut ScaleOptions {
        self.options.scales.entry(axis.to_owned()).or_default()
    }
}

fn default_border_width() -> f64 {
    0.0
}

fn default_responsive() -> bool {
    true
}

fn default_legend_display() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}
