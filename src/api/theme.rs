use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::CssColor;

const DARK_GRID_COLOR: &str = "#444";
const DARK_TICK_COLOR: &str = "#ddd";
const DARK_LEGEND_COLOR: &str = "white";
const DARK_BORDER_COLOR: &str = "rgba(255,255,255,0.8)";
const DARK_BORDER_WIDTH: f64 = 1.0;

/// Shared styling for axes, legend and bar borders.
///
/// Serializable so a host can ship a theme override next to its page
/// instead of rebuilding the crate. Fields missing from the JSON keep their
/// dark theme value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartThemeOverrides")]
pub struct ChartTheme {
    pub grid_color: CssColor,
    pub tick_color: CssColor,
    pub legend_color: CssColor,
    pub border_color: CssColor,
    pub border_width: f64,
}

impl ChartTheme {
    /// Dark dashboard theme: grey grid, light ticks, white legend text.
    pub fn dark() -> ChartResult<Self> {
        Ok(Self {
            grid_color: CssColor::parse(DARK_GRID_COLOR)?,
            tick_color: CssColor::parse(DARK_TICK_COLOR)?,
            legend_color: CssColor::parse(DARK_LEGEND_COLOR)?,
            border_color: CssColor::parse(DARK_BORDER_COLOR)?,
            border_width: DARK_BORDER_WIDTH,
        })
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Deserialize)]
struct ChartThemeOverrides {
    grid_color: Option<CssColor>,
    tick_color: Option<CssColor>,
    legend_color: Option<CssColor>,
    border_color: Option<CssColor>,
    border_width: Option<f64>,
}

impl TryFrom<ChartThemeOverrides> for ChartTheme {
    type Error = ChartError;

    fn try_from(overrides: ChartThemeOverrides) -> ChartResult<Self> {
        let dark = Self::dark()?;
        Ok(Self {
            grid_color: overrides.grid_color.unwrap_or(dark.grid_color),
            tick_color: overrides.tick_color.unwrap_or(dark.tick_color),
            legend_color: overrides.legend_color.unwrap_or(dark.legend_color),
            border_color: overrides.border_color.unwrap_or(dark.border_color),
            border_width: overrides.border_width.unwrap_or(dark.border_width),
        })
    }
}
