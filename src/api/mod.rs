mod chart_config;
mod color;
mod initializer;
mod theme;

pub use chart_config::{
    CATEGORY_AXIS_ID, ChartConfig, ChartData, ChartOptions, ChartType, Dataset, GridOptions,
    LegendLabelOptions, LegendOptions, PluginOptions, ScaleOptions, TickOptions, VALUE_AXIS_ID,
};
pub use color::{ColorSpec, CssColor};
pub use initializer::{ChartInitializer, InitOutcome};
pub use theme::ChartTheme;
