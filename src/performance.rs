//! Classifier accuracy chart shown on the dashboard page.
//!
//! The numbers are placeholder demo values, not measurements.

use crate::api::{ChartConfig, ChartTheme, CssColor, Dataset};
use crate::error::ChartResult;

/// Id of the canvas that hosts the accuracy chart.
pub const PERFORMANCE_CHART_ID: &str = "performanceChart";

pub const DATASET_LABEL: &str = "Accuracy";

pub const CLASSIFIERS: [&str; 5] = [
    "Logistic Regression",
    "SVM",
    "Random Forest",
    "XGBoost",
    "Ensemble",
];

/// Placeholder accuracy per classifier, aligned with `CLASSIFIERS`.
pub const PLACEHOLDER_ACCURACY: [f64; 5] = [0.85, 0.88, 0.92, 0.91, 0.94];

/// Bar fill per classifier, aligned with `CLASSIFIERS`.
pub const CLASSIFIER_FILLS: [&str; 5] = [
    "rgba(231, 76, 60, 0.7)",
    "rgba(52, 152, 219, 0.7)",
    "rgba(46, 204, 113, 0.7)",
    "rgba(155, 89, 182, 0.7)",
    "rgba(241, 196, 15, 0.7)",
];

/// Bar chart of `PLACEHOLDER_ACCURACY` in the dark dashboard theme.
pub fn performance_chart_config() -> ChartResult<ChartConfig> {
    performance_chart_config_with_theme(&ChartTheme::dark()?)
}

pub fn performance_chart_config_with_theme(theme: &ChartTheme) -> ChartResult<ChartConfig> {
    let fills = CLASSIFIER_FILLS
        .iter()
        .map(|fill| CssColor::parse(*fill))
        .collect::<ChartResult<Vec<_>>>()?;

    let dataset = Dataset::new(DATASET_LABEL, PLACEHOLDER_ACCURACY.to_vec())
        .with_background_color(fills)
        .with_border(theme.border_color.clone(), theme.border_width);

    Ok(ChartConfig::bar(
        CLASSIFIERS.iter().map(|name| (*name).to_owned()).collect(),
        vec![dataset],
    )
    .with_responsive(true)
    .with_value_axis_from_zero()
    .with_theme(theme))
}
