use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Share of a category band covered by the group of bars.
pub const CATEGORY_PERCENTAGE: f64 = 0.8;
/// Share of the group width covered by one bar.
pub const BAR_PERCENTAGE: f64 = 0.9;

/// Equal-width bands laid out left to right across a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    start_px: f64,
    end_px: f64,
}

impl BandScale {
    pub fn new(count: usize, start_px: f64, end_px: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !start_px.is_finite() || !end_px.is_finite() || end_px <= start_px {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ascending".to_owned(),
            ));
        }
        Ok(Self {
            count,
            start_px,
            end_px,
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn band_width(self) -> f64 {
        (self.end_px - self.start_px) / self.count as f64
    }

    /// Left edge of band `index`; `index == count` yields the right edge.
    #[must_use]
    pub fn band_start(self, index: usize) -> f64 {
        self.start_px + index as f64 * self.band_width()
    }

    #[must_use]
    pub fn band_center(self, index: usize) -> f64 {
        self.band_start(index) + self.band_width() * 0.5
    }
}

/// Pixel geometry for one category bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub index: usize,
    pub value: f64,
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl CategoryBar {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Projects one value per category into vertical bars.
///
/// With several datasets each category band is split into `dataset_count`
/// equal slots and this dataset occupies slot `dataset_index`. Bars grow from
/// zero when zero is inside the value domain, otherwise from the domain edge
/// nearest to zero.
pub fn project_category_bars(
    values: &[f64],
    value_scale: LinearScale,
    plot: PlotArea,
    dataset_index: usize,
    dataset_count: usize,
) -> ChartResult<Vec<CategoryBar>> {
    if dataset_index >= dataset_count {
        return Err(ChartError::InvalidData(format!(
            "dataset index {dataset_index} out of range for {dataset_count} datasets"
        )));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let bands = BandScale::new(values.len(), plot.left, plot.right())?;
    let group_width = bands.band_width() * CATEGORY_PERCENTAGE;
    let slot_width = group_width / dataset_count as f64;
    let half_width = slot_width * BAR_PERCENTAGE * 0.5;
    let slot_offset = (bands.band_width() - group_width) * 0.5 + slot_width * (dataset_index as f64 + 0.5);
    let baseline_y = value_scale.domain_to_pixel(value_scale.clamp(0.0), plot.bottom(), plot.top)?;

    let mut bars = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        let x_center = bands.band_start(index) + slot_offset;
        let y_value = value_scale.domain_to_pixel(value_scale.clamp(value), plot.bottom(), plot.top)?;
        bars.push(CategoryBar {
            index,
            value,
            x_center,
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }

    Ok(bars)
}
