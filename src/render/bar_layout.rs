use tracing::trace;

use crate::api::{ChartConfig, ChartType, ColorSpec, CssColor, Dataset};
use crate::core::{
    BandScale, LinearScale, PlotArea, Viewport, nice_ticks, project_category_bars, value_extent,
    value_tick_target_count,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const DEFAULT_ELEMENT_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
const DEFAULT_TEXT_COLOR: Color = Color::rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0);

/// Fixed spacing used when laying out a bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayoutMetrics {
    pub padding_px: f64,
    pub font_size_px: f64,
    pub legend_height_px: f64,
    pub legend_swatch_width_px: f64,
    pub legend_swatch_height_px: f64,
    pub value_axis_width_px: f64,
    pub category_axis_height_px: f64,
    pub label_gap_px: f64,
    pub grid_line_width_px: f64,
}

impl Default for BarLayoutMetrics {
    fn default() -> Self {
        Self {
            padding_px: 10.0,
            font_size_px: 12.0,
            legend_height_px: 32.0,
            legend_swatch_width_px: 40.0,
            legend_swatch_height_px: 12.0,
            value_axis_width_px: 48.0,
            category_axis_height_px: 24.0,
            label_gap_px: 6.0,
            grid_line_width_px: 1.0,
        }
    }
}

/// Lays out `config` as a vertical bar chart filling `viewport`.
pub fn build_bar_frame(config: &ChartConfig, viewport: Viewport) -> ChartResult<RenderFrame> {
    build_bar_frame_with_metrics(config, viewport, BarLayoutMetrics::default())
}

pub fn build_bar_frame_with_metrics(
    config: &ChartConfig,
    viewport: Viewport,
    metrics: BarLayoutMetrics,
) -> ChartResult<RenderFrame> {
    if config.chart_type != ChartType::Bar {
        return Err(ChartError::UnsupportedChartType(config.chart_type));
    }
    config.validate()?;
    viewport.validate()?;

    let datasets = &config.data.datasets;
    let legend_visible = config.options.plugins.legend.display;
    let plot = resolve_plot_area(viewport, metrics, legend_visible)?;

    let value_axis = config.value_axis();
    let begin_at_zero = value_axis.is_some_and(|axis| axis.begin_at_zero);
    let all_values = datasets
        .iter()
        .flat_map(|dataset| dataset.data.iter().copied())
        .collect::<Vec<_>>();
    let (min, max) = value_extent(&all_values, begin_at_zero)?;
    let ticks = nice_ticks(min, max, value_tick_target_count(plot.height))?;
    let value_scale = LinearScale::new(ticks.min, ticks.max)?;

    let value_grid = axis_color(value_axis.and_then(|axis| axis.grid.color.as_ref()), DEFAULT_ELEMENT_COLOR);
    let value_ticks = axis_color(value_axis.and_then(|axis| axis.ticks.color.as_ref()), DEFAULT_TEXT_COLOR);
    let category_axis = config.category_axis();
    let category_grid =
        axis_color(category_axis.and_then(|axis| axis.grid.color.as_ref()), DEFAULT_ELEMENT_COLOR);
    let category_ticks =
        axis_color(category_axis.and_then(|axis| axis.ticks.color.as_ref()), DEFAULT_TEXT_COLOR);
    let legend_color = axis_color(
        config.options.plugins.legend.labels.color.as_ref(),
        DEFAULT_TEXT_COLOR,
    );

    let mut frame = RenderFrame::new(viewport);

    for tick in &ticks.values {
        let y = value_scale.domain_to_pixel(*tick, plot.bottom(), plot.top)?;
        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            metrics.grid_line_width_px,
            value_grid,
        ));
        frame.texts.push(TextPrimitive::new(
            ticks.label(*tick),
            plot.left - metrics.label_gap_px,
            y - metrics.font_size_px * 0.5,
            metrics.font_size_px,
            value_ticks,
            TextHAlign::Right,
        ));
    }

    let labels = &config.data.labels;
    if !labels.is_empty() {
        let bands = BandScale::new(labels.len(), plot.left, plot.right())?;
        for boundary in 0..=bands.count() {
            let x = bands.band_start(boundary);
            frame.lines.push(LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                metrics.grid_line_width_px,
                category_grid,
            ));
        }
        for (index, label) in labels.iter().enumerate().filter(|(_, label)| !label.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                bands.band_center(index),
                plot.bottom() + metrics.label_gap_px,
                metrics.font_size_px,
                category_ticks,
                TextHAlign::Center,
            ));
        }
    }

    for (dataset_index, dataset) in datasets.iter().enumerate() {
        let bars =
            project_category_bars(&dataset.data, value_scale, plot, dataset_index, datasets.len())?;
        for bar in bars {
            let (fill, border) = dataset_colors(dataset, bar.index);
            frame.rects.push(
                RectPrimitive::new(bar.x_left, bar.y_top, bar.width(), bar.height(), fill)
                    .with_border(border, dataset.border_width),
            );
        }
    }

    if legend_visible {
        push_legend(&mut frame, datasets, viewport, metrics, legend_color);
    }

    trace!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        tick_step = ticks.step,
        "built bar frame"
    );
    Ok(frame)
}

fn resolve_plot_area(
    viewport: Viewport,
    metrics: BarLayoutMetrics,
    legend_visible: bool,
) -> ChartResult<PlotArea> {
    let legend_height = if legend_visible {
        metrics.legend_height_px
    } else {
        0.0
    };
    let left = metrics.padding_px + metrics.value_axis_width_px;
    let top = metrics.padding_px + legend_height;
    let width = f64::from(viewport.width) - left - metrics.padding_px;
    let height = f64::from(viewport.height) - top - metrics.padding_px - metrics.category_axis_height_px;

    if width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    PlotArea::new(left, top, width, height)
}

fn push_legend(
    frame: &mut RenderFrame,
    datasets: &[Dataset],
    viewport: Viewport,
    metrics: BarLayoutMetrics,
    text_color: Color,
) {
    let item_widths = datasets
        .iter()
        .map(|dataset| {
            metrics.legend_swatch_width_px
                + metrics.label_gap_px
                + estimate_text_width(&dataset.label, metrics.font_size_px)
        })
        .collect::<Vec<_>>();
    let total_width = item_widths.iter().sum::<f64>()
        + metrics.label_gap_px * 2.0 * item_widths.len().saturating_sub(1) as f64;

    let mut x = ((f64::from(viewport.width) - total_width) * 0.5).max(metrics.padding_px);
    let swatch_y = metrics.padding_px + (metrics.legend_height_px - metrics.legend_swatch_height_px) * 0.5;
    let text_y = metrics.padding_px + (metrics.legend_height_px - metrics.font_size_px) * 0.5;

    for (dataset, width) in datasets.iter().zip(item_widths) {
        let (fill, border) = dataset_colors(dataset, 0);
        frame.rects.push(
            RectPrimitive::new(
                x,
                swatch_y,
                metrics.legend_swatch_width_px,
                metrics.legend_swatch_height_px,
                fill,
            )
            .with_border(border, dataset.border_width),
        );
        if !dataset.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                dataset.label.clone(),
                x + metrics.legend_swatch_width_px + metrics.label_gap_px,
                text_y,
                metrics.font_size_px,
                text_color,
                TextHAlign::Left,
            ));
        }
        x += width + metrics.label_gap_px * 2.0;
    }
}

fn dataset_colors(dataset: &Dataset, index: usize) -> (Color, Color) {
    let resolve = |spec: Option<&ColorSpec>| {
        spec.and_then(|spec| spec.resolve(index))
            .map_or(DEFAULT_ELEMENT_COLOR, |color| color.rgba())
    };
    (
        resolve(dataset.background_color.as_ref()),
        resolve(dataset.border_color.as_ref()),
    )
}

fn axis_color(color: Option<&CssColor>, fallback: Color) -> Color {
    color.map_or(fallback, |color| color.rgba())
}

// Sans fonts average a little over half an em per glyph.
fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
