use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::api::ChartConfig;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, build_bar_frame};

use super::{CanvasElement, ChartFactory};

/// Live chart bound to one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    element_id: String,
    config: ChartConfig,
    frame: RenderFrame,
}

impl ChartInstance {
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.frame.viewport
    }

    /// Scene painted by the most recent render pass.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }
}

/// Charting capability backed by the built-in bar layout and a `Renderer`.
///
/// A canvas hosts at most one chart at a time; `destroy` frees it again.
pub struct CanvasChartFactory<R: Renderer> {
    renderer: R,
    bound: IndexSet<String>,
}

impl<R: Renderer> CanvasChartFactory<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            bound: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn is_bound(&self, element_id: &str) -> bool {
        self.bound.contains(element_id)
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Re-lays out a responsive chart for a new canvas size.
    ///
    /// Returns `false` without drawing when the chart is not responsive or
    /// the size did not change.
    pub fn resize(&mut self, instance: &mut ChartInstance, viewport: Viewport) -> ChartResult<bool> {
        if !self.is_bound(&instance.element_id) {
            return Err(ChartError::InvalidData(format!(
                "chart on `{}` was destroyed",
                instance.element_id
            )));
        }
        if !instance.config.options.responsive || instance.viewport() == viewport {
            trace!(element_id = %instance.element_id, "resize skipped");
            return Ok(false);
        }

        let frame = build_bar_frame(&instance.config, viewport)?;
        self.renderer.render(&frame)?;
        debug!(
            element_id = %instance.element_id,
            width = viewport.width,
            height = viewport.height,
            "resized chart"
        );
        instance.frame = frame;
        Ok(true)
    }

    /// Releases the canvas held by `instance`.
    pub fn destroy(&mut self, instance: ChartInstance) -> bool {
        let released = self.bound.shift_remove(&instance.element_id);
        debug!(element_id = %instance.element_id, released, "destroyed chart");
        released
    }
}

impl<R: Renderer> ChartFactory<CanvasElement> for CanvasChartFactory<R> {
    type Handle = ChartInstance;

    fn construct(
        &mut self,
        element: &CanvasElement,
        config: &ChartConfig,
    ) -> ChartResult<ChartInstance> {
        if self.is_bound(&element.id) {
            return Err(ChartError::CanvasInUse {
                element_id: element.id.clone(),
            });
        }

        let frame = build_bar_frame(config, element.viewport)?;
        self.renderer.render(&frame)?;
        self.bound.insert(element.id.clone());
        debug!(
            element_id = %element.id,
            chart_type = %config.chart_type,
            primitives = frame.primitive_count(),
            "constructed chart"
        );

        Ok(ChartInstance {
            element_id: element.id.clone(),
            config: config.clone(),
            frame,
        })
    }
}
