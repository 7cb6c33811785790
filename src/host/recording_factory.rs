use crate::api::ChartConfig;
use crate::error::{ChartError, ChartResult};

use super::{CanvasElement, ChartFactory};

/// One `construct` call as seen by `RecordingChartFactory`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionCall {
    pub element_id: String,
    pub config: ChartConfig,
}

/// Test double for the charting capability.
///
/// Records every construction request and hands out sequential handles. It
/// can be primed to fail, mimicking a missing or broken charting runtime.
#[derive(Debug, Default)]
pub struct RecordingChartFactory {
    pub calls: Vec<ConstructionCall>,
    failure: Option<String>,
}

impl RecordingChartFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `construct` call fail with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(message.into()),
        }
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl ChartFactory<CanvasElement> for RecordingChartFactory {
    type Handle = usize;

    fn construct(&mut self, element: &CanvasElement, config: &ChartConfig) -> ChartResult<usize> {
        self.calls.push(ConstructionCall {
            element_id: element.id.clone(),
            config: config.clone(),
        });
        match &self.failure {
            Some(message) => Err(ChartError::InvalidData(message.clone())),
            None => Ok(self.calls.len()),
        }
    }
}
