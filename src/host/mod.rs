//! Seams between the initializer and the page hosting the chart.
//!
//! `Document` stands in for element lookup and `ChartFactory` for the
//! charting capability, so hosts inject both instead of relying on ambient
//! globals.

mod canvas_factory;
mod recording_factory;
mod static_document;

pub use canvas_factory::{CanvasChartFactory, ChartInstance};
pub use recording_factory::{ConstructionCall, RecordingChartFactory};
pub use static_document::{CanvasElement, StaticDocument};

use crate::api::ChartConfig;
use crate::error::ChartResult;

/// Element lookup over the host page.
pub trait Document {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Charting capability: builds a live chart bound to one element.
pub trait ChartFactory<E> {
    type Handle;

    fn construct(&mut self, element: &E, config: &ChartConfig) -> ChartResult<Self::Handle>;
}

impl<D: Document + ?Sized> Document for &D {
    type Element = D::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }
}
