use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::Document;

/// Drawing surface addressable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasElement {
    pub id: String,
    pub viewport: Viewport,
}

impl CanvasElement {
    pub fn new(id: impl Into<String>, viewport: Viewport) -> ChartResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "canvas id must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            id,
            viewport: viewport.validate()?,
        })
    }
}

/// In-memory page holding canvas elements in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticDocument {
    elements: IndexMap<String, CanvasElement>,
}

impl StaticDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a canvas; ids are unique within a document.
    pub fn insert_canvas(&mut self, id: impl Into<String>, viewport: Viewport) -> ChartResult<()> {
        let element = CanvasElement::new(id, viewport)?;
        if self.elements.contains_key(&element.id) {
            return Err(ChartError::InvalidData(format!(
                "duplicate element id `{}`",
                element.id
            )));
        }
        self.elements.insert(element.id.clone(), element);
        Ok(())
    }

    pub fn with_canvas(mut self, id: impl Into<String>, viewport: Viewport) -> ChartResult<Self> {
        self.insert_canvas(id, viewport)?;
        Ok(self)
    }

    /// Changes the size of an existing canvas, as a layout pass would.
    pub fn resize_canvas(&mut self, id: &str, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown element id `{id}`")))?;
        element.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }
}

impl Document for StaticDocument {
    type Element = CanvasElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.elements.get(id).cloned()
    }
}
