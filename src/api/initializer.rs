use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::host::{ChartFactory, Document};
use crate::performance::{PERFORMANCE_CHART_ID, performance_chart_config};

use super::ChartConfig;

/// Result of a document-ready pass.
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome<H> {
    /// A chart was constructed on the target element.
    Constructed(H),
    /// The page has no element with the target id; nothing was done.
    TargetAbsent,
    /// This initializer already ran for the current document.
    AlreadyInitialized,
}

impl<H> InitOutcome<H> {
    #[must_use]
    pub fn handle(self) -> Option<H> {
        match self {
            Self::Constructed(handle) => Some(handle),
            Self::TargetAbsent | Self::AlreadyInitialized => None,
        }
    }

    #[must_use]
    pub fn is_constructed(&self) -> bool {
        matches!(self, Self::Constructed(_))
    }
}

/// Builds one chart on a named element once the host document is ready.
///
/// The host calls `on_document_ready` from its own startup sequence and
/// passes the element lookup and charting capability in. Only the first call
/// does any work.
#[derive(Debug, Clone)]
pub struct ChartInitializer {
    target_id: String,
    config: ChartConfig,
    fired: bool,
}

impl ChartInitializer {
    pub fn new(target_id: impl Into<String>, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            target_id: target_id.into(),
            config,
            fired: false,
        })
    }

    /// Initializer for the classifier accuracy chart on `performanceChart`.
    pub fn performance_chart() -> ChartResult<Self> {
        Self::new(PERFORMANCE_CHART_ID, performance_chart_config()?)
    }

    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Runs the document-ready step.
    ///
    /// A missing target element is a normal outcome, not an error. Errors from
    /// the factory propagate unchanged, and the initializer still counts as
    /// fired so a failed construction is never retried.
    pub fn on_document_ready<D, F>(
        &mut self,
        document: &D,
        factory: &mut F,
    ) -> ChartResult<InitOutcome<F::Handle>>
    where
        D: Document + ?Sized,
        F: ChartFactory<D::Element> + ?Sized,
    {
        if self.fired {
            warn!(target_id = %self.target_id, "document-ready fired again; ignoring");
            return Ok(InitOutcome::AlreadyInitialized);
        }
        self.fired = true;

        let Some(element) = document.element_by_id(&self.target_id) else {
            debug!(target_id = %self.target_id, "chart target absent; skipping");
            return Ok(InitOutcome::TargetAbsent);
        };

        let handle = factory.construct(&element, &self.config)?;
        debug!(
            target_id = %self.target_id,
            chart_type = %self.config.chart_type,
            "chart initialized"
        );
        Ok(InitOutcome::Constructed(handle))
    }
}
