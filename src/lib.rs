//! perf-chart: classifier performance bar chart for dashboard pages.
//!
//! The crate wires a fixed accuracy chart onto a host page through two
//! injected seams: element lookup (`host::Document`) and a charting
//! capability (`host::ChartFactory`). A headless bar layout and renderer
//! split back the built-in capability.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod performance;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartInitializer, InitOutcome};
pub use error::{ChartError, ChartResult};
