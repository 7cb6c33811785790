use thiserror::Error;

use crate::api::ChartType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart type `{0}` is not supported by this backend")]
    UnsupportedChartType(ChartType),

    #[error("canvas `{element_id}` is already in use by another chart")]
    CanvasInUse { element_id: String },

    #[error("chart configuration serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
