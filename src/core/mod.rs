pub mod bar_series;
pub mod scale;
pub mod types;
pub mod value_ticks;

pub use bar_series::{BAR_PERCENTAGE, BandScale, CATEGORY_PERCENTAGE, CategoryBar, project_category_bars};
pub use scale::LinearScale;
pub use types::{PlotArea, Viewport};
pub use value_ticks::{ValueTicks, nice_ticks, value_extent, value_tick_target_count};
