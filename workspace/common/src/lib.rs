//! Common transport-layer types shared by the HTML page and the JSON API.
//! Both views render the same [`TemperatureReport`], so the shapes live here
//! instead of being duplicated per handler.

mod reading;
mod report;

pub use reading::{MISSING_READING, Reading};
pub use report::{ComparisonChart, ComparisonRow, HistoricalRow, HistoryChart, TemperatureReport};
