mod factors;
mod metrics;
mod region;
mod series;

pub use factors::RegionalFactors;
pub use metrics::{ProjectedMetrics, RawProjection};
pub use region::Region;
pub use series::{BASE_HISTORICAL, CO2_LEVELS, Co2Point, HistoricalPoint};
