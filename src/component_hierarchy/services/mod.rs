mod filter_engine;
mod running_hours;
mod statistics_aggregator;
mod tree_builder;

pub use filter_engine::FilterEngine;
pub use running_hours::{RunningHoursCalculator, MILLIS_PER_HOUR};
pub use statistics_aggregator::StatisticsAggregator;
pub use tree_builder::{BuildReport, TreeBuilder};
