pub mod membership_resolver;
pub mod progress_aggregator;
pub mod progress_recorder;
