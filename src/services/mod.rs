pub mod analysis_cache;
pub mod bulk_analysis;
pub mod dataset_service;
pub mod insight_aggregator;
pub mod insight_service;
pub mod item_analysis;
