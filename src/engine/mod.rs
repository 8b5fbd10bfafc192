mod aggregation_engine;

pub use aggregation_engine::AggregationEngine;
