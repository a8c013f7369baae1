//! Statistics module - aggregate queries

mod aggregator;

pub use aggregator::{SalesAggregator, TOP_N};
