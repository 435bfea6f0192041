pub mod anomaly;
pub mod config;
pub mod confidence;
pub mod dedup;
pub mod disease;
pub mod error;
pub mod flight;
pub mod gazetteer;
pub mod geo;
pub mod history;
pub mod hotspot;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod sources;
pub mod traveler;

#[cfg(test)]
mod test_support;

pub use pipeline::{aggregate, run_scan, scan_batch, Aggregation};
