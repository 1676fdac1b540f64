pub mod config;
pub mod error;
pub mod store;

pub use crate::config::{resolve_stats_path, DEFAULT_STATS_FILE, STATS_FILE_ENV};
pub use crate::error::StatsError;
pub use crate::store::StatisticsStore;
