pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::http::{router, serve, AppState};
pub use adapters::memory_store::MemoryStore;
pub use adapters::sqlite_store::SqliteStore;
pub use config::ServiceConfig;
pub use core::{feed::ObservationFeed, range_query::RangeQueryService};
pub use utils::error::{ClimateError, Result};
