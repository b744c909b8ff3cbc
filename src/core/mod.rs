pub mod dates;
pub mod feed;
pub mod range_query;

pub use crate::domain::model::{
    DateFilter, KnownDateSet, Observation, RangeOutcome, TemperatureAggregate, TemperatureSummary,
};
pub use crate::domain::ports::{DatasetProvider, ObservationStore};
pub use crate::utils::error::Result;
