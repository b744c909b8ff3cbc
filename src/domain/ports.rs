use crate::domain::model::{
    DateFilter, KnownDateSet, PrecipitationReading, TemperatureAggregate, TemperatureReading,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the observation record.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    async fn aggregate_temperature(&self, filter: &DateFilter) -> Result<TemperatureAggregate>;
    async fn all_observation_dates(&self) -> Result<KnownDateSet>;
    async fn all_station_names(&self) -> Result<Vec<String>>;
    /// Rows with `date >= since`, ordered by date.
    async fn recent_precipitation(&self, since: &str) -> Result<Vec<PrecipitationReading>>;
    /// Rows with `date >= since`, ordered by date.
    async fn recent_temperatures(&self, since: &str) -> Result<Vec<TemperatureReading>>;
}

pub trait DatasetProvider: Send + Sync {
    fn last_known_date(&self) -> &str;
    fn lookback_days(&self) -> u32;
}
