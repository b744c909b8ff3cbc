use crate::core::dates::days_before;
use crate::domain::ports::{DatasetProvider, ObservationStore};
use crate::utils::error::{ClimateError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Pass-through projections of the last year of observations.
#[derive(Clone)]
pub struct ObservationFeed {
    store: Arc<dyn ObservationStore>,
    window_start: String,
}

impl ObservationFeed {
    pub fn new(store: Arc<dyn ObservationStore>, dataset: &impl DatasetProvider) -> Result<Self> {
        let window_start = days_before(dataset.last_known_date(), dataset.lookback_days())
            .ok_or_else(|| ClimateError::InvalidConfigValueError {
                field: "dataset.last_known_date".to_string(),
                value: dataset.last_known_date().to_string(),
                reason: "Cannot compute the lookback window from this date".to_string(),
            })?;

        Ok(Self {
            store,
            window_start,
        })
    }

    pub fn window_start(&self) -> &str {
        &self.window_start
    }

    /// Date to precipitation for the lookback window. A later row for the same date wins.
    pub async fn precipitation(&self) -> Result<BTreeMap<String, Option<f64>>> {
        let readings = self.store.recent_precipitation(&self.window_start).await?;
        tracing::debug!("Fetched {} precipitation rows since {}", readings.len(), self.window_start);

        Ok(readings
            .into_iter()
            .map(|reading| (reading.date, reading.prcp))
            .collect())
    }

    pub async fn stations(&self) -> Result<Vec<String>> {
        self.store.all_station_names().await
    }

    /// One single-entry `{date: tobs}` map per row, ordered by date.
    pub async fn temperature_observations(&self) -> Result<Vec<BTreeMap<String, f64>>> {
        let readings = self.store.recent_temperatures(&self.window_start).await?;
        tracing::debug!("Fetched {} temperature rows since {}", readings.len(), self.window_start);

        Ok(readings
            .into_iter()
            .map(|reading| BTreeMap::from([(reading.date, reading.tobs)]))
            .collect())
    }
}
