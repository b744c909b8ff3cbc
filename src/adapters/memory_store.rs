use crate::core::{DateFilter, KnownDateSet, Observation, ObservationStore, TemperatureAggregate};
use crate::domain::model::{PrecipitationReading, TemperatureReading};
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct Station {
    pub station: String,
    pub name: String,
}

impl Station {
    pub fn new(station: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            name: name.into(),
        }
    }
}

/// Observation store held entirely in memory, filtered with the same
/// [`DateFilter`] semantics as the SQL queries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    observations: Vec<Observation>,
    stations: Vec<Station>,
}

impl MemoryStore {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            stations: Vec::new(),
        }
    }

    pub fn with_stations(mut self, stations: Vec<Station>) -> Self {
        self.stations = stations;
        self
    }

    fn since<'a>(&'a self, since: &str) -> Vec<&'a Observation> {
        let filter = DateFilter::since(since);
        let mut rows: Vec<&Observation> = self
            .observations
            .iter()
            .filter(|o| filter.matches(&o.date))
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        rows
    }
}

#[async_trait]
impl ObservationStore for MemoryStore {
    async fn aggregate_temperature(&self, filter: &DateFilter) -> Result<TemperatureAggregate> {
        let temperatures: Vec<f64> = self
            .observations
            .iter()
            .filter(|o| filter.matches(&o.date))
            .map(|o| o.temperature)
            .collect();

        if temperatures.is_empty() {
            return Ok(TemperatureAggregate::default());
        }

        let sum: f64 = temperatures.iter().sum();
        Ok(TemperatureAggregate {
            min: temperatures.iter().copied().reduce(f64::min),
            max: temperatures.iter().copied().reduce(f64::max),
            avg: Some(sum / temperatures.len() as f64),
        })
    }

    async fn all_observation_dates(&self) -> Result<KnownDateSet> {
        Ok(self.observations.iter().map(|o| o.date.clone()).collect())
    }

    async fn all_station_names(&self) -> Result<Vec<String>> {
        Ok(self.stations.iter().map(|s| s.name.clone()).collect())
    }

    async fn recent_precipitation(&self, since: &str) -> Result<Vec<PrecipitationReading>> {
        Ok(self
            .since(since)
            .into_iter()
            .map(|o| PrecipitationReading {
                date: o.date.clone(),
                prcp: o.precipitation,
            })
            .collect())
    }

    async fn recent_temperatures(&self, since: &str) -> Result<Vec<TemperatureReading>> {
        Ok(self
            .since(since)
            .into_iter()
            .map(|o| TemperatureReading {
                date: o.date.clone(),
                tobs: o.temperature,
            })
            .collect())
    }
}
