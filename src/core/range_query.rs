use crate::core::dates::{is_strictly_after, round_to_tenth};
use crate::domain::model::{DateFilter, RangeOutcome, TemperatureAggregate, TemperatureSummary};
use crate::domain::ports::{DatasetProvider, ObservationStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// Date-bounded temperature summaries validated against the observation record.
#[derive(Clone)]
pub struct RangeQueryService {
    store: Arc<dyn ObservationStore>,
    last_known_date: String,
}

impl RangeQueryService {
    pub fn new(store: Arc<dyn ObservationStore>, dataset: &impl DatasetProvider) -> Self {
        Self {
            store,
            last_known_date: dataset.last_known_date().to_string(),
        }
    }

    pub fn last_known_date(&self) -> &str {
        &self.last_known_date
    }

    /// Summary over every observation on or after `start`.
    pub async fn summarize_from(&self, start: &str) -> Result<RangeOutcome> {
        let aggregate = self
            .store
            .aggregate_temperature(&DateFilter::since(start))
            .await?;
        let known_dates = self.store.all_observation_dates().await?;

        let not_found = || {
            RangeOutcome::NotFound(format!(
                "Error!! Data between '{}' and '{}' was not found.",
                start, self.last_known_date
            ))
        };

        if !known_dates.contains(start) {
            tracing::info!("Start date {} is not in the observation record", start);
            return Ok(not_found());
        }

        Ok(summarize(start, &self.last_known_date, aggregate).unwrap_or_else(not_found))
    }

    /// Summary over observations between `start` and `end`, both inclusive.
    pub async fn summarize_between(&self, start: &str, end: &str) -> Result<RangeOutcome> {
        let aggregate = self
            .store
            .aggregate_temperature(&DateFilter::between(start, end))
            .await?;
        let known_dates = self.store.all_observation_dates().await?;

        let valid = known_dates.contains(start)
            && known_dates.contains(end)
            && is_strictly_after(end, start);

        let not_found = || {
            RangeOutcome::NotFound(format!(
                "Error!! Data between '{}' and '{}' was not found. \
                 When entering the end date, make sure the start date is entered first \
                 and the end date is entered last.",
                start, end
            ))
        };

        if !valid {
            tracing::info!("Rejected date range {}..{}", start, end);
            return Ok(not_found());
        }

        Ok(summarize(start, end, aggregate).unwrap_or_else(not_found))
    }
}

fn summarize(start: &str, end: &str, aggregate: TemperatureAggregate) -> Option<RangeOutcome> {
    let TemperatureAggregate {
        min: Some(min),
        max: Some(max),
        avg: Some(avg),
    } = aggregate
    else {
        tracing::warn!("Empty temperature aggregate for validated range {}..{}", start, end);
        return None;
    };

    Some(RangeOutcome::Found(TemperatureSummary {
        start: start.to_string(),
        end: end.to_string(),
        min,
        avg: round_to_tenth(avg),
        max,
    }))
}
