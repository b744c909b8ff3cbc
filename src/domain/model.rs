use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recorded reading from a weather station.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: String,
    pub station: String,
    pub temperature: f64,
    pub precipitation: Option<f64>,
}

/// Date predicate shared by the aggregate query and the range definition.
///
/// Dates compare as `YYYY-MM-DD` strings, the same way the SQL filter does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    /// `date >= start`
    Since { start: String },
    /// `start <= date <= end`
    Between { start: String, end: String },
}

impl DateFilter {
    pub fn since(start: impl Into<String>) -> Self {
        DateFilter::Since {
            start: start.into(),
        }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        DateFilter::Between {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn matches(&self, date: &str) -> bool {
        match self {
            DateFilter::Since { start } => date >= start.as_str(),
            DateFilter::Between { start, end } => date >= start.as_str() && date <= end.as_str(),
        }
    }
}

/// Set of every date with at least one observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownDateSet {
    dates: HashSet<String>,
}

impl KnownDateSet {
    pub fn contains(&self, date: &str) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn latest(&self) -> Option<&str> {
        self.dates.iter().max().map(String::as_str)
    }
}

impl FromIterator<String> for KnownDateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Raw min/max/avg as returned by the store. All fields are `None` when no row matched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureAggregate {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start: String,
    #[serde(rename = "End Date")]
    pub end: String,
    #[serde(rename = "Temperature Minimum")]
    pub min: f64,
    #[serde(rename = "Temperature Average")]
    pub avg: f64,
    #[serde(rename = "Temperature Maximum")]
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangeOutcome {
    Found(TemperatureSummary),
    NotFound(String),
}

impl RangeOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RangeOutcome::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}
