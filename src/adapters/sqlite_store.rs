use crate::core::{DateFilter, KnownDateSet, ObservationStore, TemperatureAggregate};
use crate::domain::model::{PrecipitationReading, TemperatureReading};
use crate::utils::error::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Observation store backed by the `measurement` and `station` tables of a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens `url` read-only. The database file must already exist.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to observation database at {}", url);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ObservationStore for SqliteStore {
    async fn aggregate_temperature(&self, filter: &DateFilter) -> Result<TemperatureAggregate> {
        let row: (Option<f64>, Option<f64>, Option<f64>) = match filter {
            DateFilter::Since { start } => {
                sqlx::query_as(
                    "SELECT CAST(MIN(tobs) AS REAL), CAST(MAX(tobs) AS REAL), AVG(tobs) \
                     FROM measurement WHERE date >= ?1",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
            DateFilter::Between { start, end } => {
                sqlx::query_as(
                    "SELECT CAST(MIN(tobs) AS REAL), CAST(MAX(tobs) AS REAL), AVG(tobs) \
                     FROM measurement WHERE date >= ?1 AND date <= ?2",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?
            }
        };

        let (min, max, avg) = row;
        Ok(TemperatureAggregate { min, max, avg })
    }

    async fn all_observation_dates(&self) -> Result<KnownDateSet> {
        let dates: Vec<String> = sqlx::query_scalar("SELECT DISTINCT date FROM measurement")
            .fetch_all(&self.pool)
            .await?;

        let known: KnownDateSet = dates.into_iter().collect();
        if known.is_empty() {
            tracing::warn!("The measurement table holds no observations");
        } else {
            tracing::debug!("Loaded {} distinct observation dates", known.len());
        }
        Ok(known)
    }

    async fn all_station_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar("SELECT name FROM station")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn recent_precipitation(&self, since: &str) -> Result<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement \
             WHERE date >= ?1 ORDER BY date",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn recent_temperatures(&self, since: &str) -> Result<Vec<TemperatureReading>> {
        let rows = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement \
             WHERE date >= ?1 ORDER BY date",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
