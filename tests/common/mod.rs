#![allow(dead_code)]

use climate_api::SqliteStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

const SCHEMA: &str = r#"
CREATE TABLE measurement (
    id INTEGER PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
);
CREATE TABLE station (
    id INTEGER PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
);
"#;

/// (station, date, prcp, tobs)
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2016-08-22", Some(0.4), 79.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00519397", "2017-08-01", Some(0.02), 77.0),
    ("USC00519281", "2017-08-05", Some(0.12), 72.0),
    ("USC00519397", "2017-08-10", Some(0.0), 78.0),
    ("USC00519281", "2017-08-15", None, 83.0),
    ("USC00519397", "2017-08-18", None, 80.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
];

pub const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
];

/// A single-connection in-memory database holding the fixture rows.
pub async fn seeded_store() -> SqliteStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    seed(&pool).await;
    SqliteStore::from_pool(pool)
}

/// Writes the fixture rows into a new database file at `path`.
pub async fn seed_file(path: &Path) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    seed(&pool).await;
    pool.close().await;
}

async fn seed(pool: &SqlitePool) {
    sqlx::raw_sql(SCHEMA).execute(pool).await.unwrap();

    for &(station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(pool)
            .await
            .unwrap();
    }

    for &(station, name) in STATIONS {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(station)
            .bind(name)
            .execute(pool)
            .await
            .unwrap();
    }
}
