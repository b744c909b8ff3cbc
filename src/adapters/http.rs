use crate::core::feed::ObservationFeed;
use crate::core::range_query::RangeQueryService;
use crate::core::{DatasetProvider, ObservationStore, RangeOutcome};
use crate::utils::error::{ClimateError, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub range_query: RangeQueryService,
    pub feed: ObservationFeed,
}

impl AppState {
    pub fn new(store: Arc<dyn ObservationStore>, dataset: &impl DatasetProvider) -> Result<Self> {
        Ok(Self {
            range_query: RangeQueryService::new(store.clone(), dataset),
            feed: ObservationFeed::new(store, dataset)?,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperatures_from))
        .route("/api/v1.0/{start}/{end}", get(temperatures_between))
        .with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Climate API listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(vec!["Internal server error"]),
        )
            .into_response()
    }
}

impl IntoResponse for RangeOutcome {
    fn into_response(self) -> Response {
        match self {
            RangeOutcome::Found(summary) => (StatusCode::OK, Json(vec![summary])).into_response(),
            RangeOutcome::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(vec![message])).into_response()
            }
        }
    }
}

async fn welcome() -> &'static str {
    "Climate Analysis:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}

async fn precipitation(State(state): State<AppState>) -> Result<Response> {
    let data = state.feed.precipitation().await?;
    Ok(Json(data).into_response())
}

async fn stations(State(state): State<AppState>) -> Result<Response> {
    let data = state.feed.stations().await?;
    Ok(Json(data).into_response())
}

async fn tobs(State(state): State<AppState>) -> Result<Response> {
    let data = state.feed.temperature_observations().await?;
    Ok(Json(data).into_response())
}

async fn temperatures_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<RangeOutcome> {
    tracing::debug!(
        "Temperature summary requested from {} to {}",
        start,
        state.range_query.last_known_date()
    );
    state.range_query.summarize_from(&start).await
}

async fn temperatures_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<RangeOutcome> {
    tracing::debug!("Temperature summary requested for {}..{}", start, end);
    state.range_query.summarize_between(&start, &end).await
}
