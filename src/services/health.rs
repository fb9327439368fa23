use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::subscribers::SubscriberRegistry;
use crate::timetable::TimetableStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub timetable: TimetableHealth,
    pub subscribers: usize,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimetableHealth {
    pub rows: usize,
    pub days: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TimetableStore>,
    pub registry: SubscriberRegistry,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(store: Arc<TimetableStore>, registry: SubscriberRegistry) -> Self {
        let state = AppState {
            store,
            registry,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timetable: TimetableHealth {
            rows: state.store.len(),
            days: state.store.days_in_file_order().len(),
        },
        subscribers: state.registry.len(),
        uptime_seconds: uptime,
    })
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    // The timetable is loaded before the server starts, so readiness only
    // guards against a store that loaded zero rows.
    if state.store.is_empty() {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    } else {
        Ok(Json("ready"))
    }
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}
