use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::derive::DerivationEngine;
use crate::persistence::{DatasetKind, DatasetSource, DatasetStore, PersistenceError};
use crate::roster::{CallAssignment, LeaveRequest, RotationAssignment};
use crate::store::{DailyStats, LeaveStats, ScheduleStore};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ScheduleStore>>,
    datasets: Arc<dyn DatasetStore + Send + Sync>,
}

impl AppState {
    /// Loads the initial store from the dataset blobs (custom-over-default
    /// per schema) and keeps the blob store for later uploads.
    pub fn new(datasets: Arc<dyn DatasetStore + Send + Sync>) -> Result<Self, PersistenceError> {
        let store = ScheduleStore::load(datasets.as_ref())?;
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            datasets,
        })
    }

    fn store(&self) -> Arc<RwLock<ScheduleStore>> {
        self.store.clone()
    }

    fn reload(&self) -> Result<(), PersistenceError> {
        let fresh = ScheduleStore::load(self.datasets.as_ref())?;
        *self.store.write() = fresh;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<PersistenceError> for ApiError {
    fn from(value: PersistenceError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/day/:date", get(day_view))
        .route("/residents/:fragment", get(resident_view))
        .route("/leaves", get(leaves_view))
        .route(
            "/datasets/:kind",
            put(upload_dataset).delete(reset_dataset),
        )
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Everything the day screen shows: who is on service, the call card, the
/// VA-primary override, and who is post-call.
#[derive(Debug, Serialize)]
struct DayView {
    date: NaiveDate,
    stats: DailyStats,
    rotations: Vec<RotationAssignment>,
    call: Option<CallAssignment>,
    va_primary: Vec<String>,
    post_call: Vec<String>,
}

async fn day_view(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayView>, ApiError> {
    let date = parse_day_param(&date)?;
    let store = state.store();
    let guard = store.read();
    let engine = DerivationEngine::new(&guard);
    let view = DayView {
        date,
        stats: guard.daily_stats(date),
        rotations: guard.active_on(date).into_iter().cloned().collect(),
        call: guard.call_on(date).cloned(),
        va_primary: engine.va_primary_on(date),
        post_call: engine.post_call_names(date),
    };
    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
struct ResidentQuery {
    /// Reference date for the upcoming-call lookahead; defaults to today.
    from: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ResidentView {
    name: String,
    pgy_year: Option<String>,
    rotations: Vec<RotationAssignment>,
    leaves: Vec<LeaveRequest>,
    upcoming_calls: Vec<CallAssignment>,
}

async fn resident_view(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
    Query(query): Query<ResidentQuery>,
) -> Result<Json<ResidentView>, ApiError> {
    let from = query.from.unwrap_or_else(|| Local::now().date_naive());
    let store = state.store();
    let guard = store.read();
    let engine = DerivationEngine::new(&guard);

    let Some(name) = engine.resolve_name(&fragment) else {
        return Err(ApiError::not_found(format!(
            "no resident matches '{fragment}'"
        )));
    };
    let name = name.to_string();

    let rotations: Vec<RotationAssignment> =
        guard.rotations_for(&name).into_iter().cloned().collect();
    let view = ResidentView {
        pgy_year: rotations.first().map(|r| r.pgy_year.clone()),
        leaves: guard.leaves_for(&name).into_iter().cloned().collect(),
        upcoming_calls: engine
            .upcoming_calls(&name, from)
            .into_iter()
            .cloned()
            .collect(),
        rotations,
        name,
    };
    Ok(Json(view))
}

#[derive(Debug, Serialize)]
struct LeavesView {
    stats: LeaveStats,
    requests: Vec<LeaveRequest>,
}

async fn leaves_view(State(state): State<AppState>) -> Json<LeavesView> {
    let store = state.store();
    let guard = store.read();
    Json(LeavesView {
        stats: guard.leave_stats(),
        requests: guard.leaves().to_vec(),
    })
}

#[derive(Debug, Serialize)]
struct DatasetStatus {
    kind: DatasetKind,
    source: DatasetSource,
    records: usize,
}

async fn upload_dataset(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: String,
) -> Result<Json<DatasetStatus>, ApiError> {
    let kind = parse_kind_param(&kind)?;
    state.datasets.save(kind, &body)?;
    state.reload()?;
    Ok(Json(dataset_status(&state, kind)))
}

async fn reset_dataset(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<DatasetStatus>, ApiError> {
    let kind = parse_kind_param(&kind)?;
    state.datasets.clear(kind)?;
    state.reload()?;
    Ok(Json(dataset_status(&state, kind)))
}

fn dataset_status(state: &AppState, kind: DatasetKind) -> DatasetStatus {
    let guard = state.store.read();
    let sources = guard.sources();
    let (source, records) = match kind {
        DatasetKind::Rotations => (sources.rotations, guard.rotations().len()),
        DatasetKind::Call => (sources.call, guard.call_schedule().len()),
        DatasetKind::Vacation => (sources.leaves, guard.leaves().len()),
    };
    DatasetStatus {
        kind,
        source,
        records,
    }
}

fn parse_day_param(text: &str) -> Result<NaiveDate, ApiError> {
    text.parse::<NaiveDate>()
        .map_err(|_| ApiError::invalid(format!("invalid date '{text}', expected YYYY-MM-DD")))
}

fn parse_kind_param(text: &str) -> Result<DatasetKind, ApiError> {
    DatasetKind::from_str(text).ok_or_else(|| {
        ApiError::invalid(format!(
            "unknown dataset '{text}', expected rotations, call, or vacation"
        ))
    })
}
