// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, PrimitiveDateTime};
use tokio::sync::Mutex;
use tracing::info;

use gym_agenda_api::{
    ApiError, ApiResponse, CancelBookingRequest, CreateActivityRequest, CreateBookingRequest,
    DeleteActivityRequest, ListActivitiesFilter, RegisterUserRequest, RescheduleBookingRequest,
    UpdateActivityRequest, cancel_booking, create_activity, create_booking, delete_activity,
    get_booking, list_activities, list_bookings, register_user, reschedule_booking,
    update_activity,
};
use gym_agenda_persistence::Persistence;

/// Gym Agenda Server - HTTP server for the gym scheduling system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex so each request sees a
/// consistent view of the schedule while it checks conflicts and vacancy.
#[derive(Clone)]
struct AppState {
    /// The persistence layer backing the scheduling engine.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    /// The user requesting the listing.
    actor_id: i64,
    /// The role of the requesting user.
    actor_role: String,
}

/// Query parameters for listing activities.
#[derive(Debug, Deserialize)]
struct ListActivitiesQuery {
    /// Restrict the catalog to one professional's activities.
    professional_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Maps an envelope code to the HTTP status it travels under.
///
/// Business outcomes are not errors, so they arrive here inside a successful
/// envelope and only pick up their status code at the HTTP boundary.
fn status_for_code(code: &str) -> StatusCode {
    match code {
        "created" => StatusCode::CREATED,
        "conflict" | "already_cancelled" => StatusCode::CONFLICT,
        "no_vacancy" | "past_schedule" => StatusCode::UNPROCESSABLE_ENTITY,
        "not_found" => StatusCode::NOT_FOUND,
        "forbidden" => StatusCode::FORBIDDEN,
        _ => StatusCode::OK,
    }
}

/// Wraps an envelope in a response with the matching status code.
fn envelope_response<T: Serialize>(envelope: ApiResponse<T>) -> Response {
    (status_for_code(&envelope.code), Json(envelope)).into_response()
}

/// The current wall-clock instant, used for past-schedule checks.
fn wall_clock() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Handler for POST `/users` endpoint.
///
/// Registers a new user account.
async fn handle_register_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Response, HttpError> {
    info!(name = %req.name, role = %req.role, "Handling register_user request");

    let mut persistence = app_state.persistence.lock().await;
    let envelope = register_user(&mut persistence, &req)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for POST `/bookings` endpoint.
///
/// Books a client into an activity slot.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        activity_id = req.activity_id,
        date = %req.date,
        time = %req.time,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = create_booking(&mut persistence, &req, wall_clock())?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for PUT `/bookings/{booking_id}` endpoint.
///
/// Moves a booking to a new date and time.
async fn handle_reschedule_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<RescheduleBookingRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        booking_id = booking_id,
        date = %req.date,
        time = %req.time,
        "Handling reschedule_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = reschedule_booking(&mut persistence, booking_id, &req, wall_clock())?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for DELETE `/bookings/{booking_id}` endpoint.
///
/// Cancels a booking. The record is kept with `Cancelled` status.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        booking_id = booking_id,
        "Handling cancel_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = cancel_booking(&mut persistence, booking_id, &req, wall_clock())?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for GET `/bookings` endpoint.
///
/// Lists bookings scoped by the actor's role.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = query.actor_id,
        role = %query.actor_role,
        "Handling list_bookings request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = list_bookings(&mut persistence, query.actor_id, &query.actor_role)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
///
/// Returns one booking with its display attributes.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Response, HttpError> {
    info!(booking_id = booking_id, "Handling get_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let envelope = get_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for POST `/activities` endpoint.
///
/// Creates an activity owned by the requesting professional.
async fn handle_create_activity(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateActivityRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        name = %req.name,
        "Handling create_activity request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = create_activity(&mut persistence, &req)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for PUT `/activities/{activity_id}` endpoint.
///
/// Updates an activity's attributes.
async fn handle_update_activity(
    AxumState(app_state): AxumState<AppState>,
    Path(activity_id): Path<i64>,
    Json(req): Json<UpdateActivityRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        activity_id = activity_id,
        "Handling update_activity request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = update_activity(&mut persistence, activity_id, &req)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for DELETE `/activities/{activity_id}` endpoint.
///
/// Deletes an activity that no booking references.
async fn handle_delete_activity(
    AxumState(app_state): AxumState<AppState>,
    Path(activity_id): Path<i64>,
    Json(req): Json<DeleteActivityRequest>,
) -> Result<Response, HttpError> {
    info!(
        actor_id = req.actor_id,
        activity_id = activity_id,
        "Handling delete_activity request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let envelope = delete_activity(&mut persistence, activity_id, &req)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for GET `/activities` endpoint.
///
/// Lists the activity catalog, optionally filtered by professional.
async fn handle_list_activities(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListActivitiesQuery>,
) -> Result<Response, HttpError> {
    info!(
        professional_id = ?query.professional_id,
        "Handling list_activities request"
    );

    let filter: ListActivitiesFilter = ListActivitiesFilter {
        professional_id: query.professional_id,
        available_only: false,
    };

    let mut persistence = app_state.persistence.lock().await;
    let envelope = list_activities(&mut persistence, filter)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Handler for GET `/activities/available` endpoint.
///
/// Lists activities that still have remaining slots.
async fn handle_list_available_activities(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    info!("Handling list_available_activities request");

    let filter: ListActivitiesFilter = ListActivitiesFilter {
        professional_id: None,
        available_only: true,
    };

    let mut persistence = app_state.persistence.lock().await;
    let envelope = list_activities(&mut persistence, filter)?;
    drop(persistence);

    Ok(envelope_response(envelope))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", post(handle_register_user))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}", put(handle_reschedule_booking))
        .route("/bookings/{booking_id}", delete(handle_cancel_booking))
        .route("/activities", post(handle_create_activity))
        .route("/activities", get(handle_list_activities))
        .route(
            "/activities/available",
            get(handle_list_available_activities),
        )
        .route("/activities/{activity_id}", put(handle_update_activity))
        .route("/activities/{activity_id}", delete(handle_delete_activity))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Gym Agenda Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
