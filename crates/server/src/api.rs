use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;

use application::{
    EmployeeStatsDraft, FarmDraft, NoticeDraft, SiteVisitDraft, StatementDraft, UserDraft,
};
use domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/dashboard", get(dashboard_summary))
        .route("/api/screens", get(screen_configs))
        .route("/api/farms", get(list_farms).post(create_farm))
        .route(
            "/api/farms/{id}",
            get(get_farm).put(update_farm).delete(delete_farm),
        )
        .route("/api/site-visits", get(list_visits).post(create_visit))
        .route("/api/site-visits/agent-choices", get(agent_choices))
        .route(
            "/api/site-visits/{id}",
            get(get_visit).put(update_visit).delete(delete_visit),
        )
        .route("/api/notices", get(list_notices).post(create_notice))
        .route(
            "/api/notices/{id}",
            get(get_notice).put(update_notice).delete(delete_notice),
        )
        .route("/api/notices/{id}/toggle-status", post(toggle_notice))
        .route(
            "/api/statements",
            get(list_statements).post(create_statement),
        )
        .route(
            "/api/statements/{id}",
            get(get_statement)
                .put(update_statement)
                .delete(delete_statement),
        )
        .route("/api/employee-stats", get(list_stats).post(create_stats))
        .route("/api/employee-stats/farm-choices", get(farm_choices))
        .route(
            "/api/employee-stats/{id}",
            get(get_stats).put(update_stats).delete(delete_stats),
        )
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(cors)
        .with_state(state)
}

/// Resolve the request principal from the `x-user-id` header.
async fn current_user(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    let raw = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing x-user-id header".to_string()))?;
    let id: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::Unauthorized("x-user-id must be an integer".to_string()))?;
    state
        .users_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(format!("unknown user {id}")))
}

#[derive(serde::Deserialize)]
struct ListQuery {
    page: Option<u64>,
    farm: Option<String>,
}

// --- Dashboard ---

async fn dashboard_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(state.dashboard.summary(&user).await?))
}

// --- Screens ---

/// List-screen configuration per entity, for clients rendering lists.
async fn screen_configs(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(domain::screen::registry()))
}

// --- Farms ---

async fn list_farms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(state.farms.list(&user, q.page.unwrap_or(1)).await?))
}

async fn get_farm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.farms.get(id).await?))
}

async fn create_farm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<FarmDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let farm = state.farms.create(&user, draft).await?;
    Ok((StatusCode::CREATED, Json(farm)))
}

async fn update_farm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<FarmDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.farms.update(id, draft).await?))
}

async fn delete_farm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.farms.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Site visits ---

async fn list_visits(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let page = state
        .visits
        .list(&user, q.farm.as_deref(), q.page.unwrap_or(1))
        .await?;
    Ok(Json(page))
}

async fn agent_choices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.visits.agent_choices().await?))
}

async fn get_visit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.visits.get(id).await?))
}

async fn create_visit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<SiteVisitDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    let visit = state.visits.create(draft).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

async fn update_visit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<SiteVisitDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.visits.update(id, draft).await?))
}

async fn delete_visit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.visits.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Notices ---

async fn list_notices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.notices.list(q.page.unwrap_or(1)).await?))
}

async fn get_notice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.notices.get(id).await?))
}

async fn create_notice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<NoticeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let notice = state.notices.create(&user, draft).await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

async fn update_notice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<NoticeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.notices.update(id, draft).await?))
}

async fn toggle_notice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.notices.toggle_active(id).await?))
}

async fn delete_notice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.notices.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Statements ---

async fn list_statements(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let page = state
        .statements
        .list(&user, q.farm.as_deref(), q.page.unwrap_or(1))
        .await?;
    Ok(Json(page))
}

async fn get_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.statements.get(id).await?))
}

async fn create_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<StatementDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    let statement = state.statements.create(draft).await?;
    Ok((StatusCode::CREATED, Json(statement)))
}

async fn update_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<StatementDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.statements.update(id, draft).await?))
}

async fn delete_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.statements.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Employee stats ---

async fn list_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let page = state
        .stats
        .list(&user, q.farm.as_deref(), q.page.unwrap_or(1))
        .await?;
    Ok(Json(page))
}

async fn farm_choices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(state.stats.farm_choices(&user).await?))
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.stats.get(id).await?))
}

async fn create_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<EmployeeStatsDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    let stats = state.stats.create(&user, draft).await?;
    Ok((StatusCode::CREATED, Json(stats)))
}

async fn update_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<EmployeeStatsDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(state.stats.update(&user, id, draft).await?))
}

async fn delete_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.stats.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Users ---

async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.users.list(q.page.unwrap_or(1)).await?))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.users.get(id).await?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<UserDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    let user = state.users.create(draft).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(draft): Json<UserDraft>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    Ok(Json(state.users.update(id, draft).await?))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(&state, &headers).await?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
