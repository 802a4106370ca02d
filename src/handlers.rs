use crate::auth;
use crate::errors::AppError;
use crate::ledger::{self, display_streak};
use crate::models::{
    CredentialsRequest, HabitView, LedgerResponse, NewHabitRequest, ProgressResponse,
    SessionResponse, Store,
};
use crate::progress::{build_progress, level_for, level_progress};
use crate::state::AppState;
use crate::storage::{self, habits_key, xp_key, CURRENT_USER_KEY, USERS_KEY};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut store = state.store.lock().await;
    auth::register(&mut store, &payload.username, &payload.password)?;
    store.current_user = Some(payload.username.clone());

    storage::write_key(&state.data_dir, USERS_KEY, &store.users).await;
    storage::write_key(&state.data_dir, CURRENT_USER_KEY, &store.current_user).await;
    persist_ledger(&state, &store, &payload.username).await;

    Ok(Json(session_payload(&store, &payload.username)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut store = state.store.lock().await;
    auth::login(&store, &payload.username, &payload.password)?;
    store.current_user = Some(payload.username.clone());

    storage::write_key(&state.data_dir, CURRENT_USER_KEY, &store.current_user).await;

    Ok(Json(session_payload(&store, &payload.username)))
}

pub async fn logout(State(state): State<AppState>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.current_user = None;
    storage::write_key(&state.data_dir, CURRENT_USER_KEY, &store.current_user).await;
    StatusCode::NO_CONTENT
}

pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, AppError> {
    let store = state.store.lock().await;
    let username = current_user(&store)?;
    Ok(Json(session_payload(&store, &username)))
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<LedgerResponse>, AppError> {
    let today = today_string();
    let store = state.store.lock().await;
    let username = current_user(&store)?;
    Ok(Json(ledger_payload(&store, &username, &today)))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let today = today_string();
    let mut store = state.store.lock().await;
    let username = current_user(&store)?;

    let habits = store.habits.entry(username.clone()).or_default();
    let added = ledger::add_habit(habits, &payload.name, payload.category).is_some();
    if added {
        persist_ledger(&state, &store, &username).await;
    }

    Ok(Json(ledger_payload(&store, &username, &today)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LedgerResponse>, AppError> {
    let today = today_string();
    let mut store = state.store.lock().await;
    let username = current_user(&store)?;

    if let Some(habits) = store.habits.get_mut(&username) {
        ledger::delete_habit(habits, &id);
    }
    persist_ledger(&state, &store, &username).await;

    Ok(Json(ledger_payload(&store, &username, &today)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LedgerResponse>, AppError> {
    let today = today_string();
    let mut store = state.store.lock().await;
    let username = current_user(&store)?;

    let xp = store.xp.get(&username).copied().unwrap_or(0);
    if let Some(habits) = store.habits.get_mut(&username) {
        let updated = ledger::toggle_completion(habits, xp, &id, &today);
        store.xp.insert(username.clone(), updated);
    }
    persist_ledger(&state, &store, &username).await;

    Ok(Json(ledger_payload(&store, &username, &today)))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let store = state.store.lock().await;
    let username = current_user(&store)?;
    let habits = store
        .habits
        .get(&username)
        .map(|habits| habits.as_slice())
        .unwrap_or(&[]);
    Ok(Json(build_progress(habits)))
}

async fn persist_ledger(state: &AppState, store: &Store, username: &str) {
    if let Some(habits) = store.habits.get(username) {
        storage::write_key(&state.data_dir, &habits_key(username), habits).await;
    }
    if let Some(xp) = store.xp.get(username) {
        storage::write_key(&state.data_dir, &xp_key(username), xp).await;
    }
}

fn current_user(store: &Store) -> Result<String, AppError> {
    store
        .current_user
        .clone()
        .ok_or_else(|| AppError::unauthorized("no user is logged in"))
}

fn session_payload(store: &Store, username: &str) -> SessionResponse {
    let xp = store.xp.get(username).copied().unwrap_or(0);
    SessionResponse {
        username: username.to_string(),
        xp,
        level: level_for(xp),
        level_progress: level_progress(xp),
    }
}

fn ledger_payload(store: &Store, username: &str, today: &str) -> LedgerResponse {
    let habits = store
        .habits
        .get(username)
        .map(|habits| habits.as_slice())
        .unwrap_or(&[]);
    let views = habits
        .iter()
        .map(|habit| HabitView {
            id: habit.id.clone(),
            name: habit.name.clone(),
            category: habit.category,
            streak: display_streak(habit, today),
            completed: habit.completed,
        })
        .collect();

    let xp = store.xp.get(username).copied().unwrap_or(0);
    LedgerResponse {
        habits: views,
        xp,
        level: level_for(xp),
        level_progress: level_progress(xp),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
