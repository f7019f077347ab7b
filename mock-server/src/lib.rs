//! Fixture HTTP server for exercising the client's classification cascade.
//!
//! Serves a small user store on the success routes plus one route per error
//! arm: 401, 500, an off-taxonomy status, a success status with an empty
//! body, and a success status with a non-JSON body.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/unauthorized", get(|| async { StatusCode::UNAUTHORIZED }))
        .route("/error", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }))
        .route("/empty", get(|| async { StatusCode::OK }))
        .route("/garbled", get(|| async { "this is not json" }))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let users = db.read().await;
    Json(users.values().cloned().collect())
}

// The client under test sends no request body, so creation takes no input
// and mints a fixed-name user.
async fn create_user(State(db): State<Db>) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4(),
        name: "Dummy".to_string(),
    };
    db.write().await.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<User>, StatusCode> {
    let users = db.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
