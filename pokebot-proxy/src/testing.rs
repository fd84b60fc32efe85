//! In-process stand-in for the emulator control server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

pub type RecordedAction = (String, Option<String>);

#[derive(Clone, Default)]
pub struct ControlServer {
    pub trainer: String,
    pub party: String,
    pub balls: String,
    pub screen: String,
    /// Answer every request with a 500.
    pub fail: bool,
}

struct Shared {
    config: ControlServer,
    requests: Mutex<Vec<RecordedAction>>,
}

pub struct RunningServer {
    pub url: String,
    shared: Arc<Shared>,
}

impl RunningServer {
    /// `/req` calls seen so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedAction> {
        self.shared.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_control_server(config: ControlServer) -> RunningServer {
    let shared = Arc::new(Shared {
        config,
        requests: Mutex::default(),
    });
    let app = Router::new()
        .route("/req", get(action))
        .route("/{resource}", get(resource))
        .with_state(Arc::clone(&shared));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RunningServer {
        url: format!("http://{addr}"),
        shared,
    }
}

async fn action(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let action = params.get("action").cloned().unwrap_or_default();
    shared
        .requests
        .lock()
        .unwrap()
        .push((action.clone(), params.get("val").cloned()));
    if shared.config.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    match action.as_str() {
        "screen" => (StatusCode::OK, shared.config.screen.clone()),
        _ => (StatusCode::OK, "ok".to_string()),
    }
}

async fn resource(
    State(shared): State<Arc<Shared>>,
    Path(resource): Path<String>,
) -> (StatusCode, String) {
    if shared.config.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    match resource.as_str() {
        "trainer" => (StatusCode::OK, shared.config.trainer.clone()),
        "party" => (StatusCode::OK, shared.config.party.clone()),
        "balls" => (StatusCode::OK, shared.config.balls.clone()),
        _ => (StatusCode::NOT_FOUND, String::new()),
    }
}
