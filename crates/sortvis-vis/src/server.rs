//! Axum web server with WebSocket streaming for visualization.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sortvis_core::{Algorithm, PacingParameter};
use tokio::sync::broadcast::{self, error::RecvError};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::config::VisConfig;
use crate::controller::{Admission, RunController, RunStatus};
use crate::error::Result;
use crate::events::{ChartSnapshot, SurfaceEvent};
use crate::surface::StreamingSurface;

/// Controller type served over HTTP.
pub type SharedController = RunController<StreamingSurface>;

/// Visualization server.
pub struct VisServer {
    controller: SharedController,
}

impl VisServer {
    /// Create a server with a freshly generated array.
    pub fn new(config: &VisConfig) -> Self {
        let surface = StreamingSurface::new(config.container_width, config.event_capacity);
        Self {
            controller: RunController::new(surface, config.pacing, config.rng()),
        }
    }

    pub fn controller(&self) -> &SharedController {
        &self.controller
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Serve the frontend
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/array/new", post(new_array_handler))
            .route("/api/pacing", post(pacing_handler))
            .route("/api/resize", post(resize_handler))
            .route("/api/run", post(run_handler))
            // WebSocket for live surface updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.controller.clone())
    }

    /// Run the server until it fails.
    pub async fn serve(self, addr: std::net::SocketAddr) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Visualization server running on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Serve the frontend page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Reply to every control request.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub admission: Admission,
    pub status: RunStatus,
}

async fn respond(controller: &SharedController, admission: Admission) -> Json<CommandResponse> {
    Json(CommandResponse {
        admission,
        status: controller.status().await,
    })
}

async fn status_handler(State(controller): State<SharedController>) -> Json<RunStatus> {
    Json(controller.status().await)
}

async fn snapshot_handler(State(controller): State<SharedController>) -> Json<ChartSnapshot> {
    Json(controller.read().await.surface().snapshot())
}

async fn new_array_handler(State(controller): State<SharedController>) -> Json<CommandResponse> {
    let admission = controller.regenerate().await;
    respond(&controller, admission).await
}

#[derive(Deserialize)]
struct PacingRequest {
    value: u8,
}

async fn pacing_handler(
    State(controller): State<SharedController>,
    Json(req): Json<PacingRequest>,
) -> Json<CommandResponse> {
    let admission = controller.set_pacing(PacingParameter::new(req.value)).await;
    respond(&controller, admission).await
}

#[derive(Deserialize)]
struct ResizeRequest {
    width: u32,
}

async fn resize_handler(
    State(controller): State<SharedController>,
    Json(req): Json<ResizeRequest>,
) -> Json<CommandResponse> {
    let admission = controller.on_resize(req.width).await;
    respond(&controller, admission).await
}

#[derive(Deserialize)]
struct RunRequest {
    algorithm: Algorithm,
}

async fn run_handler(
    State(controller): State<SharedController>,
    Json(req): Json<RunRequest>,
) -> Json<CommandResponse> {
    let admission = start_run(&controller, req.algorithm).await;
    respond(&controller, admission).await
}

/// Kick off a run without waiting for it; the WebSocket carries progress.
async fn start_run(controller: &SharedController, algorithm: Algorithm) -> Admission {
    match controller.new_run(algorithm).await {
        Some(_handle) => Admission::Accepted,
        None => Admission::Busy,
    }
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(controller): State<SharedController>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, controller))
}

async fn handle_ws(mut socket: WebSocket, controller: SharedController) {
    info!("WebSocket client connected");

    // Snapshot and subscription under one lock so no event falls in between
    let (snapshot, mut events) = {
        let state = controller.read().await;
        (state.surface().snapshot(), state.surface().subscribe())
    };

    if let Err(e) = send_json(&mut socket, &SurfaceEvent::Snapshot(snapshot)).await {
        warn!("Failed to send initial snapshot: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<WsCommand>(&text) {
                            Ok(cmd) => {
                                let response = handle_ws_command(&controller, cmd).await;
                                if let Err(e) = send_json(&mut socket, &response).await {
                                    warn!("Failed to send response: {}", e);
                                    break;
                                }
                            }
                            Err(e) => debug!("Ignoring malformed command: {}", e),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            event = events.recv() => {
                let event = match event {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(skipped, "client lagged, resending snapshot");
                        events = resubscribe(&controller, &mut socket).await;
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };
                if let Err(e) = send_json(&mut socket, &event).await {
                    warn!("Failed to forward event: {}", e);
                    break;
                }
            }
        }
    }
}

/// Catch a lagging client up with a fresh snapshot and subscription.
async fn resubscribe(
    controller: &SharedController,
    socket: &mut WebSocket,
) -> broadcast::Receiver<SurfaceEvent> {
    let (snapshot, events) = {
        let state = controller.read().await;
        (state.surface().snapshot(), state.surface().subscribe())
    };
    if let Err(e) = send_json(socket, &SurfaceEvent::Snapshot(snapshot)).await {
        warn!("Failed to resend snapshot: {}", e);
    }
    events
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    GetStatus,
    GetSnapshot,
    NewArray,
    Pacing { value: u8 },
    Resize { width: u32 },
    Run { algorithm: Algorithm },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    Status(RunStatus),
    Snapshot(ChartSnapshot),
    Command {
        admission: Admission,
        status: RunStatus,
    },
}

async fn handle_ws_command(controller: &SharedController, cmd: WsCommand) -> WsResponse {
    let admission = match cmd {
        WsCommand::GetStatus => return WsResponse::Status(controller.status().await),
        WsCommand::GetSnapshot => {
            return WsResponse::Snapshot(controller.read().await.surface().snapshot())
        }
        WsCommand::NewArray => controller.regenerate().await,
        WsCommand::Pacing { value } => controller.set_pacing(PacingParameter::new(value)).await,
        WsCommand::Resize { width } => controller.on_resize(width).await,
        WsCommand::Run { algorithm } => start_run(controller, algorithm).await,
    };
    WsResponse::Command {
        admission,
        status: controller.status().await,
    }
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    socket.send(Message::Text(json.into())).await?;
    Ok(())
}
