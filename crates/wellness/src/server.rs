use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::error::{WellnessError, WellnessResult};
use crate::state::AppState;

pub mod admin;
pub mod booking;
pub mod chat;
pub mod community;
pub mod emergency;
pub mod error;
pub mod openapi;
pub mod query;
pub mod resources;
pub mod survey;

/// Builds the HTTP router over `state`.
pub fn router(state: Arc<AppState>, cors_any: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .route("/api/survey", post(survey::submit).get(survey::list))
        .route("/api/survey/:id", get(survey::get_survey))
        .route(
            "/api/community/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route(
            "/api/community/posts/:id/replies",
            get(community::list_replies).post(community::create_reply),
        )
        .route("/api/community/posts/:id/hearts", post(community::heart_post))
        .route("/api/community/categories", get(community::categories))
        .route("/api/resources", get(resources::list_resources))
        .route("/api/resources/categories", get(resources::categories))
        .route("/api/resources/:id", get(resources::get_resource))
        .route("/api/resources/:id/related", get(resources::related))
        .route("/api/counselors", get(booking::list_counselors))
        .route("/api/counselors/:id/slots", get(booking::available_slots))
        .route("/api/bookings", post(booking::book_session))
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/prompts", get(chat::prompts))
        .route("/api/chat/sessions/:id", get(chat::transcript))
        .route("/api/emergency/contacts", get(emergency::list_contacts))
        .route("/api/admin/overview", get(admin::overview))
        .route("/api/admin/alerts/:id/resolve", post(admin::resolve_alert))
        .route("/api/admin/alerts/:id/escalate", post(admin::escalate_alert))
        .with_state(state);

    if cors_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    state: Arc<AppState>,
}

impl Server {
    /// Binds `config.addr()` and serves in the background until shut down
    /// or dropped. Port 0 picks a free port.
    pub async fn new(config: &ServerConfig, state: Arc<AppState>) -> WellnessResult<Self> {
        let app = router(state.clone(), config.cors_any);
        let listener = TcpListener::bind(config.addr())
            .await
            .map_err(|error| WellnessError::Internal(format!("bind {}: {error}", config.addr())))?;
        let addr = listener
            .local_addr()
            .map_err(|error| WellnessError::Internal(error.to_string()))?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
            {
                tracing::error!(%error, "server stopped with error");
            }
        });
        tracing::info!(%addr, "wellness server listening");

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
            task: Some(task),
            state,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Signals graceful shutdown without waiting for it.
    pub fn shutdown(&mut self) -> WellnessResult<()> {
        match self.shutdown.take() {
            Some(sender) => sender.send(()).map_err(|_| {
                WellnessError::Internal("failed to send server shutdown signal".to_string())
            }),
            None => Ok(()),
        }
    }

    /// Signals shutdown and waits until in-flight requests have drained.
    pub async fn stop(mut self) -> WellnessResult<()> {
        // the serve task may already have exited, closing the channel
        let _ = self.shutdown();
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|error| WellnessError::Internal(format!("server task failed: {error}")))?;
        }
        tracing::info!(addr = %self.addr, "wellness server stopped");
        Ok(())
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

async fn health() -> &'static str {
    "ok"
}
