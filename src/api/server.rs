use crate::api::handlers;
use crate::domain::ports::identity_provider::IdentityProvider;
use crate::TradeBook;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub book: Arc<TradeBook>,
    pub identity: Arc<dyn IdentityProvider>,
}

pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(book: Arc<TradeBook>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            state: Arc::new(AppState { book, identity }),
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/trades", get(handlers::list_trades).post(handlers::create_trade))
            .route(
                "/trades/{id}",
                get(handlers::get_trade)
                    .put(handlers::update_trade)
                    .delete(handlers::delete_trade),
            )
            .route("/summary", get(handlers::summary))
            .route("/dashboard", get(handlers::dashboard))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serves until Ctrl-C.
    pub async fn serve(self, addr: &str) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Trade API listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
