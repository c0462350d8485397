use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::protocol::RequestHandler;
use crate::server::routes::create_router;
use crate::storage::open_store;

/// The account server: one listener and one document store, both acquired at
/// startup and held until shutdown.
pub struct Server {
    listener: TcpListener,
    handler: RequestHandler,
    config: ServerConfig,
}

impl Server {
    /// Opens the document store and binds the listener.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let stores = open_store(&config.store_uri).await?;

        let socket_addr = config.socket_addr();
        let listener = match TcpListener::bind(&socket_addr).await {
            Ok(listener) => {
                info!("Server bound to {}", socket_addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket_addr, e);
                return Err(ServerError::Io(e));
            }
        };

        Ok(Self {
            listener,
            handler: RequestHandler::new(stores),
            config,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until Ctrl+C or SIGTERM, then releases the store.
    pub async fn start(self) -> Result<(), ServerError> {
        info!(
            "Starting RAX account server on {} (store: {})",
            self.config.socket_addr(),
            self.config.store_uri
        );

        let app = create_router(self.handler, self.config.max_body_size_bytes());

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
