//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::router::{health_routes, method_not_allowed, not_found};
use crate::core::module::Module;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP application
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register_module(RestaurantModule::in_memory())
///     .build();
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
        }
    }

    /// Register a single entity descriptor
    pub fn register_entity(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Register every entity of a module
    pub fn register_module(mut self, module: impl Module) -> Self {
        module.register_entities(&mut self.entity_registry);
        tracing::info!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "registered module"
        );
        self
    }

    /// Registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Build the final router
    ///
    /// Includes the health route, every entity's routes, JSON
    /// fallbacks for unknown paths (404) and unsupported methods (405),
    /// request tracing and permissive CORS.
    pub fn build(self) -> Router {
        health_routes()
            .merge(self.entity_registry.build_routes())
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let paths = self.entity_registry.collection_paths();
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, resources = ?paths, "Server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::EntityDescriptor;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    struct PingDescriptor;

    impl EntityDescriptor for PingDescriptor {
        fn entity_type(&self) -> &str {
            "ping"
        }

        fn plural(&self) -> &str {
            "pings"
        }

        fn build_routes(&self) -> Router {
            Router::new().route("/pings", get(|| async { "pong" }))
        }
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[test]
    fn test_register_entity() {
        let builder = ServerBuilder::new().register_entity(PingDescriptor);
        assert_eq!(builder.entity_types(), vec!["ping"]);
    }

    #[tokio::test]
    async fn test_routes_and_fallbacks() {
        let app = || ServerBuilder::new().register_entity(PingDescriptor).build();

        assert_eq!(status_of(app(), "GET", "/pings").await, StatusCode::OK);
        assert_eq!(status_of(app(), "GET", "/health").await, StatusCode::OK);
        assert_eq!(status_of(app(), "GET", "/nowhere").await, StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(app(), "DELETE", "/pings").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
