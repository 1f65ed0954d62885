//! Server setup and initialization
//!
//! Builds the store, limiters and router from configuration and runs the
//! HTTP server until Ctrl-C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use confession_common::{AppConfig, AppError, ConfigError, StorageBackend};
use confession_core::{ConfessionRepository, SnowflakeGenerator};
use confession_db::{
    create_pool, run_migrations, MemoryConfessionRepository, PgConfessionRepository, PoolConfig,
};
use confession_service::{spawn_sweeper, ServiceContext, SlidingWindowLimiter, WordListFilter};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let router = create_router();
    let router = apply_middleware(router, &config.cors);
    router.with_state(state)
}

/// Open the configured confession store
pub async fn create_repository(
    config: &AppConfig,
    ids: Arc<SnowflakeGenerator>,
) -> Result<Arc<dyn ConfessionRepository>, AppError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using the in-memory store; confessions are lost on restart");
            Ok(Arc::new(MemoryConfessionRepository::with_max_length(
                ids,
                config.message.max_length,
            )))
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(database))
                .await
                .map_err(AppError::database)?;

            if database.run_migrations {
                run_migrations(&pool).await.map_err(AppError::database)?;
                info!("Database migrations applied");
            }

            Ok(Arc::new(PgConfessionRepository::new(pool, ids)))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    let ids = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));
    let repository = create_repository(config, ids).await?;

    let confession_limiter = Arc::new(SlidingWindowLimiter::from_rule(&config.rate_limit.confession));
    let reaction_limiter = Arc::new(SlidingWindowLimiter::from_rule(&config.rate_limit.reaction));

    let service_context = ServiceContext::builder()
        .confession_repo(repository)
        .content_filter(Arc::new(WordListFilter::default()))
        .confession_limiter(confession_limiter.clone())
        .reaction_limiter(reaction_limiter.clone())
        .max_message_length(config.message.max_length)
        .build()
        .map_err(AppError::internal)?;

    Ok(AppState::new(
        service_context,
        vec![confession_limiter, reaction_limiter],
    ))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener.local_addr()?;
    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = create_app_state(&config).await?;

    let sweeper = config
        .rate_limit
        .sweep_interval()
        .map(|every| spawn_sweeper(state.limiters().to_vec(), every));

    let app = create_app(state, &config);
    let listener = TcpListener::bind(config.api.address()).await?;

    let result = run_server(listener, app).await;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    result
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let config = AppConfig::in_memory();
        let state = create_app_state(&config).await.unwrap();
        create_app(state, &config)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = app().await;

        let (status, created) =
            send(&app, post_json("/confessions", &json!({ "message": "  first  " }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["message"], "first");
        assert_eq!(created["totalReactions"], 0);
        assert!(created["id"].is_string());
        // The unknown-client bucket hash is exposed to every caller
        assert_eq!(created["ipHash"].as_str().map(str::len), Some(64));

        let (status, page) = send(
            &app,
            Request::get("/confessions?sort=new&page=1&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["page"], 1);
        assert_eq!(page["hasMore"], false);
        assert_eq!(page["confessions"][0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_missing_message() {
        let app = app().await;
        let request = Request::post("/confessions").body(Body::from("{oops")).unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Message is required" }));
    }

    #[tokio::test]
    async fn test_bad_pagination() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Request::get("/confessions?limit=0").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "limit must be a positive integer" }));
    }

    #[tokio::test]
    async fn test_page_far_past_the_end_is_empty() {
        let app = app().await;
        send(&app, post_json("/confessions", &json!({ "message": "only one" }))).await;

        let (status, page) = send(
            &app,
            Request::get("/confessions?page=9223372036854775807&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["confessions"], json!([]));
        assert_eq!(page["hasMore"], false);
        assert_eq!(page["page"], i64::MAX);
    }

    #[tokio::test]
    async fn test_reaction_on_unknown_confession() {
        let app = app().await;
        let (status, body) = send(
            &app,
            post_json(
                "/reactions",
                &json!({ "confessionId": "987654321", "reactionType": "love" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Confession not found" }));
    }

    #[tokio::test]
    async fn test_method_not_allowed_and_options() {
        let app = app().await;

        for (method, uri) in [
            (Method::DELETE, "/confessions"),
            (Method::PUT, "/confessions"),
            (Method::GET, "/reactions"),
            (Method::PATCH, "/reactions"),
        ] {
            let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, json!({ "error": "Method not allowed" }));
        }

        // HEAD responses carry no body, only the status
        for uri in ["/confessions", "/reactions"] {
            let request = Request::head(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }

        for uri in ["/confessions", "/reactions"] {
            let request = Request::builder()
                .method(Method::OPTIONS)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, Value::Null);
        }
    }

    #[tokio::test]
    async fn test_cors_and_request_id_headers() {
        let app = app().await;
        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_readiness_on_memory_store() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Request::get("/health/ready").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["storage"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = app().await;
        let (status, body) = send(&app, Request::get("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}
