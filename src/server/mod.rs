//! JSON API over the loaded catalog.
//!
//! # Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/api/products/{category}` | Paginated listing (`mice`, `keyboards`, `audio`, `monitors`) |
//! | GET | `/api/search` | Keyword search, optionally within one category |
//! | POST | `/api/filter` | Candidate IDs after the hard filters |
//! | POST | `/api/recommendations/{category}` | Scored top picks and alternates |
//!
//! Every response carries the configured allowed origin and a fixed set of
//! security headers. Search and filter requests are rate limited per
//! client IP (`CF-Connecting-IP`).

use std::{sync::Arc, time::Duration};

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        HeaderValue,
    },
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod state;

use crate::error::{Error, Result};
use config::Config;
use middleware::api_guard;
use routes::{filter_candidates, list_products, not_found, recommend, search_products};
use state::AppState;

/// Builds the API router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let origin = HeaderValue::from_str(&state.config.allowed_origin).unwrap_or_else(|e| {
        warn!("Invalid ALLOWED_ORIGIN '{}': {e}, using *", state.config.allowed_origin);
        HeaderValue::from_static("*")
    });

    Router::new()
        .route("/api/products/{category}", get(list_products))
        .route("/api/search", get(search_products))
        .route("/api/filter", post(filter_candidates))
        .route("/api/recommendations/{category}", post(recommend))
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), api_guard))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(state)
}

/// Loads configuration and catalog, then serves until Ctrl-C or SIGTERM.
pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load();

    info!("Initializing state...");
    let state = AppState::load(config)?;

    let pruner = tokio::spawn(prune_rate_limits(state.clone()));

    let address = state.config.addr.clone();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.map_err(Error::Server)?;
    info!("Server running on {address}");

    let served = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pruner.abort();
    if let Err(e) = &served {
        error!("Server error: {e}");
    }
    info!("Server shut down");

    served.map_err(Error::Server)
}

/// Periodically drops expired rate-limit windows.
async fn prune_rate_limits(state: Arc<AppState>) {
    let period = state.limiter.window().max(Duration::from_secs(1));
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        state.limiter.prune().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{
        Category, KeyboardProduct, MonitorProduct, MouseAttributes, MouseProduct, PriceTier,
    };
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn mouse(id: &str, name: &str, wireless: bool) -> MouseProduct {
        MouseProduct::new(id, Category::Mouse)
            .with_name(name)
            .with_brand("Razer")
            .with_price(100.0, 150.0)
            .with_tag("esports")
            .with_attributes(MouseAttributes {
                wireless,
                price_tier: PriceTier::Premium,
                ..MouseAttributes::default()
            })
    }

    fn test_state(config: Config) -> Arc<AppState> {
        let mice = vec![
            mouse("viper-v3-pro", "Viper V3 Pro", true),
            mouse("deathadder-v3", "DeathAdder V3", false),
            mouse("basilisk-v3", "Basilisk V3", false),
        ];
        let keyboards = vec![KeyboardProduct::new("huntsman-v3", Category::Keyboard)
            .with_name("Huntsman V3 Pro")
            .with_brand("Razer")
            .with_price(200.0, 250.0)];
        let monitors: Vec<MonitorProduct> = Vec::new();
        let catalog = Catalog::from_products(mice, Vec::new(), keyboards, monitors).unwrap();
        AppState::new(config, catalog)
    }

    fn app() -> Router {
        router(test_state(Config::default()))
    }

    async fn send(app: Router, request: Request<Body>) -> (Response<()>, Value) {
        let response = app.oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (Response::from_parts(parts, ()), json)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn mouse_answers() -> Value {
        json!({
            "hand-size": "medium",
            "grip-style": ["palm"],
            "weight-preference": ["light"],
            "wireless": "wired",
            "primary-use": ["mixed"],
        })
    }

    #[tokio::test]
    async fn test_list_products_pagination() {
        let (response, body) = send(app(), get_req("/api/products/mice?page=2&limit=2")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], "basilisk-v3");
        assert_eq!(
            body["pagination"],
            json!({
                "page": 2,
                "limit": 2,
                "totalProducts": 3,
                "totalPages": 2,
                "hasNextPage": false,
                "hasPreviousPage": true,
            })
        );
    }

    #[tokio::test]
    async fn test_list_products_errors() {
        let (response, body) = send(app(), get_req("/api/products/tablets")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid category");
        assert_eq!(
            body["validCategories"],
            json!(["mice", "keyboards", "audio", "monitors"])
        );

        let (response, body) = send(app(), get_req("/api/products/mice?limit=101")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "limit must be between 1 and 100");

        let (response, _) = send(app(), get_req("/api/products/mice?page=0")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search() {
        let (response, body) = send(app(), get_req("/api/search?q=Razer%20V3&limit=2")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body["query"], "razer v3");
        assert_eq!(body["returnedResults"], 2);
        assert_eq!(body["hasMore"], true);
        assert_eq!(body["category"], Value::Null);
        assert_eq!(response.headers()["x-ratelimit-remaining"], "29");

        let (_, body) = send(app(), get_req("/api/search?q=huntsman&category=keyboard")).await;
        assert_eq!(body["returnedResults"], 1);
        assert_eq!(body["category"], "keyboard");
        assert_eq!(body["hasMore"], false);
    }

    #[tokio::test]
    async fn test_search_errors() {
        let (response, body) = send(app(), get_req("/api/search?q=%20%20")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "q parameter is required");

        let (_, body) = send(app(), get_req("/api/search?q=razer&category=mice")).await;
        assert_eq!(body["error"], "Invalid category");
        assert_eq!(
            body["validCategories"],
            json!(["mouse", "keyboard", "audio", "monitor"])
        );

        let (_, body) = send(app(), get_req("/api/search?q=razer&limit=51")).await;
        assert_eq!(body["error"], "limit must be between 1 and 50");
    }

    #[tokio::test]
    async fn test_filter() {
        let request = json!({ "category": "mouse", "answers": mouse_answers(), "maxCandidates": 1 });
        let (response, body) = send(app(), post_req("/api/filter", request)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body["candidateIds"], json!(["deathadder-v3"]));
        assert_eq!(body["totalProducts"], 3);
        assert_eq!(body["totalCandidates"], 2);
        assert_eq!(body["returnedCandidates"], 1);
        assert_eq!(body["category"], "mouse");
    }

    #[tokio::test]
    async fn test_filter_errors() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/filter")
            .body(Body::from("{oops"))
            .unwrap();
        let (response, body) = send(app(), request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON body");

        let request = json!({ "category": "mouse", "answers": {}, "maxCandidates": 501 });
        let (_, body) = send(app(), post_req("/api/filter", request)).await;
        assert_eq!(body["error"], "Invalid request");

        let mut answers = mouse_answers();
        answers["grip-style"] = json!([]);
        let request = json!({ "category": "mouse", "answers": answers });
        let (response, body) = send(app(), post_req("/api/filter", request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid answers for category");
        assert_eq!(body["category"], "mouse");
    }

    #[tokio::test]
    async fn test_recommendations() {
        let request = json!({ "answers": mouse_answers(), "minScore": 0, "topPickCount": 1 });
        let (response, body) = send(app(), post_req("/api/recommendations/mouse", request)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body["totalEvaluated"], 3);
        assert_eq!(body["topPicks"].as_array().unwrap().len(), 1);
        assert_eq!(body["alternates"].as_array().unwrap().len(), 1);
        assert_eq!(body["filters"]["category"], "mouse");
    }

    #[tokio::test]
    async fn test_preflight_and_security_headers() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/filter")
            .body(Body::empty())
            .unwrap();
        let (response, _) = send(app(), request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        assert_eq!(headers["access-control-max-age"], "86400");
        assert_eq!(headers["access-control-allow-origin"], "*");

        let (response, _) = send(app(), get_req("/api/products/mice")).await;
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(
            headers["strict-transport-security"],
            "max-age=31536000; includeSubDomains"
        );
        assert!(headers.get("x-ratelimit-remaining").is_none());
    }

    #[tokio::test]
    async fn test_rate_limit_exceeded() {
        let config = Config {
            filter_rate_limit: 1,
            allowed_origin: "https://gear.example".to_string(),
            ..Config::default()
        };
        let app = router(test_state(config));
        let body = json!({ "category": "mouse", "answers": mouse_answers() });

        let request = |body: &Value| {
            let mut req = post_req("/api/filter", body.clone());
            req.headers_mut()
                .insert("cf-connecting-ip", HeaderValue::from_static("203.0.113.9"));
            req
        };

        let (response, _) = send(app.clone(), request(&body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-ratelimit-remaining"], "0");

        let (response, json) = send(app.clone(), request(&body)).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["retry-after"], "60");
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://gear.example"
        );
        assert_eq!(json, json!({ "error": "Too many requests", "retryAfterSeconds": 60 }));

        let (response, _) = send(app, post_req("/api/filter", body)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (response, body) = send(app(), get_req("/api/nothing")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }
}
