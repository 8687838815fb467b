// src/main.rs

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use relieftrack_backend::{config::AppState, docs::ApiDoc, handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // If configuration fails the application should not start.
    let app_state = AppState::new()
        .await
        .expect("Failed to initialize application state.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Failed to run database migrations.");

    tracing::info!("✅ Database migrations applied!");

    let inventory_routes = Router::new()
        .route(
            "/",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        .route(
            "/{id}",
            put(handlers::inventory::update_item).delete(handlers::inventory::delete_item),
        );

    let household_routes = Router::new()
        .route(
            "/",
            get(handlers::households::list_households).post(handlers::households::create_household),
        )
        .route(
            "/{id}",
            put(handlers::households::update_household)
                .delete(handlers::households::delete_household),
        );

    let distribution_routes = Router::new().route(
        "/",
        get(handlers::distributions::list_distributions)
            .post(handlers::distributions::record_distribution),
    );

    let activity_routes = Router::new()
        .route("/", get(handlers::activity::list_activity))
        .route("/live", get(handlers::activity::live_activity));

    let dashboard_routes = Router::new().route("/summary", get(handlers::dashboard::get_summary));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/inventory", inventory_routes)
        .nest("/api/households", household_routes)
        .nest("/api/distributions", distribution_routes)
        .nest("/api/activity", activity_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    tracing::info!("🚀 Server listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Axum server error");
}
