//! User Directory Server
//!
//! Serves the user API on the configured address. Settings come from the
//! environment (optionally a `.env` file); see [`user_directory::config`].

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use user_directory::{
    api::{AppState, RouterBuilder},
    config::AppConfig,
    service::UserStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let config = AppConfig::from_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    log::info!("Starting User Directory v{}", user_directory::VERSION);

    config.validate()?;
    log::info!("Configuration loaded and validated");

    let user_store = UserStore::with_page_size(config.api.default_page_size);
    let app_state = AppState::new(user_store);

    let middleware = config.middleware;
    let app = RouterBuilder::with_all_routes()
        .with_middleware(middleware, &config.api.api_token)
        .build(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .into_inner(),
        );

    log::info!("Middleware:");
    log::info!("   - Error handling: {}", middleware.error_handling);
    log::info!("   - Bearer token authentication: {}", middleware.authentication);
    log::info!("   - Request logging: {}", middleware.request_logging);
    log::info!("Default page size: {}", config.api.default_page_size);

    log::info!("API Endpoints:");
    log::info!("   GET    /             - Greeting");
    log::info!("   GET    /health       - Health check");
    log::info!("   GET    /users        - List users (?page=&pageSize=)");
    log::info!("   GET    /users/{{id}}   - Get user");
    log::info!("   POST   /users        - Create user");
    log::info!("   PUT    /users/{{id}}   - Update user");
    log::info!("   DELETE /users/{{id}}   - Delete user");

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Server listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
