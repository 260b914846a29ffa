use axum::{Router, middleware, routing::get};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_auth_axum::{FOLIO_ROUTE_PREFIX, auth_router, redirect_unauthenticated};

mod handlers;
mod server;

use crate::handlers::{
    about, contact, cv, dashboard, dashboard_section, index, login_page, projects, services,
};
use crate::server::spawn_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/projects", get(projects))
        .route("/cv", get(cv))
        .route("/contact", get(contact))
        .route("/login", get(login_page))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/{section}", get(dashboard_section))
        .nest(FOLIO_ROUTE_PREFIX.as_str(), auth_router())
        .layer(middleware::from_fn(redirect_unauthenticated));

    let http_server = spawn_http_server(3000, app);
    http_server.await?;
    Ok(())
}
