use actix_web::{web, App, HttpServer};
use telepic_backend::config::db::{DbConfig, ServerConfig};
use telepic_backend::infra::state::build_state;
use telepic_backend::middleware::{RequestTrace, TraceSpan};
use telepic_backend::{routes, telemetry, AppError};
use tracing::{error, info};

fn load_config() -> Result<(ServerConfig, DbConfig), AppError> {
    Ok((ServerConfig::from_env()?, DbConfig::from_env()?))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let (server, db) = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(db).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "Starting telepic backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
