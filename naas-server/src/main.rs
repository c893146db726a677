mod api;
mod config;
mod handlers;
mod logging;
mod metrics;
mod middleware;
mod state;

use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use state::AppState;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Config is read before the subscriber exists; it picks the log format.
    let (config, config_warnings) = ServerConfig::from_env();
    logging::init_logging(config.log_format);
    for warning in &config_warnings {
        warn!("{}", warning);
    }
    metrics::init_metrics();

    info!("Starting naas server with config: {:?}", config);

    let state = AppState::new(config.id_strategy);

    let listen_addr = config.listen_addr();
    info!("Starting HTTP server on {}", listen_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::RequestLogger)
            .app_data(web::Data::new(state.clone()))
            .app_data(api::rest::json_config())
            .configure(api::rest::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(&listen_addr)?.run().await
}
