use actix_web::{middleware, web, App, HttpServer};
use pokedex_relay::config::{LoggingSettings, Settings};
use pokedex_relay::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG wins over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting Pokedex relay...");

    let app_state = AppState::from_settings(&settings).map_err(|e| {
        error!("Failed to create PokeAPI client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "PokeAPI client initialized (base: {}, timeout: {}ms)",
        app_state.pokeapi.base_url(),
        settings.upstream.timeout_ms
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let cors_settings = settings.cors.clone();

    info!("Allowing browser origin {}", cors_settings.client_url);
    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(routes::cors(&cors_settings))
            .wrap(routes::security_headers(&cors_settings))
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
