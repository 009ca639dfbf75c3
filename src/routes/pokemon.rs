use crate::config::Settings;
use crate::core::PokemonName;
use crate::models::{DetailPath, HealthResponse};
use crate::routes::RelayError;
use crate::services::{PokeApiClient, PokeApiError};
use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pokeapi: Arc<PokeApiClient>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self, PokeApiError> {
        Ok(Self {
            pokeapi: Arc::new(PokeApiClient::new(&settings.upstream)?),
        })
    }
}

/// Configure all pokemon routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pokemons", web::get().to(list_pokemons))
        .route("/pokemon/{name}", web::get().to(get_pokemon));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List endpoint
///
/// GET /api/pokemons
///
/// Returns the upstream `results` array for the first page, unmodified.
async fn list_pokemons(state: web::Data<AppState>) -> Result<HttpResponse, RelayError> {
    let results = state.pokeapi.list().await.map_err(|e| {
        tracing::error!(operation = "list_pokemons", "Error fetching pokemon list: {}", e);
        RelayError::from(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(results.get().to_owned()))
}

/// Detail endpoint
///
/// GET /api/pokemon/{name}
///
/// The name is normalized and validated before PokeAPI is called; the
/// upstream body is relayed as-is.
async fn get_pokemon(
    state: web::Data<AppState>,
    path: web::Path<DetailPath>,
) -> Result<HttpResponse, RelayError> {
    let raw = path.into_inner().name;

    let name = PokemonName::parse(&raw).map_err(|e| {
        tracing::info!(operation = "get_pokemon", name = ?raw, "Rejected pokemon name: {}", e);
        RelayError::from(e)
    })?;

    let body = state.pokeapi.detail(&name).await.map_err(|e| {
        tracing::error!(operation = "get_pokemon", name = %name, "Error fetching pokemon {}: {}", name, e);
        RelayError::for_detail(e, &name)
    })?;

    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}
