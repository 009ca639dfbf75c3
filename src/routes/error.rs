use crate::core::{NameError, PokemonName};
use crate::models::ErrorResponse;
use crate::services::PokeApiError;
use actix_web::{error, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Every way a relay request can fail, as seen by the client
///
/// `Display` is the short `message`; [`RelayError::explanation`] is the
/// `error` text. Neither carries upstream or internal error details.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid pokemon name")]
    InvalidInput(#[from] NameError),

    #[error("Pokemon not found")]
    NotFound(String),

    #[error("External service unavailable")]
    Upstream,

    #[error("Network error")]
    Transport,

    #[error("Internal server error")]
    Internal,
}

impl RelayError {
    /// Like the `From` conversion, but an upstream 404 names the missing item
    pub fn for_detail(err: PokeApiError, name: &PokemonName) -> Self {
        if err.is_not_found() {
            RelayError::NotFound(name.to_string())
        } else {
            err.into()
        }
    }

    pub fn explanation(&self) -> String {
        match self {
            RelayError::InvalidInput(reason) => reason.to_string(),
            RelayError::NotFound(name) => format!("No pokemon found with name: {}", name),
            RelayError::Upstream => "Unable to fetch pokemon data from external API".to_string(),
            RelayError::Transport => "Unable to connect to pokemon service".to_string(),
            RelayError::Internal => "An unexpected error occurred".to_string(),
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            error: self.explanation(),
        }
    }
}

impl From<PokeApiError> for RelayError {
    fn from(err: PokeApiError) -> Self {
        match err {
            PokeApiError::Status(_) => RelayError::Upstream,
            PokeApiError::Transport(_) => RelayError::Transport,
            PokeApiError::InvalidResponse(_) | PokeApiError::Request(_) => RelayError::Internal,
        }
    }
}

impl error::ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
            RelayError::Upstream => StatusCode::BAD_GATEWAY,
            RelayError::Transport => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
