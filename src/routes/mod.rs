// Route exports
pub mod error;
pub mod middleware;
pub mod pokemon;

pub use error::RelayError;
pub use middleware::{cors, security_headers};
pub use pokemon::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(pokemon::configure),
    );
}
