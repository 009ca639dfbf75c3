use serde::{Deserialize, Serialize};

/// Path parameters for `GET /api/pokemon/{name}`
///
/// The raw segment is kept as sent; normalization and validation happen in
/// [`crate::core::name`] before any upstream call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailPath {
    pub name: String,
}
