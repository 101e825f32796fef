use serde::{Deserialize, Serialize};

/// Error body returned by failing endpoints.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub detail: String,
}

/// Confirmation body returned by successful mutations.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
