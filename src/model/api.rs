use serde::{Deserialize, Serialize};

/// Uniform error payload returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}
