use serde::{Deserialize, Serialize};

/// Body the backend returns on failed writes. The message, when present,
/// is meant for the end user verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
