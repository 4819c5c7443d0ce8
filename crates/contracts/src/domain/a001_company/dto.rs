use serde::{Deserialize, Serialize};

/// Client company the employees are outsourced to.
///
/// Reference data owned by the backend; the dashboard only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub trade_name: String,
    pub corporate_name: String,
}

impl Company {
    /// Name shown in selectors: trade name, falling back to the legal name.
    pub fn display_name(&self) -> &str {
        if self.trade_name.trim().is_empty() {
            &self.corporate_name
        } else {
            &self.trade_name
        }
    }
}

/// Envelope of `GET /api/companies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompaniesResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
}
