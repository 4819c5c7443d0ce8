use serde::{Deserialize, Serialize};

/// Service contract between a client company and the agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub name: String,
    pub company_id: String,
}

/// Envelope of `GET /api/contracts?companyId=..`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractsResponse {
    #[serde(default)]
    pub contracts: Vec<Contract>,
}
