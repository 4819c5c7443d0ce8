use serde::{Deserialize, Serialize};

/// Employee record as served by `GET /api/employees?contractId=..`.
///
/// Carries flat foreign keys plus denormalized summaries of the joined
/// rows, so request payloads can copy the keys without extra lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Payroll registration number, shown next to the name in selectors.
    pub registration: String,
    pub cpf: String,
    pub contract_id: String,
    pub work_location_id: String,
    pub position_id: String,
    #[serde(default)]
    pub contract: Option<ContractSummary>,
    #[serde(default)]
    pub position: Option<PositionSummary>,
    #[serde(default)]
    pub work_location: Option<WorkLocationSummary>,
}

impl Employee {
    /// Company key of the employee's contract, empty when the backend
    /// did not join the contract summary in.
    pub fn company_id(&self) -> String {
        self.contract
            .as_ref()
            .map(|c| c.company_id.clone())
            .unwrap_or_default()
    }

    pub fn position_name(&self) -> String {
        self.position
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    pub fn contract_name(&self) -> String {
        self.contract
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    pub fn work_location_name(&self) -> String {
        self.work_location
            .as_ref()
            .map(|w| w.name.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub id: String,
    pub name: String,
    pub company_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLocationSummary {
    pub id: String,
    pub name: String,
}

/// Envelope of `GET /api/employees?contractId=..`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
}
