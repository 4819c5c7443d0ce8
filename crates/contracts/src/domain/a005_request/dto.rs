use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_employee::Employee;

/// Business process a submitted request belongs to. Sent as a plain
/// discriminator string; `POST /api/requests/resignation` serves both the
/// resignation and the replacement workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowName {
    #[serde(rename = "RESIGNATION")]
    Resignation,
    #[serde(rename = "REPLACEMENT")]
    Replacement,
    #[serde(rename = "WORKPLACE_CHANGE")]
    WorkplaceChange,
}

impl WorkflowName {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowName::Resignation => "Resignation",
            WorkflowName::Replacement => "Replacement",
            WorkflowName::WorkplaceChange => "Workplace change",
        }
    }
}

/// Incoming candidate attached to a replacement request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateInfo {
    pub name: String,
    pub cpf: String,
    pub phone: String,
}

/// Payload of `POST /api/requests/resignation`.
///
/// The foreign keys are copied from the resolved employee when the payload
/// is built, never re-derived later; the backend expects the snapshot the
/// requester was looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResignationRequest {
    pub workflow_name: WorkflowName,
    pub employee_id: String,
    pub reason: String,
    pub company_id: String,
    pub contract_id: String,
    pub work_location_id: String,
    pub position_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_phone: Option<String>,
}

impl ResignationRequest {
    /// Resignation payload for the given employee.
    pub fn resignation(employee: &Employee, reason: String) -> Self {
        Self::build(WorkflowName::Resignation, employee, reason, None)
    }

    /// Replacement payload: same wire shape plus the incoming candidate.
    pub fn replacement(employee: &Employee, reason: String, candidate: CandidateInfo) -> Self {
        Self::build(WorkflowName::Replacement, employee, reason, Some(candidate))
    }

    fn build(
        workflow_name: WorkflowName,
        employee: &Employee,
        reason: String,
        candidate: Option<CandidateInfo>,
    ) -> Self {
        Self {
            workflow_name,
            employee_id: employee.id.clone(),
            reason,
            company_id: employee.company_id(),
            contract_id: employee.contract_id.clone(),
            work_location_id: employee.work_location_id.clone(),
            position_id: employee.position_id.clone(),
            candidate_name: candidate.as_ref().map(|c| c.name.clone()),
            candidate_cpf: candidate.as_ref().map(|c| c.cpf.clone()),
            candidate_phone: candidate.map(|c| c.phone),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.employee_id.trim().is_empty() {
            return Err("An employee must be selected".to_string());
        }
        if self.reason.trim().is_empty() {
            return Err("Reason is required".to_string());
        }
        if self.workflow_name == WorkflowName::Replacement {
            let filled = |field: &Option<String>| {
                field.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
            };
            if !filled(&self.candidate_name) {
                return Err("Candidate name is required".to_string());
            }
            if !filled(&self.candidate_cpf) {
                return Err("Candidate CPF is required".to_string());
            }
            if !filled(&self.candidate_phone) {
                return Err("Candidate phone is required".to_string());
            }
        }
        Ok(())
    }
}

/// Payload of `POST /api/requests/workplace-change`.
///
/// `work_location_id` is the employee's location at submit time; the
/// requested destination travels in `new_work_location_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplaceChangeRequest {
    pub employee_id: String,
    pub new_work_location_id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_date: Option<NaiveDate>,
    pub company_id: String,
    pub contract_id: String,
    pub work_location_id: String,
    pub position_id: String,
}

impl WorkplaceChangeRequest {
    pub fn from_employee(
        employee: &Employee,
        new_work_location_id: String,
        reason: String,
        suggested_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            employee_id: employee.id.clone(),
            new_work_location_id,
            reason,
            suggested_date,
            company_id: employee.company_id(),
            contract_id: employee.contract_id.clone(),
            work_location_id: employee.work_location_id.clone(),
            position_id: employee.position_id.clone(),
        }
    }

    /// Client-side fast fail; the backend re-validates all of this.
    pub fn validate(&self, today: NaiveDate) -> Result<(), String> {
        if self.employee_id.trim().is_empty() {
            return Err("An employee must be selected".to_string());
        }
        if self.new_work_location_id.trim().is_empty() {
            return Err("A destination work location must be selected".to_string());
        }
        if self.reason.trim().is_empty() {
            return Err("Reason is required".to_string());
        }
        if let Some(date) = self.suggested_date {
            if date < today {
                return Err("The suggested date for the change cannot be in the past".to_string());
            }
        }
        Ok(())
    }
}

/// Row of the submitted-requests listing (`GET /api/requests`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub id: String,
    pub workflow_name: WorkflowName,
    pub employee_name: String,
    pub status: String,
    pub created_at: String,
}

/// Envelope of `GET /api/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestsResponse {
    #[serde(default)]
    pub requests: Vec<RequestSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_employee::{ContractSummary, PositionSummary, WorkLocationSummary};

    fn resolved_employee() -> Employee {
        Employee {
            id: "e7".to_string(),
            name: "Carlos Lima".to_string(),
            registration: "5120".to_string(),
            cpf: "222.333.444-55".to_string(),
            contract_id: "ct2".to_string(),
            work_location_id: "w9".to_string(),
            position_id: "pos3".to_string(),
            contract: Some(ContractSummary {
                id: "ct2".to_string(),
                name: "Facilities North".to_string(),
                company_id: "co1".to_string(),
            }),
            position: Some(PositionSummary {
                id: "pos3".to_string(),
                name: "Janitor".to_string(),
            }),
            work_location: Some(WorkLocationSummary {
                id: "w9".to_string(),
                name: "Plant 9".to_string(),
            }),
        }
    }

    #[test]
    fn resignation_denormalizes_keys_from_employee() {
        let payload = ResignationRequest::resignation(&resolved_employee(), "test".to_string());
        assert_eq!(payload.workflow_name, WorkflowName::Resignation);
        assert_eq!(payload.employee_id, "e7");
        assert_eq!(payload.company_id, "co1");
        assert_eq!(payload.contract_id, "ct2");
        assert_eq!(payload.work_location_id, "w9");
        assert_eq!(payload.position_id, "pos3");
        assert!(payload.candidate_name.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn resignation_requires_reason() {
        let payload = ResignationRequest::resignation(&resolved_employee(), "  ".to_string());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn replacement_requires_candidate_fields() {
        let candidate = CandidateInfo {
            name: "Joana Reis".to_string(),
            cpf: String::new(),
            phone: "11 99999-0000".to_string(),
        };
        let payload =
            ResignationRequest::replacement(&resolved_employee(), "backfill".to_string(), candidate);
        assert_eq!(payload.workflow_name, WorkflowName::Replacement);
        assert!(payload.validate().unwrap_err().contains("CPF"));
    }

    #[test]
    fn wire_shape_is_camel_case_and_omits_absent_candidate() {
        let payload = ResignationRequest::resignation(&resolved_employee(), "test".to_string());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["workflowName"], "RESIGNATION");
        assert_eq!(json["employeeId"], "e7");
        assert_eq!(json["workLocationId"], "w9");
        assert!(json.get("candidateName").is_none());
    }

    #[test]
    fn workplace_change_rejects_past_suggested_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let payload = WorkplaceChangeRequest::from_employee(
            &resolved_employee(),
            "w2".to_string(),
            "closer to home".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 9),
        );
        assert!(payload.validate(today).is_err());

        let payload = WorkplaceChangeRequest {
            suggested_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..payload
        };
        assert!(payload.validate(today).is_ok());
    }

    #[test]
    fn workplace_change_keeps_current_location_in_work_location_id() {
        let payload = WorkplaceChangeRequest::from_employee(
            &resolved_employee(),
            "w2".to_string(),
            "reason".to_string(),
            None,
        );
        assert_eq!(payload.work_location_id, "w9");
        assert_eq!(payload.new_work_location_id, "w2");
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("suggestedDate").is_none());
        assert_eq!(json["newWorkLocationId"], "w2");
    }
}
