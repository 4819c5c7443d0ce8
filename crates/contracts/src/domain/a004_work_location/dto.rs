use serde::{Deserialize, Serialize};

use crate::domain::a003_employee::Employee;

/// Work site tied to a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLocation {
    pub id: String,
    pub name: String,
    pub contract_id: String,
}

/// Envelope of `GET /api/work-locations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLocationsResponse {
    #[serde(default)]
    pub work_locations: Vec<WorkLocation>,
}

/// Destinations an employee can be transferred to: every location of the
/// employee's own contract except the one they already occupy.
pub fn candidate_destinations(all: &[WorkLocation], employee: &Employee) -> Vec<WorkLocation> {
    all.iter()
        .filter(|loc| loc.contract_id == employee.contract_id && loc.id != employee.work_location_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, contract_id: &str) -> WorkLocation {
        WorkLocation {
            id: id.to_string(),
            name: format!("Site {}", id),
            contract_id: contract_id.to_string(),
        }
    }

    fn employee_at(contract_id: &str, work_location_id: &str) -> Employee {
        Employee {
            id: "e1".to_string(),
            name: "Ana Souza".to_string(),
            registration: "4401".to_string(),
            cpf: "111.222.333-44".to_string(),
            contract_id: contract_id.to_string(),
            work_location_id: work_location_id.to_string(),
            position_id: "p1".to_string(),
            contract: None,
            position: None,
            work_location: None,
        }
    }

    #[test]
    fn excludes_current_location() {
        let all = vec![location("w1", "c1"), location("w2", "c1")];
        let destinations = candidate_destinations(&all, &employee_at("c1", "w1"));
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].id, "w2");
    }

    #[test]
    fn excludes_other_contracts() {
        let all = vec![
            location("w1", "c1"),
            location("w2", "c1"),
            location("w3", "c2"),
        ];
        let destinations = candidate_destinations(&all, &employee_at("c1", "w1"));
        assert!(destinations.iter().all(|l| l.contract_id == "c1"));
        assert!(destinations.iter().all(|l| l.id != "w1"));
    }

    #[test]
    fn empty_when_no_alternative_exists() {
        let all = vec![location("w1", "c1")];
        assert!(candidate_destinations(&all, &employee_at("c1", "w1")).is_empty());
    }
}
