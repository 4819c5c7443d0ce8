//! Read operations over the backend's reference data. Each call is a
//! single list read filtered by the immediate parent key; callers replace
//! their options wholesale with the result.

use contracts::domain::a001_company::{CompaniesResponse, Company};
use contracts::domain::a002_contract::{Contract, ContractsResponse};
use contracts::domain::a003_employee::{Employee, EmployeesResponse};
use contracts::domain::a004_work_location::{WorkLocation, WorkLocationsResponse};
use contracts::system::auth::UserInfo;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Every client company. Available to privileged profiles only.
pub async fn list_companies() -> Result<Vec<Company>, String> {
    let response = Request::get(&api_url("/api/companies?all=true"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CompaniesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.companies)
}

/// Companies associated with one user account. Returned as a bare array,
/// unlike the enveloped unrestricted listing.
pub async fn list_companies_for_user(user_id: &str) -> Result<Vec<Company>, String> {
    let url = api_url(&format!("/api/associations/users/{}/companies", user_id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Company> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Company listing appropriate for the caller: the unrestricted
/// collection for privileged profiles, the user's associated companies
/// otherwise. The authorization itself lives in the backend; this only
/// picks the read operation.
pub async fn list_companies_for(user: &UserInfo) -> Result<Vec<Company>, String> {
    if user.profile.is_privileged() {
        list_companies().await
    } else {
        list_companies_for_user(&user.id).await
    }
}

/// Contracts of one company.
pub async fn list_contracts(company_id: &str) -> Result<Vec<Contract>, String> {
    let url = api_url(&format!("/api/contracts?companyId={}&all=true", company_id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ContractsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.contracts)
}

/// Employees of one contract.
pub async fn list_employees(contract_id: &str) -> Result<Vec<Employee>, String> {
    let url = api_url(&format!("/api/employees?contractId={}&all=true", contract_id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: EmployeesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.employees)
}

/// All work locations; the transfer form filters them client-side by the
/// resolved employee's contract.
pub async fn list_work_locations() -> Result<Vec<WorkLocation>, String> {
    let response = Request::get(&api_url("/api/work-locations?all=true"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: WorkLocationsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.work_locations)
}
