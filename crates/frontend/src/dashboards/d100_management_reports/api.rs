use contracts::dashboards::d100_management_reports::{MonthlyHiring, ReportFilters, ReportStats};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url_with_query;

/// Aggregate KPIs scoped by the current filters.
pub async fn get_report_stats(filters: &ReportFilters) -> Result<ReportStats, String> {
    let url = api_url_with_query("/api/reports/stats", &filters.to_query_pairs());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Monthly hiring time series, same filter scope as the stats read.
pub async fn get_hiring_overview(filters: &ReportFilters) -> Result<Vec<MonthlyHiring>, String> {
    let url = api_url_with_query("/api/reports/hiring-overview", &filters.to_query_pairs());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
