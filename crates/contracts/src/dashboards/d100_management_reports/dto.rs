use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date window of the reports page. `to` may be absent while the
/// user is still picking the second bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

/// Filter state of the management reports page. Empty ids mean "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub company_id: String,
    pub contract_id: String,
    pub period: Option<DateRange>,
}

impl ReportFilters {
    /// Query parameters for both report reads. Empty filters produce no
    /// parameters at all; dates are serialized as RFC 3339 instants at
    /// UTC midnight.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.company_id.is_empty() {
            pairs.push(("companyId", self.company_id.clone()));
        }
        if !self.contract_id.is_empty() {
            pairs.push(("contractId", self.contract_id.clone()));
        }
        if let Some(period) = &self.period {
            pairs.push(("startDate", iso_instant(period.from)));
            if let Some(to) = period.to {
                pairs.push(("endDate", iso_instant(to)));
            }
        }
        pairs
    }
}

fn iso_instant(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Aggregate KPIs of `GET /api/reports/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub admissions: u32,
    pub departures: u32,
    pub replacements: u32,
    /// Percentage, already computed server-side.
    pub turnover: f64,
}

/// One row of the hiring time series (`GET /api/reports/hiring-overview`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyHiring {
    /// Month label, "YYYY-MM".
    pub month: String,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_parameters() {
        let filters = ReportFilters::default();
        assert!(filters.to_query_pairs().is_empty());
    }

    #[test]
    fn populated_filters_serialize_iso_bounds() {
        let filters = ReportFilters {
            company_id: "c1".to_string(),
            contract_id: String::new(),
            period: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 3, 31),
            }),
        };
        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("companyId", "c1".to_string()),
                ("startDate", "2025-03-01T00:00:00.000Z".to_string()),
                ("endDate", "2025-03-31T00:00:00.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn open_ended_period_omits_end_date() {
        let filters = ReportFilters {
            company_id: String::new(),
            contract_id: "ct1".to_string(),
            period: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                to: None,
            }),
        };
        let pairs = filters.to_query_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().any(|(k, _)| *k == "contractId"));
        assert!(!pairs.iter().any(|(k, _)| *k == "endDate"));
    }
}
