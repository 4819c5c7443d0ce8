use contracts::dashboards::d100_management_reports::{DateRange, ReportFilters};
use contracts::domain::a001_company::Company;
use contracts::domain::a002_contract::Contract;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_management_reports::{api, state::ReportQueryState};
use crate::domain::reference;
use crate::shared::cascade::Cascade2;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::hiring_chart::HiringChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui;
use crate::shared::date_utils::parse_input_date;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::use_auth;

fn period_from_inputs(from: &str, to: &str) -> Option<DateRange> {
    let from = parse_input_date(from)?;
    Some(DateRange {
        from,
        to: parse_input_date(to),
    })
}

/// Management reports: KPI cards and the monthly hiring chart, scoped by
/// client / contract / period filters.
#[component]
pub fn ManagementReportsDashboard() -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let (auth_state, _) = use_auth();

    let chain = RwSignal::new(Cascade2::<Company, Contract>::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let query = RwSignal::new(ReportQueryState::new());

    // Load the company filter options once the session user is known.
    Effect::new(move |_| {
        let Some(user) = auth_state.get().user else {
            return;
        };
        let Some(ticket) = chain.try_update(|c| c.first.begin_fetch()) else {
            return;
        };
        spawn_local(async move {
            match reference::api::list_companies_for(&user).await {
                Ok(companies) => {
                    chain.update(|c| {
                        c.first.apply_options(ticket, companies);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load companies: {}", err);
                    let current = chain
                        .try_update(|c| c.first.fail(ticket))
                        .unwrap_or(false);
                    if current {
                        notify.error("Failed to load the client list.");
                    }
                }
            }
        });
    });

    let on_company_change = move |id: String| {
        let company_id = id.clone();
        let Some(ticket) = chain
            .try_update(|c| c.select_first(Some(id)))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match reference::api::list_contracts(&company_id).await {
                Ok(contracts) => {
                    chain.update(|c| {
                        c.second.apply_options(ticket, contracts);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load contracts: {}", err);
                    let current = chain
                        .try_update(|c| c.second.fail(ticket))
                        .unwrap_or(false);
                    if current {
                        notify.error("Failed to load the client's contracts.");
                    }
                }
            }
        });
    };

    let on_contract_change = move |id: String| {
        chain.update(|c| c.select_second(Some(id)));
    };

    // Memoized filter keys, so option-list updates inside the chain do
    // not retrigger the report reads.
    let company_filter = Memo::new(move |_| {
        chain.with(|c| c.first.selected_id().unwrap_or("").to_string())
    });
    let contract_filter = Memo::new(move |_| {
        chain.with(|c| c.second.selected_id().unwrap_or("").to_string())
    });

    // Re-run both report reads whenever the filter state changes.
    Effect::new(move |_| {
        let filters = ReportFilters {
            company_id: company_filter.get(),
            contract_id: contract_filter.get(),
            period: period_from_inputs(&date_from.get(), &date_to.get()),
        };
        let Some(ticket) = query.try_update(|q| q.begin()) else {
            return;
        };

        let stats_filters = filters.clone();
        spawn_local(async move {
            let result = api::get_report_stats(&stats_filters).await;
            let failed = result.is_err();
            if let Err(err) = &result {
                log::error!("Failed to load report stats: {}", err);
            }
            let current = query
                .try_update(|q| q.apply_stats(ticket, result.map_err(|_| ())))
                .unwrap_or(false);
            if current && failed {
                notify.error("Failed to load the report statistics.");
            }
        });

        spawn_local(async move {
            let result = api::get_hiring_overview(&filters).await;
            let failed = result.is_err();
            if let Err(err) = &result {
                log::error!("Failed to load hiring overview: {}", err);
            }
            let current = query
                .try_update(|q| q.apply_hiring(ticket, result.map_err(|_| ())))
                .unwrap_or(false);
            if current && failed {
                notify.error("Failed to load the hiring overview.");
            }
        });
    });

    let company_options = Signal::derive(move || chain.with(|c| c.first.choices()));
    let contract_options = Signal::derive(move || chain.with(|c| c.second.choices()));
    let company_value = Signal::derive(move || company_filter.get());
    let contract_value = Signal::derive(move || contract_filter.get());
    let company_disabled = Signal::derive(move || chain.with(|c| c.first.is_loading()));
    let contract_disabled = Signal::derive(move || {
        chain.with(|c| c.first.selected_id().is_none() || c.second.is_loading())
    });

    let loading = move || query.with(|q| q.is_loading());
    let admissions =
        Signal::derive(move || query.with(|q| q.stats.as_ref().map(|s| f64::from(s.admissions))));
    let departures =
        Signal::derive(move || query.with(|q| q.stats.as_ref().map(|s| f64::from(s.departures))));
    let replacements =
        Signal::derive(move || query.with(|q| q.stats.as_ref().map(|s| f64::from(s.replacements))));
    let turnover = Signal::derive(move || query.with(|q| q.stats.as_ref().map(|s| s.turnover)));
    let neutral = Signal::derive(|| IndicatorStatus::Neutral);
    let hiring = Signal::derive(move || query.with(|q| q.hiring.clone()));

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
    });

    view! {
        <div class="page d100-dashboard">
            <PageHeader
                title="Management reports"
                subtitle="Admissions, departures and turnover by client, contract and period".to_string()
            />

            <div class="card filter-card">
                <div class="filter-card__row">
                    <ui::Select
                        label="Client".to_string()
                        value=company_value
                        on_change=Callback::new(on_company_change)
                        options=company_options
                        placeholder="All clients".to_string()
                        disabled=company_disabled
                    />
                    <ui::Select
                        label="Contract".to_string()
                        value=contract_value
                        on_change=Callback::new(on_contract_change)
                        options=contract_options
                        placeholder="All contracts".to_string()
                        disabled=contract_disabled
                    />
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range_change
                        label="Period".to_string()
                    />
                </div>
            </div>

            <div class=move || {
                if loading() {
                    "stat-grid stat-grid--loading"
                } else {
                    "stat-grid"
                }
            }>
                <StatCard
                    label="Admissions in period".to_string()
                    icon_name="user-plus".to_string()
                    value=admissions
                    format=ValueFormat::Integer
                    status=neutral
                />
                <StatCard
                    label="Departures in period".to_string()
                    icon_name="user-minus".to_string()
                    value=departures
                    format=ValueFormat::Integer
                    status=neutral
                />
                <StatCard
                    label="Replacements in period".to_string()
                    icon_name="repeat".to_string()
                    value=replacements
                    format=ValueFormat::Integer
                    status=neutral
                />
                <StatCard
                    label="Turnover".to_string()
                    icon_name="users".to_string()
                    value=turnover
                    format=ValueFormat::Percent { decimals: 1 }
                    status=neutral
                />
            </div>

            <div class="card chart-card">
                <h2 class="chart-card__title">"Hiring overview"</h2>
                <div class="chart-card__subtitle">
                    "Completed admissions per month in the selected period."
                </div>
                {move || {
                    if hiring.get().is_empty() {
                        view! {
                            <div class="chart-card__empty">
                                "No admissions found in the period."
                            </div>
                        }.into_any()
                    } else {
                        view! { <HiringChart data=hiring /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn period_requires_a_from_date() {
        assert_eq!(period_from_inputs("", "2025-03-31"), None);
        let period = period_from_inputs("2025-03-01", "").unwrap();
        assert_eq!(period.from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(period.to, None);
    }

    #[test]
    fn full_period_parses_both_bounds() {
        let period = period_from_inputs("2025-03-01", "2025-03-31").unwrap();
        assert_eq!(period.to, NaiveDate::from_ymd_opt(2025, 3, 31));
    }
}
