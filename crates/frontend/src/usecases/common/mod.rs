//! Pieces shared by the request forms: the cascading selector block and
//! the read-only panel describing the resolved employee.

use contracts::domain::a003_employee::Employee;
use leptos::prelude::*;

use crate::domain::reference::chain::ReferenceChain;
use crate::shared::components::searchable_select::SearchableSelect;
use crate::shared::components::ui;
use crate::system::auth::context::use_auth;

/// Client → contract → employee selector block.
///
/// Loads the client options when the session user becomes known and
/// funnels every change through the shared chain, so all three forms get
/// identical reset and staleness behavior.
#[component]
pub fn ChainSelectors(refs: ReferenceChain) -> impl IntoView {
    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        let Some(user) = auth_state.get().user else {
            return;
        };
        refs.load_companies(user);
    });

    let chain = refs.chain;
    let company_value = Signal::derive(move || {
        chain.with(|c| c.first.selected_id().unwrap_or("").to_string())
    });
    let contract_value = Signal::derive(move || {
        chain.with(|c| c.second.selected_id().unwrap_or("").to_string())
    });
    let employee_value = Signal::derive(move || {
        chain.with(|c| c.third.selected_id().unwrap_or("").to_string())
    });

    let company_options = Signal::derive(move || chain.with(|c| c.first.choices()));
    let contract_options = Signal::derive(move || chain.with(|c| c.second.choices()));
    let employee_options = Signal::derive(move || chain.with(|c| c.third.choices()));

    let company_disabled = Signal::derive(move || chain.with(|c| c.first.is_loading()));
    let contract_disabled = Signal::derive(move || {
        chain.with(|c| c.first.selected_id().is_none() || c.second.is_loading())
    });
    let employee_disabled = Signal::derive(move || {
        chain.with(|c| c.second.selected_id().is_none() || c.third.is_loading())
    });

    let employee_placeholder = Signal::derive(move || {
        chain.with(|c| {
            if c.third.is_loading() {
                "Loading...".to_string()
            } else if c.second.selected_id().is_none() {
                "Select a contract first".to_string()
            } else {
                "Select an employee".to_string()
            }
        })
    });

    view! {
        <div class="form__grid">
            <ui::Select
                label="Client".to_string()
                id="companyId".to_string()
                value=company_value
                on_change=Callback::new(move |id| refs.select_company(id))
                options=company_options
                placeholder="Select the client".to_string()
                disabled=company_disabled
            />
            <ui::Select
                label="Contract".to_string()
                id="contractId".to_string()
                value=contract_value
                on_change=Callback::new(move |id| refs.select_contract(id))
                options=contract_options
                placeholder="Select the contract".to_string()
                disabled=contract_disabled
            />
        </div>
        <SearchableSelect
            label="Employee".to_string()
            id="employeeId".to_string()
            value=employee_value
            on_change=Callback::new(move |id| refs.select_employee(id))
            options=employee_options
            placeholder=employee_placeholder
            disabled=employee_disabled
        />
    }
}

/// Read-only card with the resolved employee's details; hidden until the
/// chain resolves.
#[component]
pub fn EmployeeDetailsPanel(#[prop(into)] employee: Signal<Option<Employee>>) -> impl IntoView {
    let read_only = Signal::derive(|| true);

    let cpf = Signal::derive(move || employee.get().map(|e| e.cpf).unwrap_or_default());
    let position = Signal::derive(move || {
        employee.get().map(|e| e.position_name()).unwrap_or_default()
    });
    let contract = Signal::derive(move || {
        employee.get().map(|e| e.contract_name()).unwrap_or_default()
    });
    let location = Signal::derive(move || {
        employee.get().map(|e| e.work_location_name()).unwrap_or_default()
    });

    view! {
        {move || {
            employee.get().map(|_| view! {
                <div class="card employee-details">
                    <div class="form__grid">
                        <ui::Input label="CPF".to_string() value=cpf disabled=read_only />
                        <ui::Input label="Current position".to_string() value=position disabled=read_only />
                        <ui::Input label="Contract".to_string() value=contract disabled=read_only />
                        <ui::Input label="Work location".to_string() value=location disabled=read_only />
                    </div>
                </div>
            })
        }}
    }
}
