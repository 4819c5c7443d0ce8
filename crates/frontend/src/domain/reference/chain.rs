//! Signal wiring of the client → contract → employee chain.
//!
//! All three request forms drive the same chain the same way; the shared
//! piece lives here so each form only adds its own fields on top. Fetch
//! failures surface one level-scoped notification and leave the failed
//! level's options empty, keeping the parent selection intact.

use contracts::domain::a001_company::Company;
use contracts::domain::a002_contract::Contract;
use contracts::domain::a003_employee::Employee;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use crate::domain::reference::api;
use crate::shared::cascade::Cascade3;
use crate::shared::notifications::NotificationService;

#[derive(Clone, Copy)]
pub struct ReferenceChain {
    pub chain: RwSignal<Cascade3<Company, Contract, Employee>>,
    notify: NotificationService,
}

impl ReferenceChain {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            chain: RwSignal::new(Cascade3::new()),
            notify,
        }
    }

    /// Load the first level. The source depends on the caller's profile:
    /// privileged users list every client, the rest only their own.
    pub fn load_companies(&self, user: UserInfo) {
        let Some(ticket) = self.chain.try_update(|c| c.first.begin_fetch()) else {
            return;
        };
        let chain = self.chain;
        let notify = self.notify;
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_companies_for(&user).await {
                Ok(companies) => {
                    chain.update(|c| {
                        c.first.apply_options(ticket, companies);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load companies: {}", err);
                    let current = chain.try_update(|c| c.first.fail(ticket)).unwrap_or(false);
                    if current {
                        notify.error("Failed to load the client list.");
                    }
                }
            }
        });
    }

    /// Select a client; repopulates the contract level and clears
    /// everything below it.
    pub fn select_company(&self, id: String) {
        let company_id = id.clone();
        let Some(ticket) = self.chain.try_update(|c| c.select_first(Some(id))).flatten() else {
            return;
        };
        let chain = self.chain;
        let notify = self.notify;
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_contracts(&company_id).await {
                Ok(contracts) => {
                    chain.update(|c| {
                        c.second.apply_options(ticket, contracts);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load contracts: {}", err);
                    let current = chain.try_update(|c| c.second.fail(ticket)).unwrap_or(false);
                    if current {
                        notify.error("Failed to load the client's contracts.");
                    }
                }
            }
        });
    }

    /// Select a contract; repopulates the employee level.
    pub fn select_contract(&self, id: String) {
        let contract_id = id.clone();
        let Some(ticket) = self.chain.try_update(|c| c.select_second(Some(id))).flatten() else {
            return;
        };
        let chain = self.chain;
        let notify = self.notify;
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_employees(&contract_id).await {
                Ok(employees) => {
                    chain.update(|c| {
                        c.third.apply_options(ticket, employees);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load employees: {}", err);
                    let current = chain.try_update(|c| c.third.fail(ticket)).unwrap_or(false);
                    if current {
                        notify.error("Failed to load the contract's employees.");
                    }
                }
            }
        });
    }

    pub fn select_employee(&self, id: String) {
        self.chain.update(|c| c.select_third(Some(id)));
    }

    /// Reactive read of the resolved employee.
    pub fn resolved_employee(&self) -> Option<Employee> {
        self.chain.with(|c| c.resolve().cloned())
    }

    /// Non-tracking read, for submit handlers.
    pub fn resolved_employee_untracked(&self) -> Option<Employee> {
        self.chain.with_untracked(|c| c.resolve().cloned())
    }

    /// True while any level of the chain is loading options.
    pub fn is_loading(&self) -> bool {
        self.chain.with(|c| {
            c.first.is_loading() || c.second.is_loading() || c.third.is_loading()
        })
    }
}
