use contracts::domain::a004_work_location::{candidate_destinations, WorkLocation};
use contracts::domain::a005_request::WorkplaceChangeRequest;
use leptos::prelude::*;

use crate::domain::reference::api as reference_api;
use crate::domain::reference::chain::ReferenceChain;
use crate::domain::requests::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::cascade::ChainItem;
use crate::shared::date_utils::{parse_input_date, today};
use crate::shared::notifications::NotificationService;

/// ViewModel of the workplace change form.
///
/// On top of the shared chain it keeps the full work-location list; the
/// destination options are derived from the resolved employee (same
/// contract, minus the current location) and the destination selection is
/// reset whenever the employee changes.
#[derive(Clone, Copy)]
pub struct WorkplaceChangeViewModel {
    pub refs: ReferenceChain,
    pub all_locations: RwSignal<Vec<WorkLocation>>,
    pub destination: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub suggested_date: RwSignal<String>,
    pub submitting: RwSignal<bool>,
}

impl WorkplaceChangeViewModel {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            refs: ReferenceChain::new(notify),
            all_locations: RwSignal::new(Vec::new()),
            destination: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
            suggested_date: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
        }
    }

    /// Fetch the full work-location list once, on page mount.
    pub fn load_work_locations(&self, notify: NotificationService) {
        let all_locations = self.all_locations;
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::list_work_locations().await {
                Ok(locations) => all_locations.set(locations),
                Err(err) => {
                    log::error!("Failed to load work locations: {}", err);
                    notify.error("Failed to load the work location list.");
                }
            }
        });
    }

    /// Candidate destinations for the currently resolved employee.
    pub fn destination_choices(&self) -> Vec<(String, String)> {
        let Some(employee) = self.refs.resolved_employee() else {
            return Vec::new();
        };
        self.all_locations.with(|all| {
            candidate_destinations(all, &employee)
                .iter()
                .map(|loc| (loc.id().to_string(), loc.label()))
                .collect()
        })
    }

    pub fn submit_command(&self, notify: NotificationService, nav: AppGlobalContext) {
        let Some(employee) = self.refs.resolved_employee_untracked() else {
            notify.warning("Please select an employee.");
            return;
        };

        let payload = WorkplaceChangeRequest::from_employee(
            &employee,
            self.destination.get_untracked(),
            self.reason.get_untracked(),
            parse_input_date(&self.suggested_date.get_untracked()),
        );
        if let Err(message) = payload.validate(today()) {
            notify.warning(message);
            return;
        }

        let submitting = self.submitting;
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_workplace_change_request(&payload).await {
                Ok(()) => {
                    notify.success("Workplace change request submitted successfully!");
                    nav.goto(Route::Requests);
                }
                Err(message) => notify.error(message),
            }
            submitting.set(false);
        });
    }
}
