use contracts::domain::a005_request::ResignationRequest;
use leptos::prelude::*;

use crate::domain::reference::chain::ReferenceChain;
use crate::domain::requests::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::notifications::NotificationService;

/// ViewModel of the resignation form: the shared selection chain plus the
/// free-text reason.
#[derive(Clone, Copy)]
pub struct ResignationViewModel {
    pub refs: ReferenceChain,
    pub reason: RwSignal<String>,
    pub submitting: RwSignal<bool>,
}

impl ResignationViewModel {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            refs: ReferenceChain::new(notify),
            reason: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
        }
    }

    /// Submit the request. Without a resolved employee nothing is sent;
    /// on failure the form keeps its state so the user can retry.
    pub fn submit_command(&self, notify: NotificationService, nav: AppGlobalContext) {
        let Some(employee) = self.refs.resolved_employee_untracked() else {
            notify.warning("Please select an employee.");
            return;
        };

        let payload =
            ResignationRequest::resignation(&employee, self.reason.get_untracked());
        if let Err(message) = payload.validate() {
            notify.warning(message);
            return;
        }

        let submitting = self.submitting;
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_resignation_request(&payload).await {
                Ok(()) => {
                    notify.success("Resignation request submitted successfully!");
                    nav.goto(Route::Requests);
                }
                Err(message) => notify.error(message),
            }
            submitting.set(false);
        });
    }
}
