use contracts::domain::a005_request::{CandidateInfo, ResignationRequest};
use leptos::prelude::*;

use crate::domain::reference::chain::ReferenceChain;
use crate::domain::requests::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::notifications::NotificationService;

/// ViewModel of the replacement form: who leaves, plus the incoming
/// candidate's details.
#[derive(Clone, Copy)]
pub struct ReplacementViewModel {
    pub refs: ReferenceChain,
    pub candidate_name: RwSignal<String>,
    pub candidate_cpf: RwSignal<String>,
    pub candidate_phone: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub submitting: RwSignal<bool>,
}

impl ReplacementViewModel {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            refs: ReferenceChain::new(notify),
            candidate_name: RwSignal::new(String::new()),
            candidate_cpf: RwSignal::new(String::new()),
            candidate_phone: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
        }
    }

    pub fn submit_command(&self, notify: NotificationService, nav: AppGlobalContext) {
        let Some(employee) = self.refs.resolved_employee_untracked() else {
            notify.warning("Please select the employee to be replaced.");
            return;
        };

        let candidate = CandidateInfo {
            name: self.candidate_name.get_untracked(),
            cpf: self.candidate_cpf.get_untracked(),
            phone: self.candidate_phone.get_untracked(),
        };
        let payload = ResignationRequest::replacement(
            &employee,
            self.reason.get_untracked(),
            candidate,
        );
        if let Err(message) = payload.validate() {
            notify.warning(message);
            return;
        }

        let submitting = self.submitting;
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_resignation_request(&payload).await {
                Ok(()) => {
                    notify.success("Replacement request submitted successfully!");
                    nav.goto(Route::Requests);
                }
                Err(message) => notify.error(message),
            }
            submitting.set(false);
        });
    }
}
