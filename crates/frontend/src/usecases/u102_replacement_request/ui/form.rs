use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui;
use crate::shared::notifications::NotificationService;
use crate::usecases::common::{ChainSelectors, EmployeeDetailsPanel};
use crate::usecases::u102_replacement_request::view_model::ReplacementViewModel;

/// Replacement form: who leaves and the candidate taking their place.
#[component]
pub fn ReplacementFormPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let model = ReplacementViewModel::new(notify);
    let refs = model.refs;

    let resolved = Signal::derive(move || refs.resolved_employee());
    let candidate_name = Signal::derive(move || model.candidate_name.get());
    let candidate_cpf = Signal::derive(move || model.candidate_cpf.get());
    let candidate_phone = Signal::derive(move || model.candidate_phone.get());
    let reason_value = Signal::derive(move || model.reason.get());
    let submitting = Signal::derive(move || model.submitting.get());
    let busy = Signal::derive(move || model.submitting.get() || refs.is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        model.submit_command(notify, ctx);
    };

    view! {
        <div class="page form-page">
            <PageHeader
                title="Replacement form"
                subtitle="Tell us who leaves and the details of the incoming candidate.".to_string()
            />

            <form class="card form-card" on:submit=on_submit>
                <h3 class="form-card__section">"Employee to be replaced"</h3>
                <ChainSelectors refs=refs />

                <EmployeeDetailsPanel employee=resolved />

                <h3 class="form-card__section">"New candidate"</h3>
                <div class="form__grid">
                    <ui::Input
                        label="Full name".to_string()
                        id="candidateName".to_string()
                        value=candidate_name
                        on_input=Callback::new(move |value| model.candidate_name.set(value))
                        disabled=submitting
                        required=true
                    />
                    <ui::Input
                        label="CPF".to_string()
                        id="candidateCpf".to_string()
                        value=candidate_cpf
                        on_input=Callback::new(move |value| model.candidate_cpf.set(value))
                        disabled=submitting
                        required=true
                    />
                </div>
                <ui::Input
                    label="Contact phone".to_string()
                    id="candidatePhone".to_string()
                    value=candidate_phone
                    on_input=Callback::new(move |value| model.candidate_phone.set(value))
                    disabled=submitting
                    required=true
                />

                <ui::Textarea
                    label="Reason / justification".to_string()
                    id="reason".to_string()
                    value=reason_value
                    on_input=Callback::new(move |value| model.reason.set(value))
                    placeholder="Describe why the replacement is needed.".to_string()
                    disabled=submitting
                    required=true
                    rows=4
                />

                <div class="form-card__actions">
                    <ui::Button
                        variant="secondary".to_string()
                        disabled=submitting
                        on_click=Callback::new(move |_| ctx.goto(Route::Requests))
                    >
                        "Cancel"
                    </ui::Button>
                    <ui::Button button_type="submit".to_string() disabled=busy>
                        {move || if model.submitting.get() { "Submitting..." } else { "Submit request" }}
                    </ui::Button>
                </div>
            </form>
        </div>
    }
}
