use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui;
use crate::shared::notifications::NotificationService;
use crate::usecases::common::{ChainSelectors, EmployeeDetailsPanel};
use crate::usecases::u101_resignation_request::view_model::ResignationViewModel;

/// Resignation form: pick the client, the contract and then the employee
/// to start the offboarding process.
#[component]
pub fn ResignationFormPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let model = ResignationViewModel::new(notify);
    let refs = model.refs;

    let resolved = Signal::derive(move || refs.resolved_employee());
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
                title="Resignation form"
                subtitle="Select the client, the contract and then the employee to start the process.".to_string()
            />

            <form class="card form-card" on:submit=on_submit>
                <ChainSelectors refs=refs />

                <EmployeeDetailsPanel employee=resolved />

                <ui::Textarea
                    label="Resignation reason".to_string()
                    id="reason".to_string()
                    value=reason_value
                    on_input=Callback::new(move |value| model.reason.set(value))
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
