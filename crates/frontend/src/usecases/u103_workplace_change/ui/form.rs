use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::searchable_select::SearchableSelect;
use crate::shared::components::ui;
use crate::shared::notifications::NotificationService;
use crate::usecases::common::ChainSelectors;
use crate::usecases::u103_workplace_change::view_model::WorkplaceChangeViewModel;

/// Workplace change form: pick the employee, the desired destination and
/// justify the move.
#[component]
pub fn WorkplaceChangeFormPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let model = WorkplaceChangeViewModel::new(notify);
    let refs = model.refs;

    model.load_work_locations(notify);

    let resolved = Signal::derive(move || refs.resolved_employee());
    let resolved_employee_id = Memo::new(move |_| resolved.get().map(|e| e.id));

    // The destination only makes sense for the employee it was picked
    // for; any change of the resolved employee resets it.
    Effect::new(move |_| {
        resolved_employee_id.track();
        model.destination.set(String::new());
    });

    let destination_value = Signal::derive(move || model.destination.get());
    let destination_options = Signal::derive(move || model.destination_choices());
    let destination_disabled = Signal::derive(move || resolved.get().is_none());
    let current_location = Signal::derive(move || {
        resolved
            .get()
            .map(|e| e.work_location_name())
            .unwrap_or_default()
    });
    let reason_value = Signal::derive(move || model.reason.get());
    let date_value = Signal::derive(move || model.suggested_date.get());
    let submitting = Signal::derive(move || model.submitting.get());
    let busy = Signal::derive(move || model.submitting.get() || refs.is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        model.submit_command(notify, ctx);
    };

    view! {
        <div class="page form-page">
            <PageHeader
                title="Workplace change form"
                subtitle="Select the employee, the desired destination and the reason for the move.".to_string()
            />

            <form class="card form-card" on:submit=on_submit>
                <ChainSelectors refs=refs />

                {move || {
                    resolved.get().map(|_| view! {
                        <div class="card employee-details">
                            <h3 class="form-card__section">"Transfer details"</h3>
                            <div class="form__grid">
                                <ui::Input
                                    label="Current work location".to_string()
                                    value=current_location
                                    disabled=Signal::derive(|| true)
                                />
                                <SearchableSelect
                                    label="Desired work location".to_string()
                                    id="newWorkLocationId".to_string()
                                    value=destination_value
                                    on_change=Callback::new(move |id| model.destination.set(id))
                                    options=destination_options
                                    placeholder=Signal::derive(|| "Select the new location".to_string())
                                    disabled=destination_disabled
                                />
                            </div>
                        </div>
                    })
                }}

                <ui::Input
                    label="Suggested date for the move (optional)".to_string()
                    id="suggestedDate".to_string()
                    input_type="date".to_string()
                    value=date_value
                    on_input=Callback::new(move |value| model.suggested_date.set(value))
                    disabled=submitting
                />

                <ui::Textarea
                    label="Reason / justification".to_string()
                    id="reason".to_string()
                    value=reason_value
                    on_input=Callback::new(move |value| model.reason.set(value))
                    placeholder="Describe in detail why the transfer is needed...".to_string()
                    disabled=submitting
                    required=true
                    rows=5
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
