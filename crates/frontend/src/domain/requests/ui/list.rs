use contracts::domain::a005_request::RequestSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::requests::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::notifications::NotificationService;

/// Submitted requests: landing page after any successful submission.
#[component]
pub fn RequestsListPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let (rows, set_rows) = signal(Vec::<RequestSummary>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_requests().await {
                Ok(requests) => {
                    set_rows.set(requests);
                }
                Err(err) => {
                    log::error!("Failed to load requests: {}", err);
                    notify.error("Failed to load the requests list.");
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page requests-list">
            <PageHeader title="Requests" subtitle="Submitted workflow requests".to_string()>
                <Flex gap=FlexGap::Small>
                    <Button
                        size=ButtonSize::Small
                        on_click=move |_| ctx.goto(Route::NewResignation)
                    >
                        "New resignation"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        on_click=move |_| ctx.goto(Route::NewReplacement)
                    >
                        "New replacement"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        on_click=move |_| ctx.goto(Route::NewWorkplaceChange)
                    >
                        "New workplace change"
                    </Button>
                </Flex>
            </PageHeader>

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading..."</div> }.into_any();
                }
                if rows.get().is_empty() {
                    return view! {
                        <div class="page__empty">"No requests submitted yet."</div>
                    }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Workflow"</th>
                                <th>"Employee"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|r| r.id.clone()
                                children=move |r| {
                                    view! {
                                        <tr>
                                            <td>{r.workflow_name.label()}</td>
                                            <td>{r.employee_name.clone()}</td>
                                            <td>{r.status.clone()}</td>
                                            <td>{format_date(&r.created_at)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
