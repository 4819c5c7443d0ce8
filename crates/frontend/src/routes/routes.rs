use leptos::prelude::*;

use crate::dashboards::d100_management_reports::ui::dashboard::ManagementReportsDashboard;
use crate::domain::requests::ui::list::RequestsListPage;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::usecases::u101_resignation_request::ui::form::ResignationFormPage;
use crate::usecases::u102_replacement_request::ui::form::ReplacementFormPage;
use crate::usecases::u103_workplace_change::ui::form::WorkplaceChangeFormPage;

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        {move || match ctx.route.get() {
            Route::Requests => view! { <RequestsListPage /> }.into_any(),
            Route::Reports => view! { <ManagementReportsDashboard /> }.into_any(),
            Route::NewResignation => view! { <ResignationFormPage /> }.into_any(),
            Route::NewReplacement => view! { <ReplacementFormPage /> }.into_any(),
            Route::NewWorkplaceChange => view! { <WorkplaceChangeFormPage /> }.into_any(),
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Restore the active page from the URL and keep it synced. Runs once
    // when the layout is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
