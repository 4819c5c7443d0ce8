use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services: active page + sidebar state, toast notifications.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NotificationHost />
        </AuthProvider>
    }
}
