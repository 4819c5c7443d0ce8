pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use global_context::AppGlobalContext;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The sidebar collapses via `AppGlobalContext::toggle_left`; the toggle
/// only swaps a CSS class so the sidebar keeps its state while hidden.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let aside_class = move || {
        if ctx.left_open.get() {
            "shell__left"
        } else {
            "shell__left shell__left--collapsed"
        }
    };

    view! {
        <div class="shell">
            <TopHeader />
            <div class="shell__body">
                <aside class=aside_class>
                    {left()}
                </aside>
                <main class="shell__center">
                    {center()}
                </main>
            </div>
        </div>
    }
}
