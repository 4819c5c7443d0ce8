//! Sidebar with the page menu, grouped by area.

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(Route, &'static str)>, // (route, icon)
    privileged_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Reports",
            items: vec![(Route::Reports, "bar-chart")],
            privileged_only: true,
        },
        MenuGroup {
            label: "Requests",
            items: vec![
                (Route::Requests, "file-text"),
                (Route::NewResignation, "user-minus"),
                (Route::NewReplacement, "repeat"),
                (Route::NewWorkplaceChange, "map-pin"),
            ],
            privileged_only: false,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_privileged = move || {
        auth_state
            .get()
            .user
            .map(|u| u.profile.is_privileged())
            .unwrap_or(false)
    };

    view! {
        <nav class="sidebar">
            <For
                each=move || {
                    menu_groups()
                        .into_iter()
                        .filter(|group| !group.privileged_only || is_privileged())
                        .collect::<Vec<_>>()
                }
                key=|group| group.label
                children=move |group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(route, icon_name)| {
                                    let item_class = move || {
                                        if ctx.route.get() == route {
                                            "sidebar__item sidebar__item--active"
                                        } else {
                                            "sidebar__item"
                                        }
                                    };
                                    view! {
                                        <button class=item_class on:click=move |_| ctx.goto(route)>
                                            {icon(icon_name)}
                                            <span>{route.title()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </nav>
    }
}
