//! Transient toast notifications.
//!
//! `NotificationService` lives in the leptos context; any page can push a
//! message and forget about it. `NotificationHost` renders the stack in a
//! fixed corner and messages dismiss themselves after a few seconds, or
//! on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    fn class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "toast toast--info",
            NotificationLevel::Success => "toast toast--success",
            NotificationLevel::Warning => "toast toast--warning",
            NotificationLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Fire-and-forget notification sink, provided once at the app root.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, level: NotificationLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|list| {
            list.push(Notification { id, level, message });
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            items.update(|list| list.retain(|n| n.id != id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack; mount once inside the app root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.level.class() on:click=move |_| service.dismiss(id)>
                            {n.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
