use leptos::prelude::*;

/// Type-ahead select for long option lists (employees, work sites).
///
/// Renders as a text input; focusing it opens the option list filtered by
/// the typed query. Selection happens on mousedown so it wins the race
/// against the input's blur, which closes the list.
#[component]
pub fn SearchableSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected option id ("" = nothing selected)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the picked option id
    on_change: Callback<String>,
    /// Options: Vec of (id, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder, reactive so callers can reflect loading state
    #[prop(into)]
    placeholder: Signal<String>,
    /// Disabled state
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let input_id = move || id.get().unwrap_or_default();

    let selected_label = move || {
        let current = value.get();
        options
            .get()
            .into_iter()
            .find(|(id, _)| *id == current)
            .map(|(_, label)| label)
            .unwrap_or_default()
    };

    let display_value = move || {
        if open.get() {
            query.get()
        } else {
            selected_label()
        }
    };

    let filtered = move || {
        let needle = query.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="form__group searchable-select">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=display_value
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                autocomplete="off"
                on:focus=move |_| {
                    query.set(String::new());
                    open.set(true);
                }
                on:blur=move |_| open.set(false)
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || {
                if !open.get() || disabled.get() {
                    return view! { <></> }.into_any();
                }
                let items = filtered();
                if items.is_empty() {
                    return view! {
                        <div class="searchable-select__menu">
                            <div class="searchable-select__empty">"No matches"</div>
                        </div>
                    }.into_any();
                }
                view! {
                    <div class="searchable-select__menu">
                        <For
                            each=move || filtered()
                            key=|(id, _)| id.clone()
                            children=move |(id, label)| {
                                let id_for_class = id.clone();
                                let option_class = move || {
                                    if value.get() == id_for_class {
                                        "searchable-select__option searchable-select__option--selected"
                                    } else {
                                        "searchable-select__option"
                                    }
                                };
                                view! {
                                    <div
                                        class=option_class
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            on_change.run(id.clone());
                                            open.set(false);
                                        }
                                    >
                                        {label}
                                    </div>
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}
