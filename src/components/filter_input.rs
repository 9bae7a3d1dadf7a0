//! Shared filter box for the sidebar and the component index.
//!
//! DESIGN
//! ======
//! Both client-side filters wire the same controlled input; only the element
//! id, placeholder, and the fields matched downstream differ. The raw text
//! lands in an `RwSignal<String>` owned by the hosting component, which
//! re-derives visibility on every keystroke with no debounce.

use leptos::prelude::*;

/// Text input driving a client-side filter.
#[component]
pub fn FilterInput(
    /// Element id the surrounding page styles against.
    id: &'static str,
    placeholder: &'static str,
    /// Raw query text, updated on every input event.
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            id=id
            class="filter-input"
            type="search"
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}
