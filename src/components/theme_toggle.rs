//! Light/dark theme toggle button.
//!
//! DESIGN
//! ======
//! The applied theme lives in an `RwSignal<Theme>` owned by the root `App`,
//! not in ambient document state; this button is the only writer. Each click
//! flips the class on `<html>` and persists the choice in the same motion.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Header button that flips between light and dark presentation.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            on:click=move |_| {
                let next = crate::util::theme::toggle(theme.get());
                theme.set(next);
            }
            title="Toggle theme"
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
