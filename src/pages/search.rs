//! Full-text search page backed by the documentation server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the request lifecycle: submitting a query registers it with
//! [`SearchState`] and fetches asynchronously; the response presents its
//! token back so a slow older request can never overwrite a newer query's
//! pane. Failures render the fixed error message and log one diagnostic
//! line to the console.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::nav_sidebar::NavSidebar;
use crate::components::search_results::SearchResults;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::search::SearchState;
use crate::state::site::SiteIndex;

/// Search page with input, submit button, and results pane.
#[component]
pub fn SearchPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteIndex>>();
    let input = RwSignal::new(String::new());
    let state = RwSignal::new(SearchState::default());

    let project_name = move || {
        let name = site.get().project_name;
        if name.is_empty() { "Documentation".to_owned() } else { name }
    };

    let do_search = move || {
        let query = input.get();
        let Some(token) = state.try_update(|s| s.begin(&query)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::api::search(&query).await;
            if let Err(detail) = &response {
                log::error!("search failed: {detail}");
            }
            state.update(|s| {
                s.resolve(token, response);
            });
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, token);
        }
    };

    let on_click = move |_| do_search();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_search();
        }
    };

    view! {
        <div class="page">
            <Title text="Search"/>
            <header class="site-header">
                <a class="site-header__project" href="/">{project_name}</a>
                <span class="site-header__spacer"></span>
                <ThemeToggle/>
            </header>
            <div class="page-body">
                <NavSidebar/>
                <main class="content">
                    <h1>"Search"</h1>
                    <div class="search-controls">
                        <input
                            id="search-page"
                            class="search-controls__input"
                            type="search"
                            placeholder="Search the documentation..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button id="search-button" class="btn search-controls__submit" on:click=on_click>
                            "Search"
                        </button>
                    </div>
                    <SearchResults state=state/>
                </main>
            </div>
        </div>
    }
}
