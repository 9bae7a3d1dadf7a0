//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{overview::OverviewPage, search::SearchPage};
use crate::state::site::SiteIndex;
use crate::state::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the two pieces of shared state (theme, site manifest), provides them
/// via context, and sets up client-side routing. The persisted theme is read
/// and applied here, before any page renders, so the first paint already has
/// the right class on `<html>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme: RwSignal<Theme> = RwSignal::new(crate::util::theme::read_preference());
    let site = RwSignal::new(SiteIndex::default());
    provide_context(theme);
    provide_context(site);

    crate::util::theme::apply(theme.get_untracked());

    // The manifest ships as a static asset next to the generated pages; a
    // missing or malformed file just leaves the shell empty.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(index) = crate::net::api::fetch_site_index().await {
            site.set(index);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docsite-ui.css"/>
        <Title text="Documentation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=OverviewPage/>
                <Route path=StaticSegment("search") view=SearchPage/>
            </Routes>
        </Router>
    }
}
