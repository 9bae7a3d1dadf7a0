//! Overview page: the generated site's landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the generator-produced overview body plus the component catalog.
//! Everything on screen comes from the site manifest; an empty manifest
//! renders an empty (but functional) shell.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::component_index::ComponentIndex;
use crate::components::nav_sidebar::NavSidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::site::SiteIndex;

/// Landing page: header, nav sidebar, overview body, component index.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteIndex>>();

    let project_name = move || {
        let name = site.get().project_name;
        if name.is_empty() { "Documentation".to_owned() } else { name }
    };

    // Mermaid only sees diagram blocks that exist when it initializes, so
    // re-run it whenever the overview body is swapped in.
    Effect::new(move || {
        let _ = site.get().overview_html;
        crate::util::diagrams::init_mermaid();
    });

    view! {
        <div class="page">
            <Title text=project_name/>
            <header class="site-header">
                <span class="site-header__project">{project_name}</span>
                <span class="site-header__spacer"></span>
                <a class="site-header__search-link" href="/search">"Search"</a>
                <ThemeToggle/>
            </header>
            <div class="page-body">
                <NavSidebar/>
                <main class="content">
                    <section class="overview" inner_html=move || site.get().overview_html></section>
                    <ComponentIndex/>
                </main>
            </div>
        </div>
    }
}
