//! Component catalog grid with live filtering.
//!
//! Cards match on title or description; like the sidebar, filtering only
//! toggles `display` on nodes rendered once from the manifest.

use leptos::prelude::*;

use crate::components::filter_input::FilterInput;
use crate::state::filter::FilterQuery;
use crate::state::site::SiteIndex;

/// Grid of component cards with its own filter box.
#[component]
pub fn ComponentIndex() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteIndex>>();
    let query = RwSignal::new(String::new());

    view! {
        <section class="component-index">
            <FilterInput id="component-filter" placeholder="Filter components..." query=query/>
            <div class="component-grid">
                {move || {
                    site.get()
                        .components
                        .into_iter()
                        .map(|entry| {
                            let card_display = {
                                let entry = entry.clone();
                                move || {
                                    if FilterQuery::new(&query.get()).matches(&entry) {
                                        ""
                                    } else {
                                        "none"
                                    }
                                }
                            };
                            view! {
                                <div class="component" style:display=card_display>
                                    <h3 class="component-title">
                                        <a href=entry.href.clone()>{entry.title.clone()}</a>
                                    </h3>
                                    <p class="component-description">{entry.description.clone()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
