//! Sidebar navigation with live filtering.
//!
//! DESIGN
//! ======
//! The nav tree renders once from the site manifest; typing in the filter box
//! only flips each row's `display` style. A group stays visible while its own
//! label or any child label matches, so filtering for a page name never hides
//! the package that contains it.

use leptos::prelude::*;

use crate::components::filter_input::FilterInput;
use crate::state::filter::FilterQuery;
use crate::state::site::SiteIndex;

fn display_style(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

/// Left-hand navigation column: filter box plus the nav tree.
#[component]
pub fn NavSidebar() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteIndex>>();
    let query = RwSignal::new(String::new());

    view! {
        <nav class="nav">
            <FilterInput id="search" placeholder="Filter pages..." query=query/>
            <ul class="nav-items">
                {move || {
                    site.get()
                        .nav
                        .into_iter()
                        .map(|group| {
                            let group_display = {
                                let group = group.clone();
                                move || display_style(group.is_revealed(&FilterQuery::new(&query.get())))
                            };
                            let heading = match &group.href {
                                Some(href) => view! {
                                    <a class="nav-group__label" href=href.clone()>{group.label.clone()}</a>
                                }
                                    .into_any(),
                                None => view! {
                                    <span class="nav-group__label">{group.label.clone()}</span>
                                }
                                    .into_any(),
                            };
                            let children = group
                                .items
                                .iter()
                                .map(|item| {
                                    let item = item.clone();
                                    let item_display = {
                                        let item = item.clone();
                                        move || display_style(FilterQuery::new(&query.get()).matches(&item))
                                    };
                                    view! {
                                        <li style:display=item_display>
                                            <a href=item.href.clone()>{item.label.clone()}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>();

                            if group.items.is_empty() {
                                view! {
                                    <li class="nav-item" style:display=group_display>
                                        {heading}
                                    </li>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <li class="nav-group" style:display=group_display>
                                        {heading}
                                        <ul class="nav-items nav-children">{children}</ul>
                                    </li>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </nav>
    }
}
