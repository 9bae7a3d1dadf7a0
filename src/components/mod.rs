//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading
//! shared state from Leptos context providers; pages own the wiring.

pub mod component_index;
pub mod filter_input;
pub mod nav_sidebar;
pub mod search_results;
pub mod theme_toggle;
