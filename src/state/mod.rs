//! Pure client-side state: no DOM access, natively testable.
//!
//! DESIGN
//! ======
//! Every behavior behind the UI (theme choice, filtering, the search
//! lifecycle) lives here as plain data and functions. Components translate
//! events into calls on these models and render whatever they return.

pub mod filter;
pub mod search;
pub mod site;
pub mod theme;
