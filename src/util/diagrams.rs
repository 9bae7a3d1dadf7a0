//! Mermaid diagram initialization.
//!
//! Generated pages embed architecture diagrams as Mermaid code blocks and
//! load the Mermaid bundle from a separate script tag. The global is only
//! present when that tag loaded, so initialization goes through reflection
//! and quietly does nothing when Mermaid is absent or on the server.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue};

/// Call `mermaid.initialize({ startOnLoad: true })` when the global exists.
///
/// Safe to call repeatedly; re-run after swapping in generator-produced
/// HTML so new diagram blocks get rendered.
pub fn init_mermaid() {
    #[cfg(feature = "hydrate")]
    {
        let Ok(mermaid) = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mermaid"))
        else {
            return;
        };
        if mermaid.is_undefined() || mermaid.is_null() {
            return;
        }
        let Ok(initialize) = js_sys::Reflect::get(&mermaid, &JsValue::from_str("initialize"))
        else {
            return;
        };
        let Some(initialize) = initialize.dyn_ref::<js_sys::Function>() else {
            return;
        };

        let config = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &config,
            &JsValue::from_str("startOnLoad"),
            &JsValue::from_bool(true),
        );
        let _ = initialize.call1(&mermaid, &config);
    }
}
