//! TutorLink client — tutoring-marketplace screens for students, parents,
//! and teachers.
//!
//! ARCHITECTURE
//! ============
//! `nav` owns the session-routing core (which navigation graph a session
//! sees), `pages` owns route-level screens, `components` the shared chrome,
//! `state` the signal-backed view state, and `net` the REST boundary to the
//! auth collaborator. Compiled to WASM under `hydrate` and server-side under
//! `ssr`.

pub mod app;
pub mod components;
pub mod data;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
