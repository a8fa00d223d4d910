use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
#[cfg(test)]
mod test_support;

use pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Drukland.de | Sign in"/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Debug output carries the submitted email, so release builds stop at info.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting storefront frontend (wasm)");

    // Resolve the sign-in endpoint early; the first submit awaits the same cache.
    leptos::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App/> });
}
