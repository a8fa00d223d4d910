pub mod auth;
pub mod scheduler;
#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;
