//! Browser console logging
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` these compile to no-ops
//! since imported JS functions cannot be called from native test binaries.

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn error(_msg: &str) {}
