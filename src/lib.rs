#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod cosmetic;
pub mod view_state;

/// Year the crate was built, set by `build.rs`.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init (e.g. hot reload) is harmless
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_metadata() {
        let year: u16 = BUILD_YEAR.parse().expect("BUILD_YEAR should be a number");
        assert!(year >= 2024);
        // build.rs only exports what the crate reads
        assert!(option_env!("BUILD_TIME").is_none());
    }
}
