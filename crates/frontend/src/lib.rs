pub mod app;
pub mod domain;
pub mod shared;

use contracts::domain::a001_department::DepartmentTable;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let query = AppConfig::current_query();
    let (config, config_error) = match AppConfig::from_query(&query) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    if let Some(level) = config.log.to_level() {
        _ = console_log::init_with_level(level);
    }
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Ignoring query configuration {:?}: {}", query, e);
    }
    log::info!(
        "Department keypad starting with {} departments",
        DepartmentTable::builtin().len()
    );

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
