use wasm_bindgen::prelude::*;

pub mod config;
pub mod dismiss;
pub mod dom;
pub mod error;
pub mod filter;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(config::LOG_LEVEL.to_level_filter());

    let document = dom::document()?;
    let alerts = dom::DocumentAlerts::new(document.clone());
    dom::on_ready(&document, move || {
        log::info!("document loaded");
        dismiss::AutoDismiss::arm_next_turn(
            &dom::TimeoutScheduler,
            || config::current().clone(),
            alerts,
            dom::BootstrapAlerts,
        );
    })?;
    Ok(())
}

/// Shows only the rows of the table `table_id` containing the text of the input `input_id`.
///
/// Intended to be wired to the input's `keyup`/`input` event, e.g.
/// `onkeyup="tableSearch('search', 'products')"`.
#[wasm_bindgen(js_name = tableSearch)]
pub fn table_search(input_id: &str, table_id: &str) -> std::result::Result<(), JsValue> {
    filter::table_search(input_id, table_id)?;
    Ok(())
}

/// Overrides the defaults, e.g. `configure({ dismissDelayMs: 3000 })` or the same as JSON text.
///
/// Takes effect when called straight after the module has initialised; dismissal reads the
/// configuration one timer turn after the document is ready.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> std::result::Result<(), JsValue> {
    let config = Config::from_js(&options)?;
    config::install(config)?;
    Ok(())
}
