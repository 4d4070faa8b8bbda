use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Creates the Bootstrap alert controller for `element`, equivalent to
/// `new bootstrap.Alert(element)`.
///
/// Fails when the Bootstrap bundle has not been loaded into the page.
pub fn attach(element: &Element) -> Result<Alert, JsValue> {
    Alert::new(element)
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Alert;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    /// Closes the alert by removing it from the DOM, fading it out first when the element has the
    /// `.fade` and `.show` classes.
    #[wasm_bindgen(method, catch)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}
