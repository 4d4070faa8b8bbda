use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, NodeList};

pub mod alert;

/// Snapshot of every element in `document` matching `selector`, in document order.
///
/// An invalid selector is logged and treated as matching nothing.
pub fn query_selector_all<T>(document: &Document, selector: &str) -> Vec<T>
where
    T: AsRef<Element> + JsCast,
{
    match document.query_selector_all(selector) {
        Ok(nodes) => nodes.to_list::<T>(),
        Err(e) => {
            error!(format!("unable to query elements matching {selector}: {:?}", e));
            Vec::new()
        }
    }
}

pub trait ElementList {
    fn to_list<T: AsRef<Element> + JsCast>(self) -> Vec<T>;
}

impl ElementList for NodeList {
    fn to_list<T>(self) -> Vec<T>
    where
        T: AsRef<Element> + JsCast,
    {
        let mut result = Vec::with_capacity(self.length() as usize);

        for index in 0..self.length() {
            if let Some(item) = self.get(index) {
                // Skip anything which is not of the requested type (text nodes etc.)
                if let Ok(item) = item.dyn_into::<T>() {
                    result.push(item);
                }
            }
        }

        result
    }
}

impl ElementList for HtmlCollection {
    fn to_list<T>(self) -> Vec<T>
    where
        T: AsRef<Element> + JsCast,
    {
        let mut result = Vec::with_capacity(self.length() as usize);

        for index in 0..self.length() {
            if let Some(item) = self.item(index) {
                if let Ok(item) = item.dyn_into::<T>() {
                    result.push(item);
                }
            }
        }

        result
    }
}
