use crate::dismiss::{AlertSource, AlertToolkit, Dismissible, Scheduler};
use crate::error::{Error, Result};
use crate::filter::{FilterRow, FilterTable, Visibility};
use bootstrap::ElementList;
use gloo_timers::callback::Timeout;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlTableElement,
};

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::MissingDocument)
}

pub(crate) fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::ElementNotFound { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| Error::UnexpectedElement {
            id: id.to_string(),
            expected,
        })
}

/// Runs `handler` once the document has been parsed.
///
/// When the document is already past loading (the module was initialised after
/// `DOMContentLoaded`), the handler runs immediately instead.
pub fn on_ready(document: &Document, handler: impl FnOnce() + 'static) -> Result<()> {
    if document.ready_state() != "loading" {
        handler();
        return Ok(());
    }
    once(document, "DOMContentLoaded", handler)
}

/// Runs `handler` the first time `target` receives `event`; later events are ignored.
pub fn once(target: &EventTarget, event: &str, handler: impl FnOnce() + 'static) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let listener = Closure::once_into_js(move |_event: Event| handler());
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        listener.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

pub struct DomTable(HtmlTableElement);

impl DomTable {
    pub fn new(table: HtmlTableElement) -> Self {
        DomTable(table)
    }
}

impl FilterTable for DomTable {
    type Row = DomRow;

    fn rows(&self) -> Vec<DomRow> {
        self.0
            .get_elements_by_tag_name("tr")
            .to_list::<HtmlElement>()
            .into_iter()
            .map(DomRow)
            .collect()
    }
}

pub struct DomRow(HtmlElement);

impl FilterRow for DomRow {
    fn cell_texts(&self) -> Vec<String> {
        self.0
            .get_elements_by_tag_name("td")
            .to_list::<Element>()
            .iter()
            .map(|cell| cell.text_content().unwrap_or_default())
            .collect()
    }

    fn set_visibility(&self, visibility: Visibility) -> Result<()> {
        self.0.style().set_property("display", visibility.display())?;
        Ok(())
    }
}

/// Alerts backed by the Bootstrap `Alert` widget.
pub struct BootstrapAlerts;

impl AlertToolkit for BootstrapAlerts {
    type Element = Element;
    type Alert = bootstrap::alert::Alert;

    fn attach(&self, element: &Element) -> Result<Self::Alert> {
        Ok(bootstrap::alert::attach(element)?)
    }
}

impl Dismissible for bootstrap::alert::Alert {
    fn close(&self) -> Result<()> {
        Ok(bootstrap::alert::Alert::close(self)?)
    }
}

pub struct DocumentAlerts(Document);

impl DocumentAlerts {
    pub fn new(document: Document) -> Self {
        DocumentAlerts(document)
    }
}

impl AlertSource for DocumentAlerts {
    type Element = Element;

    fn alerts(&self, selector: &str) -> Vec<Element> {
        bootstrap::query_selector_all::<Element>(&self.0, selector)
    }
}

/// Schedules tasks on the browser's timer queue.
#[derive(Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Nothing holds on to the handle, so the timeout must outlive this call
        Timeout::new(millis, task).forget();
    }
}
