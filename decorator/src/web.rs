//! The browser side of the decorator, binding the decoration pass to the page lifecycle.

use config::{AttributeName, Bars, Config};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, SvgElement};

use crate::{decorate_or_report, log_failure, Document, Error, Height};

/// The document of the current browser window.
pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    /// Returns the document of the current window.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the window has no document.
    pub fn current() -> Result<Self, Error> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|inner| Self { inner })
            .ok_or(Error::MissingDocument)
    }

    fn is_loading(&self) -> bool {
        self.inner.ready_state() == "loading"
    }

    fn event_target(&self) -> &EventTarget {
        self.inner.as_ref()
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn select_bars(&self, bars: &Bars) -> Result<Vec<Element>, Error> {
        let nodes = self
            .inner
            .query_selector_all(&bars.selector().to_string())
            .map_err(|error| Error::Query(describe(&error)))?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn attribute(&self, element: &Element, name: &AttributeName) -> Option<String> {
        element.get_attribute(name.as_str())
    }

    fn set_height(&mut self, element: &Element, height: Height) -> Result<(), Error> {
        let style = if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.style()
        } else if let Some(element) = element.dyn_ref::<SvgElement>() {
            element.style()
        } else {
            return Err(Error::NotStyleable);
        };

        style
            .set_property("height", &height.to_string())
            .map_err(|error| Error::Style(describe(&error)))
    }
}

/// Registers the decorator for the page-ready signal and the form submission hook.
///
/// If the document has already finished loading, the bars are decorated immediately.
///
/// # Errors
///
/// Returns an error if there is no document or a listener could not be registered.
pub fn register(config: Config) -> Result<(), Error> {
    let document = WebDocument::current()?;

    // Placeholder for form validation, submissions are neither blocked nor inspected
    let on_submit = Closure::<dyn FnMut(Event)>::new(|_: Event| {});
    document
        .event_target()
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|error| Error::Listener(describe(&error)))?;
    on_submit.forget();

    if document.is_loading() {
        let on_ready = Closure::once_into_js(move || decorate_page(&config.bars));
        let options = AddEventListenerOptions::new();
        options.set_once(true);

        document
            .event_target()
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                on_ready.unchecked_ref(),
                &options,
            )
            .map_err(|error| Error::Listener(describe(&error)))?;
    } else {
        decorate_page(&config.bars);
    }

    Ok(())
}

/// Decorates the bars of the current page, logging any failure.
pub fn decorate_page(bars: &Bars) {
    match WebDocument::current() {
        Ok(mut document) => decorate_or_report(&mut document, bars, log_failure),
        Err(error) => log_failure(&error),
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
