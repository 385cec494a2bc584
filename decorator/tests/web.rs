//! Browser tests for registering the decorator on a live page.

#![cfg(target_arch = "wasm32")]

use config::Config;
use decorator::web::{decorate_page, register};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("test page should have a document")
}

fn append_bar(document: &Document, value: &str) -> HtmlElement {
    let bar = document
        .create_element("div")
        .expect("div should be creatable")
        .dyn_into::<HtmlElement>()
        .expect("div should be an HTML element");
    bar.set_class_name("bar");
    bar.set_attribute("data-h", value)
        .expect("attribute should be settable");
    append(document, &bar);

    bar
}

fn append(document: &Document, element: &Element) {
    document
        .body()
        .expect("test page should have a body")
        .append_child(element)
        .expect("element should be appendable");
}

fn height(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("height")
        .expect("height should be readable")
}

#[wasm_bindgen_test]
fn loaded_document_is_decorated_immediately() {
    let document = document();
    assert_ne!(document.ready_state(), "loading");
    let valid = append_bar(&document, "75");
    let text = append_bar(&document, "abc");

    register(Config::default()).expect("registering should succeed");

    assert_eq!(height(&valid), "75%");
    assert_eq!(height(&text), "0%");

    valid.remove();
    text.remove();
}

#[wasm_bindgen_test]
fn decorating_again_follows_changed_attributes() {
    let document = document();
    let bar = append_bar(&document, "10");
    let bars = Config::default().bars;

    decorate_page(&bars);
    bar.set_attribute("data-h", "90")
        .expect("attribute should be settable");
    decorate_page(&bars);

    assert_eq!(height(&bar), "90%");

    bar.remove();
}

#[wasm_bindgen_test]
fn submissions_are_not_prevented() {
    let document = document();
    register(Config::default()).expect("registering should succeed");
    let form = document
        .create_element("form")
        .expect("form should be creatable");
    append(&document, &form);

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event =
        Event::new_with_event_init_dict("submit", &init).expect("event should be creatable");
    let not_canceled = form
        .dispatch_event(&event)
        .expect("event should be dispatchable");

    assert!(not_canceled);
    assert!(!event.default_prevented());

    form.remove();
}

#[wasm_bindgen_test]
fn unstyleable_bars_are_logged_instead_of_thrown() {
    let document = document();
    let foreign = document
        .create_element_ns(Some("urn:example:chart"), "bar")
        .expect("foreign element should be creatable");
    foreign
        .set_attribute("class", "bar")
        .expect("attribute should be settable");
    foreign
        .set_attribute("data-h", "50")
        .expect("attribute should be settable");
    append(&document, &foreign);

    assert!(register(Config::default()).is_ok());

    foreign.remove();
}
