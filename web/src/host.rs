use glide::host::{ClickEvent, ClickHandler, Host, TimerCallback};
use gloo::{events::EventListener, timers::callback::Timeout};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

/// [`Host`] backed by the page's `window` and `document`.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// `None` outside a browser main thread (e.g. in a worker).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

struct WebClick<'a>(&'a Event);

impl ClickEvent for WebClick<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl Host for WebHost {
    type Element = Element;
    type Timer = Timeout;
    type Listener = EventListener;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scroll_offset(&self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!(selector, "invalid selector: {err:?}");
                None
            },
        }
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// `offsetTop` for HTML elements; SVG and other elements have no offset
    /// parent, so their document position comes from the bounding rect.
    fn element_top_offset(&self, element: &Element) -> f64 {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => f64::from(html.offset_top()),
            None => element.get_bounding_client_rect().top() + self.scroll_offset(),
        }
    }

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }

    fn cancel(&self, timer: Timeout) {
        // clearTimeout on drop
        drop(timer);
    }

    fn on_click(&self, element: &Element, mut handler: ClickHandler) -> EventListener {
        EventListener::new(element, "click", move |event: &Event| {
            let click: &dyn ClickEvent = &WebClick(event);
            handler(click);
        })
    }
}
