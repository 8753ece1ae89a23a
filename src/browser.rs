//! `web_sys` implementations of the platform seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, WheelEvent, Window,
};

use crate::error::DomError;
use crate::platform::{
    EventKind, EventSink, Handler, InputEvent, ListenerId, Page, Pending, Scheduler, TrackStyle,
};
use crate::reveal::Revealable;

pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Page for BrowserPage {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default()
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            warn!("No <body> to toggle scrolling on");
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            warn!("Failed to set body overflow: {:?}", err);
        }
    }
}

/// Owns the JS closures registered on one DOM event target.
pub struct DomTarget {
    target: EventTarget,
    next_id: Cell<u64>,
    closures: RefCell<HashMap<ListenerId, (EventKind, Closure<dyn FnMut(Event)>)>>,
}

impl DomTarget {
    pub fn new(target: impl Into<EventTarget>) -> Self {
        Self {
            target: target.into(),
            next_id: Cell::new(0),
            closures: RefCell::new(HashMap::new()),
        }
    }

    pub fn window() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        Ok(Self::new(window))
    }
}

impl EventSink for DomTarget {
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, DomError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let delta_y = event
                .dyn_ref::<WheelEvent>()
                .map(|wheel| wheel.delta_y())
                .unwrap_or_default();
            let mut input = InputEvent::new(kind, delta_y);
            handler(&mut input);
            if input.default_prevented() {
                event.prevent_default();
            }
        });

        // Wheel listeners have to be active for prevent_default to stop scrolling.
        let mut options = AddEventListenerOptions::new();
        options.passive(kind == EventKind::Scroll);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| DomError::listener(kind.as_str(), err))?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.closures.borrow_mut().insert(id, (kind, closure));
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let Some((kind, closure)) = self.closures.borrow_mut().remove(&id) else {
            return;
        };
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", kind.as_str(), err);
        }
    }
}

impl Drop for DomTarget {
    fn drop(&mut self) {
        let ids: Vec<ListenerId> = self.closures.borrow().keys().copied().collect();
        for id in ids {
            self.unlisten(id);
        }
    }
}

pub struct BrowserScheduler;

impl Pending for Timeout {}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn Pending> {
        Box::new(Timeout::new(delay_ms, task))
    }
}

impl TrackStyle for HtmlElement {
    fn set_transform(&self, value: &str) {
        if let Err(err) = self.style().set_property("transform", value) {
            warn!("Failed to move carousel track: {:?}", err);
        }
    }
}

impl Revealable for Element {
    fn top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn reveal(&self) {
        if let Err(err) = self.class_list().add_1("visible") {
            warn!("Failed to reveal section: {:?}", err);
        }
    }
}
