//! Seams between the interaction logic and the browser.
//!
//! The intro, carousel and reveal controllers only talk to these traits, so
//! the view hands them concrete browser objects while tests hand them fakes.

use std::rc::Rc;

use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Wheel,
    Scroll,
    Click,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Wheel => "wheel",
            EventKind::Scroll => "scroll",
            EventKind::Click => "click",
        }
    }
}

/// The parts of a DOM event the controllers care about.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    kind: EventKind,
    delta_y: f64,
    default_prevented: bool,
}

impl InputEvent {
    pub fn new(kind: EventKind, delta_y: f64) -> Self {
        Self {
            kind,
            delta_y,
            default_prevented: false,
        }
    }

    pub fn wheel(delta_y: f64) -> Self {
        Self::new(EventKind::Wheel, delta_y)
    }

    pub fn scroll() -> Self {
        Self::new(EventKind::Scroll, 0.0)
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click, 0.0)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Vertical wheel delta; zero for anything but wheel events.
    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub type Handler = Rc<dyn Fn(&mut InputEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Something handlers can be attached to: the window or a button.
pub trait EventSink {
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, DomError>;
    fn unlisten(&self, id: ListenerId);
}

/// An attached handler. Dropping it detaches the handler from its sink.
pub struct Listener {
    sink: Rc<dyn EventSink>,
    id: ListenerId,
}

impl Listener {
    pub fn attach(
        sink: &Rc<dyn EventSink>,
        kind: EventKind,
        handler: Handler,
    ) -> Result<Self, DomError> {
        let id = sink.listen(kind, handler)?;
        Ok(Self {
            sink: Rc::clone(sink),
            id,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.sink.unlisten(self.id);
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Page {
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to_top(&self);
    fn set_scroll_locked(&self, locked: bool);
}

/// Handle to a scheduled task; dropping it cancels the task.
pub trait Pending {}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn Pending>;
}

/// The element whose horizontal offset selects the visible slide.
pub trait TrackStyle {
    fn set_transform(&self, value: &str);
}
