//! Slides page sections into view as they scroll up past a threshold.

use std::rc::Rc;

use crate::error::DomError;
use crate::platform::{EventKind, EventSink, InputEvent, Listener, Page};

pub trait Revealable {
    /// Distance from the top of the viewport to the element's top edge.
    fn top(&self) -> f64;
    fn reveal(&self);
}

pub fn in_view(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height * (1.0 - threshold)
}

pub struct RevealHandle {
    _listener: Listener,
}

pub fn mount(
    page: Rc<dyn Page>,
    window: Rc<dyn EventSink>,
    targets: Vec<Rc<dyn Revealable>>,
    threshold: f64,
) -> Result<RevealHandle, DomError> {
    let check = Rc::new(move |_: &mut InputEvent| {
        let height = page.viewport_height();
        targets
            .iter()
            .filter(|target| in_view(target.top(), height, threshold))
            .for_each(|target| target.reveal());
    });
    check(&mut InputEvent::scroll());

    let listener = Listener::attach(&window, EventKind::Scroll, check)?;
    Ok(RevealHandle {
        _listener: listener,
    })
}
