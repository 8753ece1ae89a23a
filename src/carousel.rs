use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::error::DomError;
use crate::platform::{EventKind, EventSink, InputEvent, Listener, TrackStyle};

pub const SLIDE_COUNT: usize = 9;

/// Index into a fixed strip of slides that wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn previous(&mut self) -> usize {
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = if self.index == self.len - 1 {
            0
        } else {
            self.index + 1
        };
        self.index
    }

    /// Horizontal offset of the track in percent of one slide width.
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64 * 100)
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }
}

/// Wired carousel. Dropping it detaches both button handlers.
pub struct CarouselHandle {
    _listeners: [Listener; 2],
    state: Rc<RefCell<Carousel>>,
}

impl CarouselHandle {
    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }
}

pub fn mount(
    track: Rc<dyn TrackStyle>,
    prev: Rc<dyn EventSink>,
    next: Rc<dyn EventSink>,
    len: usize,
) -> Result<CarouselHandle, DomError> {
    let state = Rc::new(RefCell::new(Carousel::new(len)));

    let step = |forward: bool| {
        let state = Rc::clone(&state);
        let track = Rc::clone(&track);
        Rc::new(move |_: &mut InputEvent| {
            let mut carousel = state.borrow_mut();
            if forward {
                carousel.next();
            } else {
                carousel.previous();
            }
            track.set_transform(&carousel.transform());
        })
    };

    let listeners = [
        Listener::attach(&prev, EventKind::Click, step(false))?,
        Listener::attach(&next, EventKind::Click, step(true))?,
    ];

    track.set_transform(&state.borrow().transform());
    debug!("Carousel wired with {} slides", state.borrow().len());

    Ok(CarouselHandle {
        _listeners: listeners,
        state,
    })
}
