use std::rc::Rc;

use crate::platform::Page;

/// Keeps page scrolling disabled for as long as it is held.
pub struct ScrollLock {
    page: Rc<dyn Page>,
    held: bool,
}

impl ScrollLock {
    pub fn acquire(page: Rc<dyn Page>) -> Self {
        page.set_scroll_locked(true);
        Self { page, held: true }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn release(&mut self) {
        if self.held {
            self.page.set_scroll_locked(false);
            self.held = false;
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}
