//! Cancellable single-timer debouncing
//!
//! One pending timer per concern; scheduling again cancels the previous
//! timer, so only the last burst of activity fires.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `action` after the delay, dropping any previously scheduled run.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            action();
        });
        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            previous.cancel();
        }
    }
}
