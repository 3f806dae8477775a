use autodrive_core::notice::{Notice, TOAST_DURATION};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// The shared `#toast` element. Each message replaces the previous one and
/// restarts the dismiss timer; at most one dismissal is pending.
#[derive(Default)]
pub struct Toast {
    pending: RefCell<Option<Timeout>>,
}

impl Toast {
    pub fn show(&self, notice: Notice) {
        self.show_text(notice.text());
    }

    pub fn show_text(&self, text: &str) {
        let Some(toast) = crate::dom::by_id("toast") else {
            return;
        };
        crate::dom::set_text(&toast, text);
        crate::dom::set_class(&toast, "show", true);

        let delay = u32::try_from(TOAST_DURATION.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(delay, move || crate::dom::set_class(&toast, "show", false));
        // Dropping the previous handle cancels its dismissal.
        self.pending.replace(Some(timeout));
    }
}
