use crate::core::PointerTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The page-level pointer listener. This is the only writer of the shared
/// pointer sample; hover items only read and advance it while rendering.
pub fn wire_pointer_tracking(tracker: Rc<RefCell<PointerTracker>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        tracker
            .borrow_mut()
            .record(ev.client_x() as f32, ev.client_y() as f32);
    });
}
