use crate::dom;
use crate::nav::NavMenu;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn wire_escape_closes_nav(document: &web::Document, nav: Rc<NavMenu>) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if is_escape(&ev.key()) {
            nav.close();
        }
    });
}
