use crate::core::nav::{NavState, NAV_TOGGLED_CLASS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct NavMenu {
    state: RefCell<NavState>,
    wrapper: web::Element,
    label: Option<web::Element>,
}

impl NavMenu {
    fn sync(&self) {
        let state = *self.state.borrow();
        _ = self
            .wrapper
            .class_list()
            .toggle_with_force(NAV_TOGGLED_CLASS, state.is_open());
        if let Some(label) = &self.label {
            label.set_text_content(Some(state.label()));
        }
    }

    pub fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        log::debug!("[nav] open={}", open);
        self.sync();
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }
}

/// Wire the hamburger menu. Returns `None` when the page has no nav.
pub fn init(document: &web::Document) -> Option<Rc<NavMenu>> {
    let Some(wrapper) = dom::query_doc(document, ".nav__main") else {
        log::warn!("Navigation menu wrapper not found (.nav__main).");
        return None;
    };
    let Some(button) = dom::query(&wrapper, ".menu__btn") else {
        log::warn!("Navigation menu button not found (.menu__btn).");
        return None;
    };
    let card = dom::query_doc(document, ".nav__card");
    let links = dom::query_all(&wrapper, ".nav__list-link");

    let nav = Rc::new(NavMenu {
        state: RefCell::new(NavState::default()),
        label: dom::query(&button, ".btn__text"),
        wrapper,
    });

    let nav_btn = nav.clone();
    dom::listen(&button, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        nav_btn.toggle();
    });

    if let Some(card) = card {
        let nav_doc = nav.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|node| card.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                nav_doc.close();
            }
        });
    }

    for link in links {
        let nav_link = nav.clone();
        dom::listen(&link, "click", move |_: web::MouseEvent| nav_link.close());
    }

    Some(nav)
}
