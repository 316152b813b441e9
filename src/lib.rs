#![cfg(target_arch = "wasm32")]
use crate::core::PointerTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod forms;
mod frame;
mod hover;
mod loader;
mod modal;
mod nav;
mod scroll;
mod toast;
mod tool;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            init_page(&doc);
        });
    } else {
        init_page(&document);
    }
    Ok(())
}

// Every feature is optional: pages only carry the markup they need.
fn init_page(document: &web::Document) {
    loader::init(document);
    dom::set_footer_year(document);

    if let Some(nav) = nav::init(document) {
        events::wire_escape_closes_nav(document, nav);
    }

    let pointer = Rc::new(RefCell::new(PointerTracker::new()));
    if hover::init(document, pointer.clone()).is_some() {
        events::wire_pointer_tracking(pointer);
    }

    scroll::init_section_theme(document);
    scroll::init_lazy_images(document);
    scroll::init_scroll_links(document);

    forms::init_contact(document);
    forms::init_newsletter(document);
    tool::init(document);
}
