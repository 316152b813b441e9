use crate::constants::{
    LAZY_FADE_DURATION_SEC, SCROLL_LINKS_MIN_WIDTH_PX, SCROLL_LINK_OFFSET_PX,
    SECTION_MARKER_MARGIN,
};
use crate::core::scroll::{preload_margin, scroll_target, CoverBox, LazyImage, ThemeTracker, LOGO_ATTR};
use crate::core::tween::{Ease, Tween};
use crate::dom;
use crate::frame::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array)>;

fn observe(
    targets: &[&web::Element],
    root_margin: &str,
    callback: &ObserverCallback,
) -> anyhow::Result<web::IntersectionObserver> {
    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(0.0));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

fn entries(list: &js_sys::Array) -> Vec<web::IntersectionObserverEntry> {
    list.iter()
        .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        .collect()
}

/// Keep `#headerNav[data-logo-active]` readable over whichever
/// `[data-section]` sits under the header.
pub fn init_section_theme(document: &web::Document) {
    let Some(header) = document.get_element_by_id("headerNav") else {
        return;
    };
    let sections = dom::query_all_doc(document, "[data-section]");
    if sections.is_empty() {
        return;
    }

    let tracker = RefCell::new(ThemeTracker::new(sections.len()));
    let watched = sections.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(move |list: js_sys::Array| {
        let mut tracker = tracker.borrow_mut();
        for entry in entries(&list) {
            let target = entry.target();
            let node: &web::Node = &target;
            let Some(index) = watched.iter().position(|s| s.is_same_node(Some(node))) else {
                continue;
            };
            let attr = target.get_attribute("data-section");
            if let Some(logo) = tracker.update(index, attr.as_deref(), entry.is_intersecting()) {
                _ = header.set_attribute(LOGO_ATTR, logo);
                log::debug!("[scroll] section {} theme {:?}", index, tracker.theme());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let targets: Vec<&web::Element> = sections.iter().collect();
    match observe(&targets, SECTION_MARKER_MARGIN, &callback) {
        // page lifetime
        Ok(_) => callback.forget(),
        Err(e) => log::error!("[scroll] {:?}", e),
    }
}

/// One `.lazy` image and the observer waiting for it to come into range.
struct LazySlot {
    image: web::HtmlImageElement,
    model: RefCell<LazyImage>,
    watch: RefCell<Option<(web::IntersectionObserver, ObserverCallback)>>,
}

impl LazySlot {
    fn stop_watching(&self) {
        if let Some((observer, _callback)) = self.watch.borrow_mut().take() {
            observer.disconnect();
        }
    }

    fn begin(self: &Rc<Self>) {
        let Some(src) = self.model.borrow_mut().begin_load().map(str::to_string) else {
            return;
        };
        let preload = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[lazy] {:?}", e);
                return;
            }
        };
        let slot = self.clone();
        let onload = Closure::once_into_js(move || slot.swap());
        preload.set_onload(Some(onload.unchecked_ref()));
        preload.set_src(&src);
    }

    /// Swap in the real source and fade the placeholder out on top of it.
    fn swap(self: Rc<Self>) {
        if !self.model.borrow_mut().finish_load() {
            return;
        }
        self.stop_watching();

        let placeholder = self.image.current_src();
        let cover = CoverBox {
            top: self.image.offset_top(),
            left: self.image.offset_left(),
            width: self.image.offset_width(),
            height: self.image.offset_height(),
        };
        self.image.set_src(self.model.borrow().src());
        log::debug!("[lazy] {:?} {}", self.model.borrow().state(), self.model.borrow().src());

        let (Ok(overlay), Some(parent)) = (web::HtmlImageElement::new(), self.image.parent_node())
        else {
            return;
        };
        overlay.set_src(&placeholder);
        for (property, value) in cover.styles() {
            dom::set_style(&overlay, property, &value);
        }
        if parent.append_child(&overlay).is_err() {
            return;
        }

        let mut fade = Tween::new(1.0, 0.0, LAZY_FADE_DURATION_SEC, Ease::Power1Out);
        FrameDriver::run_to_completion(move |dt| {
            let opacity = fade.advance(dt);
            dom::set_style(&overlay, "opacity", &opacity.to_string());
            if fade.is_finished() {
                overlay.remove();
                return false;
            }
            true
        });
    }
}

/// Swap each `.lazy` image to its `data-src` shortly before it scrolls into
/// view.
pub fn init_lazy_images(document: &web::Document) {
    let mut count = 0;
    for el in dom::query_all_doc(document, ".lazy") {
        let Ok(image) = el.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        let Some(model) = LazyImage::from_data_src(image.get_attribute("data-src").as_deref()) else {
            continue;
        };
        let slot = Rc::new(LazySlot {
            image,
            model: RefCell::new(model),
            watch: RefCell::new(None),
        });

        let on_enter = slot.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(move |list: js_sys::Array| {
            if entries(&list).iter().any(|e| e.is_intersecting()) {
                on_enter.begin();
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let margin = preload_margin(slot.image.offset_height() as f64);
        let target: &web::Element = &slot.image;
        match observe(&[target], &margin, &callback) {
            Ok(observer) => {
                *slot.watch.borrow_mut() = Some((observer, callback));
                count += 1;
            }
            Err(e) => log::warn!("[lazy] {:?}", e),
        }
    }
    if count > 0 {
        log::debug!("[lazy] watching {} images", count);
    }
}

/// Smooth-scroll `a[data-scroll-to]` links to their `#fragment` on desktop
/// widths. Narrow screens keep the native jump.
pub fn init_scroll_links(document: &web::Document) {
    let wide = web::window()
        .and_then(|w| w.outer_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w >= SCROLL_LINKS_MIN_WIDTH_PX as f64);
    if !wide {
        return;
    }
    for link in dom::query_all_doc(document, "a[data-scroll-to]") {
        let doc = document.clone();
        let target_link = link.clone();
        dom::listen(&target_link, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = scroll_target(&href)
                .and_then(|id| doc.get_element_by_id(id))
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            dom::set_style(&target, "scroll-margin-top", &format!("{}px", SCROLL_LINK_OFFSET_PX));
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            options.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
