use crate::core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener that lives for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", move |ev: web::MouseEvent| handler(ev));
    }
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_doc(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn create_div(document: &web::Document, class_name: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    el.set_class_name(class_name);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn bounds_of(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("currentYear") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
