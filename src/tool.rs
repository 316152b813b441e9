use crate::constants::COPY_TOOLTIP_MS;
use crate::core::units::{parse_base_size, row_markup, sanitize_unit_input, unit_rows, Unit};
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn base_size(document: &web::Document) -> u32 {
    document
        .get_element_by_id("bodySize")
        .and_then(|i| i.dyn_into::<web::HtmlInputElement>().ok())
        .map(|i| parse_base_size(&i.value()))
        .unwrap_or_else(|| parse_base_size(""))
}

fn render_table(body: &web::Element, base: u32) {
    let html: String = unit_rows(base).iter().map(row_markup).collect();
    body.set_inner_html(&html);
    log::debug!("[units] table rendered for base {}px", base);
}

async fn copy_text(text: String, button: web::Element) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = window.navigator().clipboard().write_text(&text);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("clipboard: {:?}", e))?;
    if let Some(tooltip) = dom::query(&button, ".tooltip") {
        _ = tooltip.class_list().add_1("visible");
        TimeoutFuture::new(COPY_TOOLTIP_MS).await;
        _ = tooltip.class_list().remove_1("visible");
    }
    Ok(())
}

/// One listener on the table body serves every copy button, across re-renders.
fn wire_copy_buttons(body: &web::Element) {
    dom::listen(body, "click", move |ev: web::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-clipboard-text]").ok().flatten())
        else {
            return;
        };
        let Some(text) = button.get_attribute("data-clipboard-text") else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = copy_text(text, button).await {
                log::warn!("[units] {:?}", e);
            }
        });
    });
}

fn wire_unit_inputs(document: &web::Document) {
    for wrapper in dom::query_all_doc(document, "[data-unit]") {
        let Some(unit) = wrapper.get_attribute("data-unit").and_then(|u| Unit::from_attr(&u)) else {
            continue;
        };
        let Some(input) = dom::query(&wrapper, "input")
            .and_then(|i| i.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        let target = input.clone();
        dom::listen(&target, "keyup", move |ev: web::KeyboardEvent| {
            ev.prevent_default();
            let group = input.closest(".form__input").ok().flatten();
            match sanitize_unit_input(&input.value(), unit) {
                Ok(value) => {
                    input.set_value(&value);
                    if let Some(g) = &group {
                        _ = g.class_list().remove_1("input-error");
                    }
                }
                Err(e) => {
                    log::debug!("[units] {}", e);
                    if let Some(g) = &group {
                        _ = g.class_list().add_1("input-error");
                    }
                }
            }
            input.set_custom_validity("");
        });
    }
}

/// Wire the px to rem tool page. No-op on pages without `#fontMap`.
pub fn init(document: &web::Document) {
    let Some(table) = document.get_element_by_id("fontMap") else {
        return;
    };
    let Some(body) = dom::query(&table, "tbody") else {
        log::warn!("[units] #fontMap has no tbody");
        return;
    };
    render_table(&body, base_size(document));
    wire_copy_buttons(&body);

    let doc = document.clone();
    dom::add_click_listener(document, "updateButton", move |ev| {
        ev.prevent_default();
        render_table(&body, base_size(&doc));
    });
    wire_unit_inputs(document);
}
