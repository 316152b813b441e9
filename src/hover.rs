use crate::constants::{INTRO_DURATION_SEC, INTRO_OFFSET_PCT, INTRO_STAGGER_SEC};
use crate::core::tween::{stagger, Ease};
use crate::core::{HoverItem, ItemBounds, PanelState, PanelTransform, PointerTracker};
use crate::dom;
use crate::frame::{self, FrameCallback, FrameDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM nodes owned by one menu item. `reveal` and below are created here.
struct RevealNodes {
    item: web::HtmlElement,
    reveal: web::HtmlElement,
    inner: web::HtmlElement,
    image: web::HtmlElement,
}

fn build_reveal(document: &web::Document, item: web::HtmlElement, url: &str) -> anyhow::Result<RevealNodes> {
    let reveal = dom::create_div(document, "hover-reveal")?;
    let inner = dom::create_div(document, "hover-reveal__inner")?;
    let image = dom::create_div(document, "hover-reveal__img")?;
    dom::set_style(&image, "background-image", &format!("url({})", url));

    inner
        .append_child(&image)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    reveal
        .append_child(&inner)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    item.append_child(&reveal)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    Ok(RevealNodes {
        item,
        reveal,
        inner,
        image,
    })
}

fn apply_follow(reveal: &web::HtmlElement, t: &PanelTransform) {
    dom::set_style(reveal, "transform", &t.css_transform());
    dom::set_style(reveal, "filter", &t.css_filter());
}

fn apply_panel(nodes: &RevealNodes, panel: &PanelState) {
    dom::set_style(
        &nodes.inner,
        "transform",
        &format!("translateX({:.3}%)", panel.inner_offset),
    );
    dom::set_style(
        &nodes.image,
        "transform",
        &format!("translateX({:.3}%)", panel.image_offset),
    );
    dom::set_style(&nodes.reveal, "opacity", &panel.opacity.to_string());
    dom::set_style(&nodes.item, "z-index", &panel.z_index.to_string());
}

fn schedule_follow(model: &RefCell<HoverItem>, follow: &FrameCallback) {
    model
        .borrow_mut()
        .frame
        .schedule_with(|| frame::request(follow));
}

fn wire_item(
    model: Rc<RefCell<HoverItem>>,
    nodes: Rc<RevealNodes>,
    tracker: Rc<RefCell<PointerTracker>>,
    item_count: usize,
) {
    apply_panel(&nodes, &model.borrow().panel);

    // cursor-follow loop, armed while hovered
    let follow: FrameCallback = Rc::new(RefCell::new(None));
    {
        let model = model.clone();
        let nodes = nodes.clone();
        let tracker = tracker.clone();
        let follow_tick = follow.clone();
        *follow.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let transform = {
                let mut item = model.borrow_mut();
                item.frame.clear();
                if !item.is_hovered() {
                    return;
                }
                let mut tracker = tracker.borrow_mut();
                item.render(&mut tracker, || ItemBounds {
                    item: dom::bounds_of(&nodes.item),
                    panel: dom::bounds_of(&nodes.reveal),
                })
            };
            apply_follow(&nodes.reveal, &transform);
            schedule_follow(&model, &follow_tick);
        }) as Box<dyn FnMut()>));
    }

    // reveal/hide slides
    let slides = {
        let model = model.clone();
        let nodes = nodes.clone();
        FrameDriver::new(move |dt| {
            let mut item = model.borrow_mut();
            let running = item.panel.tick(dt);
            apply_panel(&nodes, &item.panel);
            running
        })
    };

    {
        let model = model.clone();
        let nodes_enter = nodes.clone();
        let tracker = tracker.clone();
        let slides = slides.clone();
        dom::listen(&nodes.item, "mouseenter", move |_: web::MouseEvent| {
            let direction = tracker.borrow().direction();
            {
                let mut item = model.borrow_mut();
                item.enter(direction, item_count);
                log::debug!("[hover] reveal {} ({}) {:?}", item.index, item.image_url, direction);
            }
            apply_panel(&nodes_enter, &model.borrow().panel);
            slides.start();
            schedule_follow(&model, &follow);
        });
    }

    dom::listen(&nodes.item, "mouseleave", move |_: web::MouseEvent| {
        let direction = tracker.borrow().direction();
        if let Some(handle) = model.borrow_mut().leave(direction) {
            frame::cancel(handle);
        }
        slides.start();
    });
}

/// Slide every item's text up into place, one after another.
fn play_intro(text_inners: Vec<web::HtmlElement>) {
    if text_inners.is_empty() {
        return;
    }
    let mut tweens = stagger(
        text_inners.len(),
        INTRO_OFFSET_PCT,
        0.0,
        INTRO_DURATION_SEC,
        INTRO_STAGGER_SEC,
        Ease::ExpoOut,
    );
    for el in &text_inners {
        dom::set_style(el, "transform", &format!("translateY({}%)", INTRO_OFFSET_PCT));
    }
    FrameDriver::run_to_completion(move |dt| {
        let mut running = false;
        for (tween, el) in tweens.iter_mut().zip(&text_inners) {
            let y = tween.advance(dt);
            dom::set_style(el, "transform", &format!("translateY({:.3}%)", y));
            running |= !tween.is_finished();
        }
        running
    });
}

/// Wire the hover-reveal menu. Returns the number of active items, or `None`
/// when the page has no such menu.
pub fn init(document: &web::Document, tracker: Rc<RefCell<PointerTracker>>) -> Option<usize> {
    let Some(container) = dom::query_doc(document, ".capabilities__section") else {
        log::debug!("[hover] no .capabilities__section on this page");
        return None;
    };
    let entries: Vec<(web::HtmlElement, String)> =
        dom::query_all(&container, ".floating__image-wrapper")
            .into_iter()
            .filter_map(|el| {
                let url = el.get_attribute("data-img")?;
                let el = el.dyn_into::<web::HtmlElement>().ok()?;
                Some((el, url))
            })
            .collect();
    if entries.is_empty() {
        log::debug!("[hover] menu has no items");
        return None;
    }

    let item_count = entries.len();
    let mut text_inners = Vec::new();
    for (index, (el, url)) in entries.into_iter().enumerate() {
        if let Some(text) = dom::query(&el, ".floating__image-text")
            .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        {
            text_inners.push(text);
        }
        let item = HoverItem::new(index, url);
        let nodes = match build_reveal(document, el, &item.image_url) {
            Ok(n) => Rc::new(n),
            Err(e) => {
                log::error!("[hover] item {} layout failed: {:?}", item.index, e);
                continue;
            }
        };
        wire_item(Rc::new(RefCell::new(item)), nodes, tracker.clone(), item_count);
    }

    play_intro(text_inners);
    log::info!("[hover] {} menu items ready", item_count);
    Some(item_count)
}
