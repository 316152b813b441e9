use crate::constants::MATRIX_TICK_MS;
use crate::core::loader::{LoaderPhase, LoaderProgress, MatrixRain};
use crate::dom;
use crate::frame::FrameDriver;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn start_matrix(document: &web::Document) -> Option<Interval> {
    let window = web::window()?;
    let canvas = document
        .get_element_by_id("loading-matrix")?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    ctx.fill_rect(0.0, 0.0, w, h);

    let mut rain = MatrixRain::new(w);
    log::debug!("[loader] matrix columns={}", rain.columns());
    Some(Interval::new(MATRIX_TICK_MS, move || {
        ctx.set_fill_style_str("#1515156f");
        ctx.fill_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str("#2c2c2c");
        ctx.set_font("15pt 'Space Mono'");
        for glyph in rain.step(&mut rand::thread_rng()) {
            _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
        }
    }))
}

/// Drive the loading screen until the page has loaded, then fade it out and
/// remove it.
pub fn init(document: &web::Document) {
    let matrix = Rc::new(RefCell::new(start_matrix(document)));
    let (Some(loader), Some(percent)) = (
        document
            .get_element_by_id("loader")
            .and_then(|l| l.dyn_into::<web::HtmlElement>().ok()),
        document.get_element_by_id("loader-percent"),
    ) else {
        log::error!("Loader elements not found. Script stopped.");
        return;
    };

    let progress = Rc::new(RefCell::new(LoaderProgress::new()));
    let tick_progress = progress.clone();
    FrameDriver::run_to_completion(move |dt| {
        let mut p = tick_progress.borrow_mut();
        let before = p.phase();
        let phase = p.tick(dt);
        if phase != before {
            log::debug!("[loader] {:?} at {:.1}%", phase, p.value());
        }
        percent.set_text_content(Some(&p.percent_label()));
        match phase {
            LoaderPhase::Filling | LoaderPhase::Finishing => true,
            LoaderPhase::Fading => {
                // dropping the interval stops the backdrop
                matrix.borrow_mut().take();
                dom::set_style(&loader, "opacity", &p.opacity().to_string());
                true
            }
            LoaderPhase::Done => {
                loader.remove();
                log::info!("[loader] done");
                false
            }
        }
    });

    if document.ready_state() == "complete" {
        progress.borrow_mut().finish();
    } else if let Some(window) = web::window() {
        dom::listen(&window, "load", move |_: web::Event| {
            progress.borrow_mut().finish();
        });
    }
}
