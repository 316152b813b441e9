use crate::core::FrameSlot;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Request one animation frame for `callback`. Returns the frame handle.
pub fn request(callback: &FrameCallback) -> Option<i32> {
    let window = web::window()?;
    let cb = callback.borrow();
    let closure = cb.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn cancel(handle: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(handle);
    }
}

/// A reusable self-rearming frame loop.
///
/// `step` receives the seconds since the previous frame and returns whether
/// another frame is wanted. The loop never holds more than one pending frame.
#[derive(Clone)]
pub struct FrameDriver {
    slot: Rc<RefCell<FrameSlot>>,
    callback: FrameCallback,
    last: Rc<Cell<Option<Instant>>>,
}

impl FrameDriver {
    pub fn new(step: impl FnMut(f32) -> bool + 'static) -> Self {
        Self::build(step, false)
    }

    /// Run a one-shot animation. Once `step` returns false the loop frees
    /// its closure and cannot be restarted.
    pub fn run_to_completion(step: impl FnMut(f32) -> bool + 'static) {
        Self::build(step, true).start();
    }

    fn build(mut step: impl FnMut(f32) -> bool + 'static, release_when_done: bool) -> Self {
        let slot = Rc::new(RefCell::new(FrameSlot::Idle));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let last = Rc::new(Cell::new(None::<Instant>));

        let slot_tick = slot.clone();
        let callback_tick = callback.clone();
        let last_tick = last.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            slot_tick.borrow_mut().clear();
            let now = Instant::now();
            let dt = last_tick
                .get()
                .map(|prev| (now - prev).as_secs_f32())
                .unwrap_or(0.0);
            last_tick.set(Some(now));
            if step(dt) {
                slot_tick
                    .borrow_mut()
                    .schedule_with(|| request(&callback_tick));
            } else if release_when_done {
                // freed by wasm-bindgen once this call returns
                let released = callback_tick.borrow_mut().take();
                drop(released);
            }
        }) as Box<dyn FnMut()>));

        Self {
            slot,
            callback,
            last,
        }
    }

    /// Start (or keep) the loop running.
    pub fn start(&self) {
        if self.slot.borrow().is_scheduled() {
            return;
        }
        self.last.set(Some(Instant::now()));
        self.slot
            .borrow_mut()
            .schedule_with(|| request(&self.callback));
    }
}
