use crate::constants::TOAST_FADE_MS;
use crate::core::toast::{ToastOptions, ToastStack};
use crate::dom;
use fnv::FnvHashMap;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Page-wide toast container with timed dismissal.
pub struct ToastManager {
    document: web::Document,
    container: web::HtmlElement,
    stack: RefCell<ToastStack>,
    timers: RefCell<FnvHashMap<String, Timeout>>,
    clicks: RefCell<Option<EventListener>>,
}

thread_local! {
    static MANAGER: RefCell<Option<Rc<ToastManager>>> = const { RefCell::new(None) };
}

impl ToastManager {
    /// The shared manager, creating its container on first use.
    pub fn get() -> Option<Rc<Self>> {
        MANAGER.with(|slot| {
            if let Some(m) = slot.borrow().as_ref() {
                return Some(m.clone());
            }
            let manager = match Self::create() {
                Ok(m) => Rc::new(m),
                Err(e) => {
                    log::error!("[toast] {:?}", e);
                    return None;
                }
            };
            manager.wire_clicks();
            *slot.borrow_mut() = Some(manager.clone());
            Some(manager)
        })
    }

    fn create() -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let container = dom::create_div(&document, "toast-container")?;
        body.append_child(&container)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            document,
            container,
            stack: RefCell::new(ToastStack::new()),
            timers: RefCell::new(FnvHashMap::default()),
            clicks: RefCell::new(None),
        })
    }

    // One listener on the container dismisses whichever toast was clicked.
    fn wire_clicks(self: &Rc<Self>) {
        let manager: Weak<Self> = Rc::downgrade(self);
        let listener = EventListener::new(&self.container, "click", move |ev| {
            let Some(manager) = manager.upgrade() else {
                return;
            };
            let toast = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(".toast").ok().flatten());
            if let Some(toast) = toast {
                manager.remove(&toast.id());
            }
        });
        *self.clicks.borrow_mut() = Some(listener);
    }

    pub fn show(self: &Rc<Self>, message: &str, options: ToastOptions) -> Option<String> {
        if let Some(id) = options.id.as_deref() {
            if self.stack.borrow().contains(id) {
                if let Some(stale) = self.document.get_element_by_id(id) {
                    stale.remove();
                }
            }
        }
        let plan = self
            .stack
            .borrow_mut()
            .push(&options, &mut rand::thread_rng());
        if let Some(oldest) = &plan.evict {
            self.remove(oldest);
        }

        let toast = match dom::create_div(&self.document, &plan.class_name) {
            Ok(t) => t,
            Err(e) => {
                log::error!("[toast] {:?}", e);
                self.stack.borrow_mut().remove(&plan.id);
                return None;
            }
        };
        toast.set_id(&plan.id);
        toast.set_text_content(Some(message));
        _ = self.container.append_child(&toast);

        let on_timeout = Rc::downgrade(self);
        let timeout_id = plan.id.clone();
        let timer = Timeout::new(plan.duration_ms, move || {
            if let Some(manager) = on_timeout.upgrade() {
                manager.remove(&timeout_id);
            }
        });
        // a reused id replaces (and cancels) the earlier timer
        if let Some(old) = self.timers.borrow_mut().insert(plan.id.clone(), timer) {
            old.cancel();
        }
        log::debug!("[toast] {} shown, {} visible", plan.id, self.stack.borrow().len());
        Some(plan.id)
    }

    /// Fade out and drop a toast. Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        let timer = self.timers.borrow_mut().remove(id);
        if let Some(timer) = timer {
            timer.cancel();
        }
        let known = self.stack.borrow_mut().remove(id);
        if known && self.stack.borrow().is_empty() {
            log::debug!("[toast] all dismissed");
        }

        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };
        _ = el.class_list().add_1("fade-out");
        spawn_local(async move {
            TimeoutFuture::new(TOAST_FADE_MS).await;
            el.remove();
        });
    }
}

pub fn show(message: &str, options: ToastOptions) {
    if let Some(manager) = ToastManager::get() {
        manager.show(message, options);
    }
}
