use crate::core::markup;
use crate::dom;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const ACTIVE_CLASS: &str = "modal--active";

/// A one-shot notification dialog appended to `<body>`. Closing removes it
/// from the DOM and drops its listeners.
pub struct NotificationModal {
    container: web::HtmlElement,
    listeners: RefCell<Vec<EventListener>>,
}

impl NotificationModal {
    pub fn new(document: &web::Document, body_html: &str, dismiss_text: &str) -> anyhow::Result<Rc<Self>> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let container = dom::create_div(document, "modal")?;
        let overlay = dom::create_div(document, "modal__overlay")?;
        let dialog = dom::create_div(document, "modal__dialog")?;
        dialog.set_inner_html(&markup::dialog(body_html, dismiss_text));
        container
            .append_child(&overlay)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        container
            .append_child(&dialog)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        body.append_child(&container)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let modal = Rc::new(Self {
            container,
            listeners: RefCell::new(Vec::new()),
        });

        // The listeners keep the modal alive while it is open; close() drops
        // them, which releases it.
        let mut listeners = Vec::with_capacity(2);
        let on_overlay = modal.clone();
        listeners.push(EventListener::new(&overlay, "click", move |_| on_overlay.close()));
        if let Some(dismiss) = dom::query(&dialog, ".modal__dismiss") {
            let on_dismiss = modal.clone();
            listeners.push(EventListener::new(&dismiss, "click", move |_| on_dismiss.close()));
        }
        *modal.listeners.borrow_mut() = listeners;
        Ok(modal)
    }

    pub fn open(&self) {
        _ = self.container.class_list().add_1(ACTIVE_CLASS);
    }

    pub fn close(&self) {
        _ = self.container.class_list().remove_1(ACTIVE_CLASS);
        self.container.remove();
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        drop(listeners);
    }
}

/// Show a titled notice. Failures are logged, never raised.
pub fn notify(document: &web::Document, title: &str, body: &str) {
    match NotificationModal::new(document, &markup::notice(title, body), "Dismiss") {
        Ok(modal) => modal.open(),
        Err(e) => log::error!("[modal] {:?}", e),
    }
}
