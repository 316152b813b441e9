use crate::constants::{CONTACT_ACCESS_KEY, CONTACT_ENDPOINT, NEWSLETTER_ENDPOINT};
use crate::core::toast::{ToastKind, ToastOptions};
use crate::core::validate::{validate_contact, validate_newsletter, ContactInput, Field, FieldError};
use crate::{dom, modal, toast};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const SUPPORT_EMAIL: &str = "support@nepaxis.com";

/// Shape of both endpoints' JSON replies; either field may carry the reason.
#[derive(Debug, Default, Deserialize)]
struct ApiReply {
    message: Option<String>,
    detail: Option<String>,
}

impl ApiReply {
    fn reason(self) -> String {
        self.message
            .or(self.detail)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// JSON replies parse as-is; a plain-text body becomes the message.
async fn read_reply(resp: gloo_net::http::Response) -> ApiReply {
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<ApiReply>(&body).unwrap_or_else(|_| ApiReply {
        message: Some(body.trim().to_string()).filter(|m| !m.is_empty()),
        detail: None,
    })
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Disables a submit button and swaps its label until dropped.
struct BusyButton {
    button: web::HtmlButtonElement,
    label: web::Element,
    original: String,
}

impl BusyButton {
    fn engage(button: web::HtmlButtonElement, label: Option<web::Element>, busy_text: &str) -> Self {
        let label = label.unwrap_or_else(|| button.clone().into());
        let original = label.text_content().unwrap_or_default();
        label.set_text_content(Some(busy_text));
        button.set_disabled(true);
        Self {
            button,
            label,
            original,
        }
    }
}

impl Drop for BusyButton {
    fn drop(&mut self) {
        self.label.set_text_content(Some(&self.original));
        self.button.set_disabled(false);
    }
}

fn field_value(root: &web::Element, id: &str) -> String {
    let Some(el) = dom::query(root, &format!("#{}", id)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_contact(form: &web::Element) -> ContactInput {
    ContactInput {
        full_name: field_value(form, Field::FullName.element_id()),
        company_name: field_value(form, Field::CompanyName.element_id()),
        email: field_value(form, Field::Email.element_id()),
        phone_number: field_value(form, Field::PhoneNumber.element_id()),
        message: field_value(form, Field::Message.element_id()),
    }
}

fn clear_errors(form: &web::Element) {
    for group in dom::query_all(form, ".form__group.error") {
        _ = group.class_list().remove_1("error");
    }
    for message in dom::query_all(form, ".error-message") {
        message.set_text_content(Some(""));
    }
}

fn set_error(form: &web::Element, field: Field, error: FieldError) {
    let Some(input) = dom::query(form, &format!("#{}", field.element_id())) else {
        return;
    };
    let Ok(Some(group)) = input.closest(".form__group") else {
        return;
    };
    _ = group.class_list().add_1("error");
    if let Some(message) = dom::query(&group, ".error-message") {
        message.set_text_content(Some(&error.to_string()));
    }
}

fn submit_button(root: &web::Element, selector: &str) -> Option<web::HtmlButtonElement> {
    dom::query(root, selector).and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
}

async fn submit_contact(form: web::HtmlFormElement) -> anyhow::Result<()> {
    clear_errors(&form);
    let errors = validate_contact(&read_contact(&form));
    if !errors.is_empty() {
        log::debug!("[contact] {} invalid field(s)", errors.len());
        for (field, error) in errors {
            set_error(&form, field, error);
        }
        return Ok(());
    }

    let data = web::FormData::new_with_form(&form).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    data.append_with_str("access_key", CONTACT_ACCESS_KEY)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let _busy = submit_button(&form, r#"button[type="submit"]"#)
        .map(|b| BusyButton::engage(b, None, "Sending..."));

    match Request::post(CONTACT_ENDPOINT).body(data).send().await {
        Ok(resp) => {
            let ok = resp.ok();
            let reply = read_reply(resp).await;
            if ok {
                form.reset();
                toast::show(
                    "Thanks! Your message has been sent.",
                    ToastOptions::kind(ToastKind::Success),
                );
            } else {
                let reason = reply.reason();
                log::warn!("[contact] rejected: {}", reason);
                toast::show(
                    &format!("Submission error: {}", reason),
                    ToastOptions::kind(ToastKind::Error),
                );
            }
        }
        Err(e) => {
            log::error!("[contact] request failed: {}", e);
            toast::show("Something went wrong.", ToastOptions::kind(ToastKind::Error));
        }
    }
    Ok(())
}

async fn submit_newsletter(document: web::Document, form: web::HtmlFormElement) -> anyhow::Result<()> {
    let email = field_value(&form, Field::NewsletterEmail.element_id());
    let email = email.trim();
    if let Err(e) = validate_newsletter(email) {
        toast::show(&e.to_string(), ToastOptions::kind(ToastKind::Error));
        return Ok(());
    }

    let _busy = dom::query_doc(&document, "#newsletterSubmit")
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
        .map(|b| {
            let label = dom::query(&b, ".btn__text");
            BusyButton::engage(b, label, "Subscribing!")
        });

    let request = Request::post(NEWSLETTER_ENDPOINT)
        .json(&SubscribeRequest { email })
        .map_err(|e| anyhow::anyhow!("encode subscribe request: {}", e))?;

    match request.send().await {
        Ok(resp) => {
            let ok = resp.ok();
            let reply = read_reply(resp).await;
            if ok {
                modal::notify(
                    &document,
                    "Success! You're in the loop.",
                    "Welcome aboard! We hate inbox clutter as much as you do. Your email is safe with us; we respect your privacy and will never spam you.",
                );
            } else {
                modal::notify(&document, "There was an issue.", &reply.reason());
            }
        }
        Err(e) => {
            log::error!("[newsletter] request failed: {}", e);
            modal::notify(
                &document,
                "Something went wrong.",
                &format!(
                    "{}. We are working on this issue. If it persists after some time, please email us at {}.",
                    e, SUPPORT_EMAIL
                ),
            );
        }
    }
    Ok(())
}

pub fn init_contact(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|f| f.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    dom::listen(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form.clone();
        spawn_local(async move {
            if let Err(e) = submit_contact(form).await {
                log::error!("[contact] {:?}", e);
            }
        });
    });
}

pub fn init_newsletter(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("newsletter")
        .and_then(|f| f.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    let document = document.clone();
    dom::listen(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form.clone();
        let document = document.clone();
        spawn_local(async move {
            if let Err(e) = submit_newsletter(document, form).await {
                log::error!("[newsletter] {:?}", e);
            }
        });
    });
}
