// Small HTML builders for modal bodies.

/// Escape text for insertion into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Modal body with a title and one paragraph. Both are escaped.
pub fn notice(title: &str, body: &str) -> String {
    format!(
        r#"<div class="modal__header"><h5 class="modal__title">{}</h5></div><div class="modal__content"><p>{}</p></div>"#,
        escape_html(title),
        escape_html(body)
    )
}

pub fn dialog(body_html: &str, dismiss_text: &str) -> String {
    format!(
        r#"<div class="modal__body">{}</div><div class="fl-row jc-end al-center modal__actions"><button class="modal__dismiss btn--outline btn--inverse">{}</button></div>"#,
        body_html,
        escape_html(dismiss_text)
    )
}
