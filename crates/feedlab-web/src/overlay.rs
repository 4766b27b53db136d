use web_sys as web;

// The hint banner is plain DOM; the canvas renders no text.

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("feed-hint") {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("feed-hint") {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id("feed-hint")
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}
