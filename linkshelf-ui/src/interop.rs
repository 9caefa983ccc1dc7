//! Browser helpers that have no Dioxus equivalent.

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        dioxus_logger::tracing::warn!("No window for alert: {message}");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        dioxus_logger::tracing::warn!("alert failed: {:?}", e);
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
