//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Storage, Url, Window};

use crate::config::ACCESS_TOKEN_KEY;
use crate::core::error::ExportError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read the staff access token, if one is stored.
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Trigger a browser download of in-memory bytes via a temporary object URL.
pub fn download_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
    let window = window().ok_or(ExportError::DownloadFailed)?;
    let document = window.document().ok_or(ExportError::DownloadFailed)?;

    let array = Uint8Array::from(bytes);
    let parts = Array::new();
    parts.push(&array.buffer());
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|_| ExportError::DownloadFailed)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| ExportError::DownloadFailed)?;

    let anchor = document
        .create_element("a")
        .map_err(|_| ExportError::DownloadFailed)?
        .unchecked_into::<web_sys::HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// Go back one history entry, preserving the previous page's query string.
pub fn history_back() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.back();
    }
}

/// Scroll the window back to the top of the list after a page change.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
