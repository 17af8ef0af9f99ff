//! Web Share API with a clipboard fallback.

use crate::dom;
use bridgetales_core::ShareContent;
use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::ShareData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

impl ShareOutcome {
    #[must_use]
    pub const fn status_key(self) -> &'static str {
        match self {
            Self::Shared => "share.shared",
            Self::Copied => "share.copied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Sharing is not available in this browser")]
    Unavailable,
    #[error("{0}")]
    Rejected(String),
}

/// Share through the native sheet when the browser has one, otherwise copy
/// the text to the clipboard.
///
/// # Errors
/// Returns [`ShareError`] when neither mechanism is available or the browser
/// rejects the request.
#[allow(clippy::future_not_send)]
pub async fn share(content: &ShareContent) -> Result<ShareOutcome, ShareError> {
    let navigator = dom::window().ok_or(ShareError::Unavailable)?.navigator();
    let native = Reflect::has(&navigator, &JsValue::from_str("share")).unwrap_or(false);
    if native {
        let data = ShareData::new();
        data.set_title(&content.title);
        data.set_text(&content.text);
        JsFuture::from(navigator.share_with_data(&data))
            .await
            .map_err(|err| ShareError::Rejected(dom::js_error_message(&err)))?;
        return Ok(ShareOutcome::Shared);
    }
    JsFuture::from(navigator.clipboard().write_text(&content.text))
        .await
        .map_err(|err| ShareError::Rejected(dom::js_error_message(&err)))?;
    Ok(ShareOutcome::Copied)
}
