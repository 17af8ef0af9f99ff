// Accessibility helpers

/// Id of the polite live region that announces story updates.
pub const STATUS_REGION_ID: &str = "story-status";

/// Focus ring and screen-reader utility styles injected with the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #6C5CE7;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
