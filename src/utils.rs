use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("Document unavailable"))
}

pub fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

/// Shared abort flag for self-rescheduling timer chains. Every scheduled
/// step checks the flag before touching the DOM, so cancelling a handle
/// guarantees nothing fires after the owning view is torn down.
#[derive(Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_encodes_special_characters() {
        let original = "<tag attr=\"value & more\">";
        let escaped = escape_html(original);
        assert_eq!(escaped, "&lt;tag attr=&quot;value &amp; more&quot;&gt;");
        assert!(
            !escaped.contains('<') && !escaped.contains('>'),
            "Escaped string should not contain raw angle brackets: {escaped}"
        );
    }

    #[test]
    fn cancel_flag_clones_share_state() {
        let flag = CancelFlag::new();
        let sibling = flag.clone();
        assert!(!sibling.is_cancelled());
        flag.cancel();
        assert!(sibling.is_cancelled());
    }
}
