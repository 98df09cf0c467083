use crate::metrics::GaugeDriver;
use crate::session::HistoryDirection;
use crate::terminal::Terminal;
use crate::utils;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    ClipboardEvent, HtmlElement, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent,
    PointerEvent,
};

pub fn install_listeners(terminal: Rc<Terminal>, gauges: Rc<GaugeDriver>) -> Result<(), JsValue> {
    let document = utils::document()?;
    let prompt_line = document
        .get_element_by_id("prompt-line")
        .ok_or_else(|| JsValue::from_str("Missing #prompt-line element"))?
        .dyn_into::<HtmlElement>()?;
    let hidden_input = document
        .get_element_by_id("prompt-hidden-input")
        .ok_or_else(|| JsValue::from_str("Missing #prompt-hidden-input element"))?
        .dyn_into::<HtmlInputElement>()?;

    let pointer_terminal = Rc::clone(&terminal);
    let pointer_closure = Closure::wrap(Box::new(move |_event: PointerEvent| {
        pointer_terminal.focus();
    }) as Box<dyn FnMut(_)>);
    prompt_line.add_event_listener_with_callback(
        "pointerdown",
        pointer_closure.as_ref().unchecked_ref(),
    )?;
    pointer_closure.forget();

    let input_terminal = Rc::clone(&terminal);
    let hidden_input_for_input = hidden_input.clone();
    let input_closure = Closure::wrap(Box::new(move |_event: InputEvent| {
        input_terminal.overwrite_input(&hidden_input_for_input.value());
    }) as Box<dyn FnMut(_)>);
    hidden_input
        .add_event_listener_with_callback("input", input_closure.as_ref().unchecked_ref())?;
    input_closure.forget();

    let keydown_terminal = Rc::clone(&terminal);
    let keydown_gauges = Rc::clone(&gauges);
    let keydown_closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        keydown_gauges.record_interaction();
        handle_keydown(&keydown_terminal, event);
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("keydown", keydown_closure.as_ref().unchecked_ref())?;
    keydown_closure.forget();

    let click_gauges = Rc::clone(&gauges);
    let click_closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
        click_gauges.record_interaction();
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;
    click_closure.forget();

    let paste_terminal = Rc::clone(&terminal);
    let paste_closure = Closure::wrap(Box::new(move |event: ClipboardEvent| {
        handle_paste(&paste_terminal, event);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("paste", paste_closure.as_ref().unchecked_ref())?;
    paste_closure.forget();

    Ok(())
}

fn handle_keydown(terminal: &Terminal, event: KeyboardEvent) {
    match event.key().as_str() {
        "Backspace" => {
            event.prevent_default();
            terminal.delete_last_character();
        }
        "Enter" => {
            event.prevent_default();
            if let Err(err) = terminal.submit_command() {
                utils::log(&format!("Error running command: {err:?}"));
            }
        }
        "Tab" => {
            event.prevent_default();
            terminal.accept_suggestion();
        }
        "ArrowUp" => {
            event.prevent_default();
            terminal.navigate_history(HistoryDirection::Older);
        }
        "ArrowDown" => {
            event.prevent_default();
            terminal.navigate_history(HistoryDirection::Newer);
        }
        "Escape" => {
            event.prevent_default();
            terminal.clear_input();
        }
        _ => {
            handle_printable(terminal, &event);
        }
    }
}

fn handle_printable(terminal: &Terminal, event: &KeyboardEvent) {
    if event.ctrl_key() || event.meta_key() || event.alt_key() || event.is_composing() {
        return;
    }

    let key = event.key();
    if is_printable_character_key(&key) {
        event.prevent_default();
        terminal.append_text(&key);
    }
}

fn handle_paste(terminal: &Terminal, event: ClipboardEvent) {
    if let Some(data) = event.clipboard_data() {
        if let Ok(raw) = data.get_data("text") {
            let sanitized = sanitize_pasted_text(&raw);
            if !sanitized.is_empty() {
                event.prevent_default();
                terminal.append_text(&sanitized);
            }
        }
    }
}

/// Flattens pasted text to a single prompt-safe line: newlines and tabs
/// collapse to one space, internal spacing is preserved.
fn sanitize_pasted_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut pending_space = false;

    for ch in input.chars() {
        match ch {
            '\r' => {}
            '\n' | '\t' => {
                if !sanitized.is_empty() && !sanitized.ends_with(' ') {
                    pending_space = true;
                }
            }
            ' ' => {
                if pending_space {
                    if !sanitized.ends_with(' ') {
                        sanitized.push(' ');
                    }
                    pending_space = false;
                } else {
                    sanitized.push(' ');
                }
            }
            _ => {
                if pending_space && !sanitized.ends_with(' ') {
                    sanitized.push(' ');
                }
                pending_space = false;
                sanitized.push(ch);
            }
        }
    }

    sanitized.trim_matches(' ').to_string()
}

fn is_printable_character_key(key: &str) -> bool {
    if matches!(key, "Dead" | "Process") {
        return false;
    }

    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(_), None))
}

#[cfg(test)]
mod tests {
    use super::{is_printable_character_key, sanitize_pasted_text};

    #[test]
    fn sanitize_trims_and_flattens_whitespace() {
        let raw = " hello\tworld \nsecond line\r\n";
        let cleaned = sanitize_pasted_text(raw);
        assert_eq!(cleaned, "hello world second line");
    }

    #[test]
    fn sanitize_preserves_internal_spacing() {
        let raw = "keep  spacing";
        let cleaned = sanitize_pasted_text(raw);
        assert_eq!(cleaned, "keep  spacing");
    }

    #[test]
    fn printable_key_detects_single_unicode_scalar() {
        assert!(is_printable_character_key("a"));
        assert!(is_printable_character_key(" "));
        assert!(is_printable_character_key("é"));
        assert!(is_printable_character_key("京"));
    }

    #[test]
    fn printable_key_rejects_control_sequences() {
        assert!(!is_printable_character_key(""));
        assert!(!is_printable_character_key("Enter"));
        assert!(!is_printable_character_key("ArrowLeft"));
        assert!(!is_printable_character_key("Dead"));
        assert!(!is_printable_character_key("Process"));
    }
}
