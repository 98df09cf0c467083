use crate::commands::Output;
use crate::content::{Severity, PROMPT_LABEL};
use crate::metrics::Gauges;
use crate::utils;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSpanElement};

const INTRO_ID: &str = "intro";
const INTRO_LOG_ID: &str = "intro-log";
const TERMINAL_ID: &str = "terminal";
const OUTPUT_ID: &str = "output";
const PROMPT_INPUT_ID: &str = "prompt-input";
const PROMPT_HIDDEN_INPUT_ID: &str = "prompt-hidden-input";
const SUGGESTION_GHOST_ID: &str = "suggestion-ghost";

struct GaugeBar {
    bar: HtmlElement,
    value: HtmlElement,
}

struct GaugePanel {
    cpu: GaugeBar,
    memory: GaugeBar,
    network: GaugeBar,
    processes: GaugeBar,
}

/// Draws session state into the page. The session core never touches the
/// DOM; everything visible flows through here.
pub struct Renderer {
    document: Document,
    intro_root: HtmlElement,
    intro_log: HtmlElement,
    terminal_root: HtmlElement,
    output: HtmlElement,
    prompt_input: HtmlElement,
    prompt_hidden_input: HtmlInputElement,
    suggestion_ghost: HtmlElement,
    // The stats panel is decorative; a page without it still gets a working
    // terminal.
    gauges: Option<GaugePanel>,
}

impl Renderer {
    pub fn new() -> Result<Self, JsValue> {
        let document = utils::document()?;
        let intro_root = get_html_element(&document, INTRO_ID)?;
        let intro_log = get_html_element(&document, INTRO_LOG_ID)?;
        let terminal_root = get_html_element(&document, TERMINAL_ID)?;
        let output = get_html_element(&document, OUTPUT_ID)?;
        let prompt_input = get_html_element(&document, PROMPT_INPUT_ID)?;
        let prompt_hidden_input =
            get_html_element(&document, PROMPT_HIDDEN_INPUT_ID)?.dyn_into::<HtmlInputElement>()?;
        let suggestion_ghost = get_html_element(&document, SUGGESTION_GHOST_ID)?;
        let gauges = find_gauge_panel(&document);

        Ok(Self {
            document,
            intro_root,
            intro_log,
            terminal_root,
            output,
            prompt_input,
            prompt_hidden_input,
            suggestion_ghost,
            gauges,
        })
    }

    pub fn intro_append_line(&self, severity: Severity) -> Result<HtmlElement, JsValue> {
        let line = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        line.set_class_name(&format!("intro-line {}", severity.css_class()));

        let prefix = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlSpanElement>()?;
        prefix.set_class_name("intro-prefix");
        prefix.set_text_content(Some(severity.prefix()));

        let text = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlElement>()?;
        text.set_class_name("intro-text");

        line.append_child(&prefix)?;
        line.append_child(&text)?;
        self.intro_log.append_child(&line)?;
        Ok(text)
    }

    /// Swaps the intro overlay for the terminal view.
    pub fn reveal_terminal(&self) -> Result<(), JsValue> {
        self.intro_root.set_attribute("data-state", "done")?;
        self.intro_root.set_attribute("aria-hidden", "true")?;
        self.terminal_root.set_attribute("data-state", "active")?;
        Ok(())
    }

    pub fn update_input(&self, buffer: &str) {
        self.prompt_input.set_text_content(Some(buffer));
        self.prompt_hidden_input.set_value(buffer);
        let end = buffer.encode_utf16().count() as u32;
        let _ = self.prompt_hidden_input.set_selection_range(end, end);
    }

    /// Shows the untyped tail of the completion as ghost text after the
    /// buffer. Suggestion keys are prefixes of their commands, so the tail
    /// is what remains after the normalized buffer.
    pub fn show_suggestion(&self, buffer: &str, suggestion: &str) {
        let typed = buffer.trim().to_ascii_lowercase();
        let ghost = suggestion.strip_prefix(typed.as_str()).unwrap_or(suggestion);
        self.suggestion_ghost.set_text_content(Some(ghost));
    }

    pub fn focus_terminal(&self) {
        let _ = self.prompt_hidden_input.focus();
        let end = self.prompt_hidden_input.value().encode_utf16().count() as u32;
        let _ = self.prompt_hidden_input.set_selection_range(end, end);
    }

    pub fn append_command(&self, command: &str) -> Result<(), JsValue> {
        let line = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        line.set_class_name("line command-line");

        let label = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlSpanElement>()?;
        label.set_class_name("prompt-label");
        label.set_text_content(Some(PROMPT_LABEL));

        let text = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlSpanElement>()?;
        text.set_class_name("prompt-command");
        text.set_text_content(Some(command));

        line.append_child(&label)?;
        line.append_child(&text)?;
        self.output.append_child(&line)?;
        self.scroll_to_bottom();
        Ok(())
    }

    pub fn append_output(&self, output: &Output) -> Result<(), JsValue> {
        let wrapper = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        wrapper.set_class_name("line output-line");

        match output {
            Output::Text(text) => {
                let pre = self
                    .document
                    .create_element("pre")?
                    .dyn_into::<HtmlElement>()?;
                pre.set_class_name("output-block");
                pre.set_text_content(Some(text));
                wrapper.append_child(&pre)?;
            }
            Output::Html(html) => {
                let container = self
                    .document
                    .create_element("div")?
                    .dyn_into::<HtmlElement>()?;
                container.set_class_name("output-block output-block--html");
                container.set_inner_html(html);
                wrapper.append_child(&container)?;
            }
        }

        self.output.append_child(&wrapper)?;
        self.scroll_to_bottom();
        Ok(())
    }

    pub fn clear_output(&self) {
        self.output.set_inner_html("");
    }

    /// Paints the synthetic gauge bars. Missing panel markup is a silent
    /// no-op; the effect is cosmetic.
    pub fn update_gauges(&self, gauges: &Gauges) {
        let Some(panel) = &self.gauges else {
            return;
        };
        set_gauge(&panel.cpu, gauges.cpu, 100.0, &format!("{:.1}%", gauges.cpu));
        set_gauge(
            &panel.memory,
            gauges.memory,
            100.0,
            &format!("{:.1}%", gauges.memory),
        );
        set_gauge(
            &panel.network,
            gauges.network,
            100.0,
            &format!("{:.1}%", gauges.network),
        );
        set_gauge(
            &panel.processes,
            gauges.processes,
            20.0,
            &format!("{:.0}", gauges.processes),
        );
    }

    pub fn scroll_to_bottom(&self) {
        self.terminal_root
            .set_scroll_top(self.terminal_root.scroll_height());
    }
}

fn set_gauge(gauge: &GaugeBar, value: f64, scale: f64, label: &str) {
    let percent = (value / scale * 100.0).clamp(0.0, 100.0);
    let _ = gauge
        .bar
        .style()
        .set_property("width", &format!("{percent:.1}%"));
    gauge.value.set_text_content(Some(label));
}

fn find_gauge_panel(document: &Document) -> Option<GaugePanel> {
    Some(GaugePanel {
        cpu: find_gauge_bar(document, "cpu")?,
        memory: find_gauge_bar(document, "mem")?,
        network: find_gauge_bar(document, "net")?,
        processes: find_gauge_bar(document, "proc")?,
    })
}

fn find_gauge_bar(document: &Document, key: &str) -> Option<GaugeBar> {
    let bar = document
        .get_element_by_id(&format!("gauge-{key}-bar"))?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let value = document
        .get_element_by_id(&format!("gauge-{key}-value"))?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(GaugeBar { bar, value })
}

fn get_html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    let element: Element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{id} element")))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}
