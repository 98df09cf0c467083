mod commands;
mod content;
mod input;
mod intro;
mod metrics;
mod particles;
mod renderer;
mod session;
mod terminal;
mod theme;
mod utils;

use crate::content::INTRO_SCRIPT;
use crate::intro::IntroSequencer;
use crate::metrics::GaugeDriver;
use crate::renderer::Renderer;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::theme::DomTheme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let session = Rc::new(RefCell::new(Session::new()));
    let renderer = Rc::new(Renderer::new()?);
    let theme = DomTheme::attach()?;
    let terminal = Rc::new(Terminal::new(
        Rc::clone(&session),
        Rc::clone(&renderer),
        theme,
    ));

    let gauges = GaugeDriver::start(Rc::clone(&renderer));

    let boot_renderer = Rc::clone(&renderer);
    let boot_terminal = Rc::clone(&terminal);
    let boot_gauges = Rc::clone(&gauges);
    let sequencer = Rc::new(IntroSequencer::play(
        renderer,
        INTRO_SCRIPT,
        Box::new(move || {
            if let Err(err) = bring_up_terminal(&boot_renderer, &boot_terminal, &boot_gauges) {
                utils::log(&format!("Failed to reveal terminal: {err:?}"));
            }
        }),
    ));

    install_teardown(sequencer, gauges, terminal)?;

    Ok(())
}

fn bring_up_terminal(
    renderer: &Rc<Renderer>,
    terminal: &Rc<Terminal>,
    gauges: &Rc<GaugeDriver>,
) -> Result<(), JsValue> {
    renderer.reveal_terminal()?;
    terminal.initialize();
    input::install_listeners(Rc::clone(terminal), Rc::clone(gauges))?;
    terminal.focus();
    Ok(())
}

/// Stops every timer chain when the page goes away, so nothing fires into a
/// document that is being torn down.
fn install_teardown(
    sequencer: Rc<IntroSequencer>,
    gauges: Rc<GaugeDriver>,
    terminal: Rc<Terminal>,
) -> Result<(), JsValue> {
    let window =
        utils::window().ok_or_else(|| JsValue::from_str("Window unavailable"))?;
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        sequencer.cancel();
        gauges.shutdown();
        terminal.shutdown_effects();
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
