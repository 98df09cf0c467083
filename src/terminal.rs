use crate::particles::ParticleField;
use crate::renderer::Renderer;
use crate::session::{HistoryDirection, Session, SubmitEffect};
use crate::theme::DomTheme;
use crate::utils;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

pub type SharedSession = Rc<RefCell<Session>>;
pub type SharedRenderer = Rc<Renderer>;

/// Controller for one terminal view: routes user events into the session
/// state machine and mirrors the resulting state back into the DOM. The
/// session itself stays DOM-free and independently testable.
pub struct Terminal {
    session: SharedSession,
    renderer: SharedRenderer,
    theme: RefCell<DomTheme>,
    particles: RefCell<Option<ParticleField>>,
}

impl Terminal {
    pub fn new(session: SharedSession, renderer: SharedRenderer, theme: DomTheme) -> Self {
        Self {
            session,
            renderer,
            theme: RefCell::new(theme),
            particles: RefCell::new(None),
        }
    }

    pub fn initialize(&self) {
        self.refresh_prompt();
    }

    pub fn focus(&self) {
        self.renderer.focus_terminal();
    }

    pub fn submit_command(&self) -> Result<(), JsValue> {
        let raw = {
            let session = self.session.borrow();
            session.input_buffer.clone()
        };

        self.renderer.append_command(&raw)?;

        let effect = {
            let mut session = self.session.borrow_mut();
            let mut theme = self.theme.borrow_mut();
            session.submit(&raw, &mut *theme)
        };

        match effect {
            SubmitEffect::Cleared => {
                self.renderer.clear_output();
            }
            SubmitEffect::ParticlesToggled(enabled) => {
                self.apply_particles(enabled);
                self.append_last_output()?;
            }
            SubmitEffect::ThemeSwitched(_) | SubmitEffect::Rendered => {
                self.append_last_output()?;
            }
        }

        self.refresh_prompt();
        Ok(())
    }

    pub fn overwrite_input(&self, value: &str) {
        self.session.borrow_mut().update_input(value);
        self.refresh_prompt();
    }

    pub fn append_text(&self, value: &str) {
        if value.is_empty() {
            return;
        }
        {
            let mut session = self.session.borrow_mut();
            let mut buffer = session.input_buffer.clone();
            buffer.push_str(value);
            session.update_input(&buffer);
        }
        self.refresh_prompt();
    }

    pub fn delete_last_character(&self) {
        {
            let mut session = self.session.borrow_mut();
            let mut buffer = session.input_buffer.clone();
            buffer.pop();
            session.update_input(&buffer);
        }
        self.refresh_prompt();
    }

    pub fn clear_input(&self) {
        self.session.borrow_mut().clear_input();
        self.refresh_prompt();
    }

    pub fn navigate_history(&self, direction: HistoryDirection) {
        self.session.borrow_mut().navigate_history(direction);
        self.refresh_prompt();
    }

    pub fn accept_suggestion(&self) {
        self.session.borrow_mut().accept_suggestion();
        self.refresh_prompt();
    }

    /// Stops any running decorative effect. Called when the page goes away.
    pub fn shutdown_effects(&self) {
        if let Some(field) = self.particles.borrow_mut().take() {
            field.stop();
        }
    }

    /// Starts or stops the decorative particle field. Failures here must
    /// never disturb command processing, so a missing canvas just logs.
    fn apply_particles(&self, enabled: bool) {
        let mut slot = self.particles.borrow_mut();
        if enabled {
            if slot.is_none() {
                match ParticleField::start() {
                    Some(field) => *slot = Some(field),
                    None => utils::log("Particle canvas unavailable; skipping effect"),
                }
            }
        } else if let Some(field) = slot.take() {
            field.stop();
        }
    }

    fn append_last_output(&self) -> Result<(), JsValue> {
        let session = self.session.borrow();
        if let Some(entry) = session.transcript.last() {
            self.renderer.append_output(&entry.output)?;
        }
        Ok(())
    }

    fn refresh_prompt(&self) {
        let (buffer, suggestion) = {
            let session = self.session.borrow();
            (session.input_buffer.clone(), session.suggestion.clone())
        };
        self.renderer.update_input(&buffer);
        self.renderer.show_suggestion(&buffer, &suggestion);
    }
}
