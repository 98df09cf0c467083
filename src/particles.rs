//! Decorative background particle field. Independent of the interpreter
//! core: it consumes only the `particles` toggle and exposes nothing back.
//! A missing canvas or 2d context skips the effect without disturbing
//! command processing.

use crate::utils::{self, CancelFlag};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_ID: &str = "particle-canvas";
const PARTICLE_COUNT: usize = 100;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub hue: f64,
}

impl Particle {
    pub fn spawn(rand: &mut dyn FnMut() -> f64, width: f64, height: f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            size: rand() * 2.0 + 2.0,
            speed_x: rand() * 1.0 - 0.5,
            speed_y: rand() * 1.0 - 0.5,
            hue: rand() * 60.0 + 200.0,
        }
    }

    /// Drifts one frame, wrapping around the canvas edges.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x > width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
    }

    fn color(&self) -> String {
        format!("hsla({:.0}, 70%, 50%, 0.3)", self.hue)
    }
}

/// Handle for a running particle animation. `stop` cancels the frame loop
/// and blanks the canvas; dropping the handle without stopping leaves the
/// loop running, so the owner must call `stop` on teardown.
pub struct ParticleField {
    cancel: CancelFlag,
    canvas: HtmlCanvasElement,
}

impl ParticleField {
    /// Starts the animation, or returns `None` when the canvas or its 2d
    /// context is unavailable.
    pub fn start() -> Option<Self> {
        let document = utils::document().ok()?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let _ = canvas.style().set_property("display", "block");
        resize_to_window(&canvas);

        let mut rand = || js_sys::Math::random();
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            particles.push(Particle::spawn(&mut rand, width, height));
        }

        let cancel = CancelFlag::new();
        run_frame_loop(canvas.clone(), context, particles, cancel.clone());

        Some(Self { cancel, canvas })
    }

    pub fn stop(&self) {
        self.cancel.cancel();
        if let Ok(Some(context)) = self.canvas.get_context("2d") {
            if let Ok(context) = context.dyn_into::<CanvasRenderingContext2d>() {
                context.clear_rect(
                    0.0,
                    0.0,
                    f64::from(self.canvas.width()),
                    f64::from(self.canvas.height()),
                );
            }
        }
        let _ = self.canvas.style().set_property("display", "none");
    }
}

fn resize_to_window(canvas: &HtmlCanvasElement) {
    let Some(window) = utils::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn run_frame_loop(
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    mut particles: Vec<Particle>,
    cancel: CancelFlag,
) {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduler = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancel.is_cancelled() {
            scheduler.borrow_mut().take();
            return;
        }

        resize_to_window(&canvas);
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        context.clear_rect(0.0, 0.0, width, height);
        for particle in &mut particles {
            particle.step(width, height);
            context.set_fill_style_str(&particle.color());
            context.begin_path();
            let _ = context.arc(particle.x, particle.y, particle.size, 0.0, TAU);
            context.fill();
        }

        request_next_frame(&scheduler);
    }) as Box<dyn FnMut()>));

    request_next_frame(&callback);
}

fn request_next_frame(callback: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = utils::window() else {
        return;
    };
    if let Some(closure) = callback.borrow().as_ref() {
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            utils::log("Failed to schedule particle animation frame");
        }
    }
}
