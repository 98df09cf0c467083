//! Synthetic resource gauges. The values are cosmetic noise, not real
//! system metrics: a pure simulator nudges them inside fixed bands and a
//! timer driver paints them into the stats panel.

use crate::renderer::Renderer;
use crate::utils::CancelFlag;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

const CPU_FLOOR: f64 = 15.0;
const CPU_CEILING: f64 = 95.0;
const MEMORY_FLOOR: f64 = 35.0;
const MEMORY_CEILING: f64 = 90.0;
const NETWORK_FLOOR: f64 = 10.0;
const NETWORK_CEILING: f64 = 85.0;
const PROCESS_FLOOR: f64 = 2.0;
const PROCESS_CEILING: f64 = 20.0;

const FLUCTUATE_INTERVAL_MS: u32 = 2000;
const DECAY_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauges {
    pub cpu: f64,
    pub memory: f64,
    pub network: f64,
    pub processes: f64,
}

/// Pure gauge model. Randomness is injected so the band invariants are
/// testable without a browser.
#[derive(Debug)]
pub struct MetricsSim {
    gauges: Gauges,
}

impl Default for MetricsSim {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSim {
    pub fn new() -> Self {
        Self {
            gauges: Gauges {
                cpu: CPU_FLOOR,
                memory: MEMORY_FLOOR,
                network: NETWORK_FLOOR,
                processes: PROCESS_FLOOR,
            },
        }
    }

    pub fn gauges(&self) -> Gauges {
        self.gauges
    }

    /// Slow upward drift, clamped to each gauge's band.
    pub fn fluctuate(&mut self, rand: &mut dyn FnMut() -> f64) {
        self.gauges.cpu = clamp(self.gauges.cpu + rand() * 8.0, CPU_FLOOR, CPU_CEILING);
        self.gauges.memory = clamp(
            self.gauges.memory + rand() * 6.0,
            MEMORY_FLOOR,
            MEMORY_CEILING,
        );
        self.gauges.network = clamp(
            self.gauges.network + rand() * 4.0,
            NETWORK_FLOOR,
            NETWORK_CEILING,
        );
        self.gauges.processes = clamp(
            self.gauges.processes + rand() * 1.0,
            PROCESS_FLOOR,
            PROCESS_CEILING,
        );
    }

    /// Settles every gauge back toward its floor.
    pub fn decay(&mut self, rand: &mut dyn FnMut() -> f64) {
        self.gauges.cpu = (self.gauges.cpu - rand() * 8.0).max(CPU_FLOOR);
        self.gauges.memory = (self.gauges.memory - rand() * 6.0).max(MEMORY_FLOOR);
        self.gauges.network = (self.gauges.network - rand() * 4.0).max(NETWORK_FLOOR);
        self.gauges.processes = (self.gauges.processes - rand() * 3.0).max(PROCESS_FLOOR);
    }

    /// Spike in response to a user interaction (keystroke, click).
    pub fn bump(&mut self, rand: &mut dyn FnMut() -> f64) {
        self.gauges.cpu = (self.gauges.cpu + rand() * 8.0 + 2.0).min(CPU_CEILING);
        self.gauges.memory = (self.gauges.memory + rand() * 5.0 + 1.0).min(MEMORY_CEILING);
        self.gauges.network = (self.gauges.network + rand() * 4.0 + 1.0).min(NETWORK_CEILING);
        self.gauges.processes = (self.gauges.processes + rand() * 2.0 + 0.5).min(PROCESS_CEILING);
    }
}

fn clamp(value: f64, floor: f64, ceiling: f64) -> f64 {
    value.max(floor).min(ceiling)
}

/// Timer driver for the stats panel. Two self-rescheduling chains (drift
/// and decay) share one simulator and one cancellation flag; `shutdown`
/// stops both before their next tick.
pub struct GaugeDriver {
    sim: Rc<RefCell<MetricsSim>>,
    renderer: Rc<Renderer>,
    cancel: CancelFlag,
}

impl GaugeDriver {
    pub fn start(renderer: Rc<Renderer>) -> Rc<Self> {
        let driver = Rc::new(Self {
            sim: Rc::new(RefCell::new(MetricsSim::new())),
            renderer,
            cancel: CancelFlag::new(),
        });
        driver.renderer.update_gauges(&driver.sim.borrow().gauges());
        Self::spawn_chain(Rc::clone(&driver), FLUCTUATE_INTERVAL_MS, |sim, rand| {
            sim.fluctuate(rand)
        });
        Self::spawn_chain(Rc::clone(&driver), DECAY_INTERVAL_MS, |sim, rand| {
            sim.decay(rand)
        });
        driver
    }

    pub fn record_interaction(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let mut rand = js_random();
        self.sim.borrow_mut().bump(&mut rand);
        self.renderer.update_gauges(&self.sim.borrow().gauges());
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn spawn_chain(
        driver: Rc<Self>,
        interval_ms: u32,
        step: fn(&mut MetricsSim, &mut dyn FnMut() -> f64),
    ) {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                if driver.cancel.is_cancelled() {
                    break;
                }
                let mut rand = js_random();
                step(&mut driver.sim.borrow_mut(), &mut rand);
                driver.renderer.update_gauges(&driver.sim.borrow().gauges());
            }
        });
    }
}

fn js_random() -> impl FnMut() -> f64 {
    || js_sys::Math::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn gauges_start_at_their_floors() {
        let sim = MetricsSim::new();
        let gauges = sim.gauges();
        assert_eq!(gauges.cpu, CPU_FLOOR);
        assert_eq!(gauges.memory, MEMORY_FLOOR);
        assert_eq!(gauges.network, NETWORK_FLOOR);
        assert_eq!(gauges.processes, PROCESS_FLOOR);
    }

    #[test]
    fn fluctuation_never_escapes_the_bands() {
        let mut sim = MetricsSim::new();
        let mut rand = constant(1.0);
        for _ in 0..100 {
            sim.fluctuate(&mut rand);
        }
        let gauges = sim.gauges();
        assert_eq!(gauges.cpu, CPU_CEILING);
        assert_eq!(gauges.memory, MEMORY_CEILING);
        assert_eq!(gauges.network, NETWORK_CEILING);
        assert_eq!(gauges.processes, PROCESS_CEILING);
    }

    #[test]
    fn decay_settles_back_to_the_floors() {
        let mut sim = MetricsSim::new();
        let mut up = constant(1.0);
        for _ in 0..10 {
            sim.fluctuate(&mut up);
        }
        let mut down = constant(1.0);
        for _ in 0..100 {
            sim.decay(&mut down);
        }
        let gauges = sim.gauges();
        assert_eq!(gauges.cpu, CPU_FLOOR);
        assert_eq!(gauges.memory, MEMORY_FLOOR);
        assert_eq!(gauges.network, NETWORK_FLOOR);
        assert_eq!(gauges.processes, PROCESS_FLOOR);
    }

    #[test]
    fn bump_raises_every_gauge_even_with_zero_randomness() {
        let mut sim = MetricsSim::new();
        let before = sim.gauges();
        let mut rand = constant(0.0);
        sim.bump(&mut rand);
        let after = sim.gauges();
        assert!(after.cpu > before.cpu);
        assert!(after.memory > before.memory);
        assert!(after.network > before.network);
        assert!(after.processes > before.processes);
    }

    #[test]
    fn bump_respects_the_ceilings() {
        let mut sim = MetricsSim::new();
        let mut rand = constant(1.0);
        for _ in 0..100 {
            sim.bump(&mut rand);
        }
        let gauges = sim.gauges();
        assert!(gauges.cpu <= CPU_CEILING);
        assert!(gauges.memory <= MEMORY_CEILING);
        assert!(gauges.network <= NETWORK_CEILING);
        assert!(gauges.processes <= PROCESS_CEILING);
    }
}
