//! Platform abstraction layer
//!
//! Connects the simulation to the outside world:
//! - Frame scheduling (`scheduler`)
//! - Keyboard input (`input`)
//! - The drawing surface, through `renderer::Renderer`

pub mod input;
pub mod scheduler;

pub use input::InputQueue;
pub use scheduler::{ManualScheduler, Scheduler};

use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::renderer::Renderer;
use crate::sim::{Field, TickSummary, tick};

/// A field wired to its renderer and input queue
pub struct Simulation<R: Renderer> {
    field: Field,
    renderer: R,
    input: InputQueue,
}

impl<R: Renderer> Simulation<R> {
    /// Build a field sized to the renderer's frame
    pub fn new(config: &FieldConfig, seed: u64, renderer: R) -> Result<Self, ConfigError> {
        let (width, height) = renderer.frame_size();
        let config = config.clone().with_frame_size(width, height);
        let field = Field::new(&config, seed)?;
        Ok(Self {
            field,
            renderer,
            input: InputQueue::new(),
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Queue a key press for the next tick; false if the key doesn't steer
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.input.push_key(key)
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Run one tick, then ask `scheduler` for the next
    pub fn frame<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> TickSummary {
        let input = self.input.take();
        let summary = tick(&mut self.field, &input, &mut self.renderer);
        if summary.contacts > 0 {
            log::trace!("tick {}: {} contacts", summary.tick, summary.contacts);
        }
        scheduler.request_next_tick();
        summary
    }

    /// Drive ticks synchronously while the scheduler has a request outstanding,
    /// up to `max_ticks`. Returns the number of ticks run.
    pub fn run(&mut self, scheduler: &mut ManualScheduler, max_ticks: u64) -> u64 {
        let mut ran = 0;
        let mut contacts = 0u64;
        while ran < max_ticks && scheduler.take_pending() {
            contacts += self.frame(scheduler).contacts as u64;
            ran += 1;
        }
        log::debug!("Ran {} ticks ({} contacts)", ran, contacts);
        ran
    }
}
