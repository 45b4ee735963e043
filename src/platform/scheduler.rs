//! Frame scheduling
//!
//! The simulation never loops on its own. After each tick it asks a `Scheduler`
//! for another one; whoever owns the scheduler decides when (or whether) that
//! happens.

/// Something that can be asked to run another tick
pub trait Scheduler {
    fn request_next_tick(&mut self);
}

/// Scheduler that only records requests; the owner polls it.
///
/// Used for headless runs and tests, and by the browser loop to decide whether to
/// ask for another animation frame.
#[derive(Debug)]
pub struct ManualScheduler {
    pending: bool,
    requested: u64,
}

impl ManualScheduler {
    /// A scheduler with the first tick already requested
    pub fn new() -> Self {
        Self {
            pending: true,
            requested: 0,
        }
    }

    /// Consume the outstanding request, if any
    pub fn take_pending(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total requests made through `request_next_tick`
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn request_next_tick(&mut self) {
        self.pending = true;
        self.requested += 1;
    }
}
