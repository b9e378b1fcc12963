use crate::slides::Transition;
use std::time::Duration;

pub const REANIMATE_DELAY: Duration = Duration::from_millis(50);
pub const RESTORE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub slide: usize,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Reanimator {
    delay: Duration,
    restore_after: Duration,
    cancel_pending: bool,
    generation: u64,
}

impl Default for Reanimator {
    fn default() -> Self {
        Self::new(REANIMATE_DELAY, RESTORE_DELAY, false)
    }
}

impl Reanimator {
    pub fn new(delay: Duration, restore_after: Duration, cancel_pending: bool) -> Self {
        Self {
            delay,
            restore_after,
            cancel_pending,
            generation: 0,
        }
    }

    pub fn configure(&mut self, delay: Duration, restore_after: Duration, cancel_pending: bool) {
        self.delay = delay;
        self.restore_after = restore_after;
        self.cancel_pending = cancel_pending;
    }

    pub fn restore_after(&self) -> Duration {
        self.restore_after
    }

    pub fn schedule(&mut self, transition: Transition) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            slide: transition.to,
            delay: self.delay,
        }
    }

    // Returns the slide whose content should replay, which is whichever slide is
    // active now rather than the one the ticket was issued for. Superseded tickets
    // yield nothing when cancellation is enabled.
    pub fn fire(&self, ticket: Ticket, active: usize) -> Option<usize> {
        if self.cancel_pending && ticket.generation != self.generation {
            log::debug!(
                "Dropping superseded reanimation for slide {}",
                ticket.slide
            );
            return None;
        }
        Some(active)
    }
}
