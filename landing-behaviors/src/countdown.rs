//! Per-card countdown timers.

use chrono::{DateTime, FixedOffset, Utc};
use landing_core::countdown::EXPIRED_DISPLAY;
use landing_core::{Countdown, Deadline, LandingError, UiElement};

/// What the scheduler should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// The task is done: the deadline passed, it never parsed, or the display
    /// left the document. Cancel the repeating task.
    Finished,
}

/// A display element and the deadline it counts down to.
#[derive(Debug, Clone)]
pub struct CountdownTimer<E> {
    display: E,
    deadline: Result<Deadline, LandingError>,
}

impl<E: UiElement> CountdownTimer<E> {
    /// Read and parse the deadline attribute once.
    pub fn new(display: E, deadline_attribute: &str, local_offset: FixedOffset) -> Self {
        let raw = display.attribute(deadline_attribute).unwrap_or_default();
        let deadline = Deadline::parse(&raw, local_offset);
        if let Err(err) = &deadline {
            log::warn!("Countdown disabled: {err}");
        }
        Self { display, deadline }
    }

    pub fn display(&self) -> &E {
        &self.display
    }

    pub fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref().ok()
    }

    /// Render the remaining time at `now`.
    ///
    /// An unreadable deadline shows the expired display once and finishes.
    pub fn tick(&self, now: DateTime<Utc>) -> Tick {
        if !self.display.is_connected() {
            return Tick::Finished;
        }

        match &self.deadline {
            Ok(deadline) => {
                let countdown = Countdown::between(deadline, now);
                self.display.set_text(&countdown.to_string());
                if countdown.is_expired() {
                    Tick::Finished
                } else {
                    Tick::Continue
                }
            }
            Err(_) => {
                self.display.set_text(EXPIRED_DISPLAY);
                Tick::Finished
            }
        }
    }
}
