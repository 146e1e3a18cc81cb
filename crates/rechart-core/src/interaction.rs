// File: crates/rechart-core/src/interaction.rs
// Summary: Pointer state machine (idle, pressing, hovering) with cancellable hold and release timers.

use std::time::{Duration, Instant};

use crate::host::Host;
use crate::types::TOUCH_RELEASE_DELAY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    /// Press registered; tooltip suppressed until the hold timer fires.
    Pressing,
    Hovering,
}

/// Identifies one scheduled timer. Never reused within a tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct Timer {
    id: TimerId,
    due: Instant,
}

/// What a timer firing asks the chart to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Hold elapsed; hovering starts.
    Hover,
    /// Release elapsed; tooltip, guideline and circle highlight go away.
    Release,
}

/// Tracks pointer presence for one chart.
#[derive(Clone, Debug, Default)]
pub struct InteractionTracker {
    phase: PointerPhase,
    touch: bool,
    hold: Option<Timer>,
    release: Option<Timer>,
    next_timer: u64,
    bounding_left: Option<f64>,
}

impl InteractionTracker {
    pub fn new(touch: bool) -> Self {
        Self { touch, ..Default::default() }
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    pub fn is_touch(&self) -> bool {
        self.touch
    }

    pub fn is_hovering(&self) -> bool {
        self.phase == PointerPhase::Hovering
    }

    /// Pointer entered or touch started. Cancels a pending release from the
    /// previous session and starts the hold timer; with no hold delay hovering
    /// starts immediately and [`TimerEvent::Hover`] is returned.
    pub fn enter(&mut self, now: Instant, touch_delay: Duration) -> Option<TimerEvent> {
        self.release = None;
        self.hold = None;
        self.bounding_left = None;
        self.phase = PointerPhase::Pressing;

        let delay = if self.touch { touch_delay } else { Duration::ZERO };
        if delay.is_zero() {
            self.phase = PointerPhase::Hovering;
            return Some(TimerEvent::Hover);
        }
        self.hold = Some(self.schedule(now + delay));
        None
    }

    /// Pointer left or touch ended. A press that never turned into hovering is
    /// dropped at once; hovering ends after the release delay.
    pub fn leave(&mut self, now: Instant) -> Option<TimerEvent> {
        self.hold = None;
        if self.phase == PointerPhase::Pressing {
            self.phase = PointerPhase::Idle;
        }
        let delay = if self.touch { TOUCH_RELEASE_DELAY } else { Duration::ZERO };
        if delay.is_zero() {
            return Some(self.release_now());
        }
        self.release = Some(self.schedule(now + delay));
        None
    }

    /// Fire every timer due at `now`, hold before release.
    pub fn advance(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut fired = Vec::new();
        if self.hold.is_some_and(|t| t.due <= now) {
            self.hold = None;
            if self.phase == PointerPhase::Pressing {
                self.phase = PointerPhase::Hovering;
                fired.push(TimerEvent::Hover);
            }
        }
        if self.release.is_some_and(|t| t.due <= now) {
            fired.push(self.release_now());
        }
        fired
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.hold, self.release].into_iter().flatten().map(|t| t.due).min()
    }

    pub fn pending_timers(&self) -> Vec<TimerId> {
        [self.hold, self.release].into_iter().flatten().map(|t| t.id).collect()
    }

    /// Non-touch pointers move freely; touch moves count only once hovering.
    pub fn accepts_move(&self) -> bool {
        !self.touch || self.is_hovering()
    }

    /// Whether touch-move default handling (page scroll) should be suppressed.
    pub fn locks_scroll(&self, lock_on_press: bool) -> bool {
        lock_on_press && self.is_hovering()
    }

    /// Convert a page x into element space, caching the element's left edge
    /// for the rest of the session.
    pub fn element_x<H: Host + ?Sized>(&mut self, page_x: f64, host: &H) -> f64 {
        let left = *self.bounding_left.get_or_insert_with(|| host.bounding_left());
        page_x - left
    }

    /// Forget the cached element position; the next move re-reads it.
    pub fn invalidate_bounds(&mut self) {
        self.bounding_left = None;
    }

    fn release_now(&mut self) -> TimerEvent {
        self.release = None;
        self.phase = PointerPhase::Idle;
        TimerEvent::Release
    }

    fn schedule(&mut self, due: Instant) -> Timer {
        self.next_timer += 1;
        Timer { id: TimerId(self.next_timer), due }
    }
}
