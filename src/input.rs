//! Pointer handling: sphere drag regime plus per-tag click/long-press
//! discrimination.
//!
//! Both gestures share the pointer stream but never fire for the same
//! press: a down that lands on a tag element is swallowed by the tag (the
//! host stops propagation), so it starts gesture discrimination and no
//! sphere drag; a down on the backdrop starts a drag and no gesture.

use instant::Instant;

use crate::config::CloudConfig;
use crate::constants::LONG_PRESS;
use crate::rotation::RotationState;

/// What a pointer-down landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The sphere backdrop; begins a drag.
    Backdrop,
    /// An individual tag element; begins click/long-press discrimination.
    Tag(String),
}

/// A discriminated per-tag gesture, carrying the tag id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    Click(String),
    LongPress(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Regime {
    FreeSpin,
    Dragging,
}

#[derive(Clone, Debug)]
struct PendingPress {
    id: String,
    started: Instant,
    long_fired: bool,
}

/// Translates raw pointer events into drag input and gesture events.
///
/// Pointer anomalies are tolerated by checking the regime: a move without a
/// preceding down, or a duplicate up, is a no-op rather than an error.
pub struct InteractionController {
    regime: Regime,
    last_x: f32,
    last_y: f32,
    press: Option<PendingPress>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            regime: Regime::FreeSpin,
            last_x: 0.0,
            last_y: 0.0,
            press: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.regime == Regime::Dragging
    }

    pub fn pointer_down(&mut self, target: PointerTarget, x: f32, y: f32, now: Instant) {
        match target {
            PointerTarget::Backdrop => {
                self.regime = Regime::Dragging;
                self.last_x = x;
                self.last_y = y;
                log::debug!("[input] begin sphere drag at ({x:.0}, {y:.0})");
            }
            PointerTarget::Tag(id) => {
                log::debug!("[input] press on tag {id}");
                self.press = Some(PendingPress {
                    id,
                    started: now,
                    long_fired: false,
                });
            }
        }
    }

    /// Forwards the pointer delta to the rotation while dragging; a stray
    /// move while not dragging does nothing.
    pub fn pointer_move(&mut self, x: f32, y: f32, rotation: &mut RotationState, cfg: &CloudConfig) {
        if self.regime != Regime::Dragging {
            return;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        rotation.apply_drag(dx, dy, cfg);
        self.last_x = x;
        self.last_y = y;
    }

    /// Fires the long-press once its threshold passes while the pointer is
    /// still held. Call once per frame.
    pub fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        let press = self.press.as_mut()?;
        if !press.long_fired && now.duration_since(press.started) >= LONG_PRESS {
            press.long_fired = true;
            return Some(GestureEvent::LongPress(press.id.clone()));
        }
        None
    }

    /// Ends the gesture. A release before the long-press threshold is a
    /// click; a release after it reports the long-press if `poll` has not
    /// already, and suppresses the click otherwise. No extra impulse is
    /// applied on drag release; the velocity set by the last move carries
    /// the spin from here.
    pub fn pointer_up(&mut self, now: Instant) -> Option<GestureEvent> {
        if self.regime == Regime::Dragging {
            self.regime = Regime::FreeSpin;
            log::debug!("[input] end sphere drag");
        }
        let press = self.press.take()?;
        if press.long_fired {
            return None;
        }
        if now.duration_since(press.started) >= LONG_PRESS {
            Some(GestureEvent::LongPress(press.id))
        } else {
            Some(GestureEvent::Click(press.id))
        }
    }

    /// Pointer left the cloud area: stop dragging and cancel any pending
    /// gesture without firing it.
    pub fn pointer_leave(&mut self) {
        self.regime = Regime::FreeSpin;
        self.press = None;
    }
}
