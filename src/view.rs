//! The integration point: owns the driver, the interaction controller, and
//! the config, and fans gesture events out to the host's callbacks.

use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

use crate::config::{CloudConfig, ConfigError};
use crate::constants::MAX_FRAME_DT;
use crate::driver::AnimationDriver;
use crate::input::{GestureEvent, InteractionController, PointerTarget};
use crate::tag::{ProjectedTag, TagEntity};

pub type GestureCallback = Box<dyn FnMut(&str)>;

/// One mounted tag cloud.
///
/// The host feeds it the tag list, the config, and raw pointer events, and
/// calls [`frame`](Self::frame) from its per-frame callback. Output is
/// pulled via [`transforms`](Self::transforms); clicks and long-presses are
/// delivered through the registered callbacks (and buffered for hosts that
/// prefer polling [`take_events`](Self::take_events)).
pub struct TagCloudView {
    driver: AnimationDriver,
    input: InteractionController,
    config: CloudConfig,
    last_frame: Option<Instant>,
    on_click: Option<GestureCallback>,
    on_long_press: Option<GestureCallback>,
    events: SmallVec<[GestureEvent; 4]>,
}

impl TagCloudView {
    /// Validates the config and builds an empty view. A non-positive radius
    /// or speed limit is a caller error and is rejected here rather than
    /// patched up inside the math.
    pub fn new(config: CloudConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self {
            driver: AnimationDriver::new(),
            input: InteractionController::new(),
            config,
            last_frame: None,
            on_click: None,
            on_long_press: None,
            events: SmallVec::new(),
        })
    }

    pub fn set_tags(&mut self, tags: &[TagEntity]) {
        self.driver.set_entities(tags, &self.config);
    }

    /// Swaps in a new (validated) config. Base positions are recomputed only
    /// when the radius actually changed; the rotation carries over either
    /// way.
    pub fn set_config(&mut self, config: CloudConfig) -> Result<(), ConfigError> {
        let config = config.validated()?;
        let radius_changed = config.radius != self.config.radius;
        self.config = config;
        if radius_changed {
            self.driver.relayout(&self.config);
        }
        Ok(())
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn on_click(&mut self, cb: impl FnMut(&str) + 'static) {
        self.on_click = Some(Box::new(cb));
    }

    pub fn on_long_press(&mut self, cb: impl FnMut(&str) + 'static) {
        self.on_long_press = Some(Box::new(cb));
    }

    /// One frame on the wall clock.
    pub fn frame(&mut self) {
        self.frame_at(Instant::now());
    }

    /// One frame at an explicit instant. Computes dt from the previous
    /// frame (capped, so a suspended tab does not integrate a huge jump),
    /// fires a due long-press, and ticks the driver.
    pub fn frame_at(&mut self, now: Instant) {
        let dt = match self.last_frame {
            Some(prev) => now.duration_since(prev).min(MAX_FRAME_DT),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        if let Some(ev) = self.input.poll(now) {
            self.dispatch(ev);
        }
        self.driver.tick(dt, &self.config, self.input.is_dragging());
    }

    pub fn pointer_down(&mut self, target: PointerTarget, x: f32, y: f32) {
        self.pointer_down_at(target, x, y, Instant::now());
    }

    pub fn pointer_down_at(&mut self, target: PointerTarget, x: f32, y: f32, now: Instant) {
        self.input.pointer_down(target, x, y, now);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input
            .pointer_move(x, y, self.driver.rotation_mut(), &self.config);
    }

    pub fn pointer_up(&mut self) {
        self.pointer_up_at(Instant::now());
    }

    pub fn pointer_up_at(&mut self, now: Instant) {
        if let Some(ev) = self.input.pointer_up(now) {
            self.dispatch(ev);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.input.pointer_leave();
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    pub fn transforms(&self) -> impl Iterator<Item = (&str, &ProjectedTag)> {
        self.driver.transforms()
    }

    pub fn transform_of(&self, id: &str) -> Option<&ProjectedTag> {
        self.driver.transform_of(id)
    }

    pub fn rotation(&self) -> &crate::rotation::RotationState {
        self.driver.rotation()
    }

    /// Drains gesture events buffered since the last call.
    pub fn take_events(&mut self) -> SmallVec<[GestureEvent; 4]> {
        std::mem::take(&mut self.events)
    }

    /// Cancels the animation: subsequent frames do no work. Call on
    /// unmount.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn resume(&mut self) {
        self.driver.resume();
    }

    pub fn is_stopped(&self) -> bool {
        self.driver.is_stopped()
    }

    fn dispatch(&mut self, ev: GestureEvent) {
        match &ev {
            GestureEvent::Click(id) => {
                log::debug!("[view] click on tag {id}");
                if let Some(cb) = &mut self.on_click {
                    cb(id);
                }
            }
            GestureEvent::LongPress(id) => {
                log::debug!("[view] long-press on tag {id}");
                if let Some(cb) = &mut self.on_long_press {
                    cb(id);
                }
            }
        }
        self.events.push(ev);
    }
}
