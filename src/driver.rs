//! Per-frame stepping: advances the rotation and refreshes the transform
//! table the presentation layer reads.

use std::time::Duration;

use fnv::FnvHashMap;
use glam::Vec3;

use crate::config::CloudConfig;
use crate::constants::TICKS_PER_SEC;
use crate::layout::sphere_layout;
use crate::project::project;
use crate::rotation::RotationState;
use crate::tag::{ProjectedTag, TagEntity};

/// Owns the rotation, the base-position set, and the handle table
/// (slot per tag, indexed by the tag's position in the entity list, with an
/// id → slot map for by-id lookup).
///
/// The driver is pull-based: the host ticks it from its own frame loop and
/// queries [`transforms`](Self::transforms) afterwards, so any presentation
/// layer can consume it without adopting a particular reactivity model.
/// `stop` is the cancellation handle the host must call on teardown.
pub struct AnimationDriver {
    rotation: RotationState,
    base: Vec<Vec3>,
    ids: Vec<String>,
    slots: Vec<Option<ProjectedTag>>,
    index: FnvHashMap<String, usize>,
    stopped: bool,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            rotation: RotationState::default(),
            base: Vec::new(),
            ids: Vec::new(),
            slots: Vec::new(),
            index: FnvHashMap::default(),
            stopped: false,
        }
    }

    /// Adopts a new entity list: rebuilds the layout and the handle table.
    /// The rotation is left untouched, so the sphere keeps spinning through
    /// data changes.
    pub fn set_entities(&mut self, tags: &[TagEntity], cfg: &CloudConfig) {
        self.ids = tags.iter().map(|t| t.id.clone()).collect();
        self.index = self
            .ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        self.slots = vec![None; tags.len()];
        self.relayout(cfg);
        log::info!("[cloud] adopted {} tags", tags.len());
    }

    /// Recomputes base positions for the current entity count (after a
    /// radius change). Positions are a pure function of count and radius.
    pub fn relayout(&mut self, cfg: &CloudConfig) {
        self.base = sphere_layout(self.ids.len(), cfg.radius);
        log::info!(
            "[cloud] layout: {} positions, radius {:.1}",
            self.base.len(),
            cfg.radius
        );
    }

    /// One animation tick: advance the free spin (unless a drag is driving
    /// the rotation) and reproject every tag. A degenerate projection clears
    /// only that tag's slot for the frame; the rest of the cloud keeps
    /// moving.
    pub fn tick(&mut self, dt: Duration, cfg: &CloudConfig, dragging: bool) {
        if self.stopped {
            return;
        }
        if !dragging {
            self.rotation.advance(dt.as_secs_f32() * TICKS_PER_SEC, cfg);
        }
        for (i, base) in self.base.iter().enumerate() {
            let projected = project(*base, &self.rotation, cfg.radius, cfg.depth_alpha);
            if projected.is_none() {
                log::warn!(
                    "[cloud] skipping degenerate projection for tag {}",
                    self.ids[i]
                );
            }
            self.slots[i] = projected;
        }
    }

    /// Current transforms, one per tag that projected cleanly this frame.
    pub fn transforms(&self) -> impl Iterator<Item = (&str, &ProjectedTag)> {
        self.ids
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(id, slot)| slot.as_ref().map(|t| (id.as_str(), t)))
    }

    /// Transform for one tag by id, if it projected cleanly this frame.
    pub fn transform_of(&self, id: &str) -> Option<&ProjectedTag> {
        self.index.get(id).and_then(|&i| self.slots[i].as_ref())
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut RotationState {
        &mut self.rotation
    }

    pub fn tag_count(&self) -> usize {
        self.ids.len()
    }

    /// Parks the driver; subsequent ticks are no-ops until `resume`.
    /// Hosts call this on teardown (and when the cloud scrolls out of view)
    /// so no frame work outlives the view.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            log::info!("[cloud] driver stopped");
        }
    }

    pub fn resume(&mut self) {
        if self.stopped {
            self.stopped = false;
            log::info!("[cloud] driver resumed");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
