//! Entity and per-frame output records shared with the presentation layer.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! presentation layer (DOM, canvas, immediate-mode GUI) consumes
//! [`ProjectedTag`] values each frame and applies them as 2D transforms to
//! whatever element it keeps per tag id.

/// Optional visual treatment a tag asks for; the engine passes it through
/// untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagEffect {
    #[default]
    None,
    Glow,
    Pulse,
}

/// A tag record owned by the surrounding application. The engine only reads
/// it; creation, editing, and persistence live elsewhere.
#[derive(Clone, Debug)]
pub struct TagEntity {
    pub id: String,
    pub label: String,
    pub color: String,
    pub article_count: u32,
    pub effect: TagEffect,
}

/// Screen-space placement of one tag for one frame.
///
/// `x`/`y` are offsets from the sphere center, `scale` is the perspective
/// size factor (1.0 at the sphere's equator plane), `opacity` is in
/// \[0.1, 1\] when depth fading is on, and `z_order` stacks nearer tags
/// above farther ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedTag {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_order: i32,
}
