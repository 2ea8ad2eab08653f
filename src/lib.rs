//! Platform-neutral 3D tag cloud engine.
//!
//! Lays out an arbitrary number of tags on a sphere, rotates the sphere
//! under inertia or direct pointer manipulation, and projects each tag to a
//! 2D screen offset with perspective scale and depth fading — all computed
//! by hand, per frame, with no 3D graphics API. The host embeds the engine,
//! drives [`TagCloudView::frame`] from its own animation loop, forwards raw
//! pointer events, and applies the resulting transforms to whatever it
//! renders tags with.

pub mod config;
pub mod constants;
pub mod driver;
pub mod input;
pub mod layout;
pub mod project;
pub mod rotation;
pub mod tag;
pub mod view;

pub use config::{CloudConfig, ConfigError, SpinDirection};
pub use driver::AnimationDriver;
pub use input::{GestureEvent, InteractionController, PointerTarget};
pub use layout::sphere_layout;
pub use project::project;
pub use rotation::RotationState;
pub use tag::{ProjectedTag, TagEffect, TagEntity};
pub use view::TagCloudView;
