//! Core interaction and animation state for the feedlab home-feed playground.
//!
//! Everything in this crate is pure, host-testable state: per-card animators,
//! the feed registry, and the demo catalog. Front-ends push pointer events in
//! and read a flat sprite scene back out each frame; no platform API is
//! touched here.

pub mod button;
pub mod catalog;
pub mod constants;
pub mod feed;
pub mod geometry;
pub mod scene;
pub mod spring;
pub mod tap;
pub mod trail;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use button::*;
pub use catalog::*;
pub use constants::*;
pub use feed::*;
pub use geometry::*;
pub use scene::*;
pub use spring::*;
pub use tap::*;
pub use trail::*;
