//! Core types: math re-exports and axis-aligned bounds.

pub use glam::{Vec3, vec3};

pub mod bounds;

pub use bounds::Bounds3;
