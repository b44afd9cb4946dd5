//! hyperspin: a rotating n-cube whose dimension sweeps smoothly over time
//!
//! The geometry lives in `hyperspin_math`, the animation state in
//! `hyperspin_core` and the wireframe drawing in `hyperspin_render`. This
//! crate adds layered configuration and the systems a frame loop drives.

pub mod config;
pub mod systems;
