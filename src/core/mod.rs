//! Shared infrastructure: the scene RNG and the orbiting camera

pub mod orbit_camera;
pub mod rng;
