//! Animated display of catalogued space debris entering orbit, one
//! simulated year per second.

mod catalog;
mod driver;
mod easing;
mod projector;
mod renderer;
mod vec2d;

pub use catalog::{DebrisCatalog, DebrisLoadError, DebrisRecord};
pub use driver::AnimationDriver;
pub use easing::EnterTransition;
pub use projector::{OrbitProjector, Viewport};
pub use renderer::{ConsoleRenderer, DebrisRenderer};

/// Mean radius of the earth in km. Part of the scale domain so the earth
/// and the orbiting markers share one consistent scale.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Catalog entries orbiting farther out than this are dropped at load time.
pub const MAX_DISTANCE_KM: f64 = 6000.0;

#[cfg(test)]
mod tests;
