use super::easing::EnterTransition;
use super::projector::Viewport;
use super::vec2d::Vec2D;
use crate::{event, info};
use std::collections::HashMap;

/// Marker radius right after spawn, before settling down.
pub const MARKER_SPAWN_RADIUS: f64 = 5.0;
/// Resting marker radius.
pub const MARKER_RADIUS: f64 = 2.0;
/// Marker radius while hovered.
pub const MARKER_HOVER_RADIUS: f64 = 6.0;

/// Seam between the animation driver and the actual drawing surface. The
/// driver issues explicit commands keyed by record id; implementors own
/// presentation.
pub trait DebrisRenderer {
    fn init_surface(&mut self, viewport: &Viewport);
    fn draw_reference_body(&mut self, center: Vec2D<f64>, radius: f64);
    fn set_year_label(&mut self, year: i32);
    /// A new marker appears at `transition.start()` and travels to
    /// `transition.end()`, spawning large and settling to resting size.
    fn enter_marker(&mut self, id: usize, size_class: &str, transition: EnterTransition);
    fn set_marker_radius(&mut self, id: usize, radius: f64);
    fn add_hover_text(&mut self, class: &str, text: &str, pos: Vec2D<f64>, y_offset: f64);
    /// Drops every hover label on the surface, regardless of which marker
    /// put it there.
    fn clear_hover_text(&mut self);
}

/// Renderer that narrates the display to the console, standing in for a
/// real canvas. Keeps just enough marker state to stay coherent.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    marker_radii: HashMap<usize, f64>,
    hover_labels: usize,
}

impl ConsoleRenderer {
    pub fn new() -> Self { Self::default() }
}

impl DebrisRenderer for ConsoleRenderer {
    fn init_surface(&mut self, viewport: &Viewport) {
        info!(
            "Display surface {:.0}x{:.0}",
            viewport.width(),
            viewport.height()
        );
    }

    fn draw_reference_body(&mut self, center: Vec2D<f64>, radius: f64) {
        info!("Earth at {center}, radius {radius:.1}px");
    }

    fn set_year_label(&mut self, year: i32) {
        event!("Year label -> {year}");
    }

    fn enter_marker(&mut self, id: usize, size_class: &str, transition: EnterTransition) {
        self.marker_radii.insert(id, MARKER_RADIUS);
        info!(
            "Debris #{id} [{size_class}] enters at {} -> {} over {}ms (r{MARKER_SPAWN_RADIUS} settling to r{MARKER_RADIUS})",
            transition.start(),
            transition.end(),
            transition.duration().as_millis()
        );
    }

    fn set_marker_radius(&mut self, id: usize, radius: f64) {
        if let Some(r) = self.marker_radii.get_mut(&id) {
            *r = radius;
        }
        event!("Debris #{id} radius -> {radius}");
    }

    fn add_hover_text(&mut self, class: &str, text: &str, pos: Vec2D<f64>, y_offset: f64) {
        self.hover_labels += 1;
        event!(
            "[{class}] '{text}' at ({:.1}, {:.1})",
            pos.x(),
            pos.y() + y_offset
        );
    }

    fn clear_hover_text(&mut self) {
        if self.hover_labels > 0 {
            event!("Removing {} hover labels", self.hover_labels);
        }
        self.hover_labels = 0;
    }
}
