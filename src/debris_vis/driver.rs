use super::catalog::DebrisCatalog;
use super::easing::EnterTransition;
use super::projector::OrbitProjector;
use super::renderer::{DebrisRenderer, MARKER_HOVER_RADIUS, MARKER_RADIUS};
use crate::info;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

/// First displayed year, just before anything reached orbit.
pub const EPOCH_YEAR: i32 = 1957;
/// Travel time of an entering marker from the body to its orbit.
const ENTER_DURATION: Duration = Duration::from_millis(1000);
/// Hover text line offsets below the marker.
const HOVER_TITLE_OFFSET: f64 = 50.0;
const HOVER_SIZE_OFFSET: f64 = 70.0;
const HOVER_LAUNCH_OFFSET: f64 = 85.0;

/// Advances the simulated year on a fixed period and enters newly visible
/// records into the display. Strictly additive: the rendered set only ever
/// grows, and once the last launch year has passed, ticks change nothing
/// but the year label.
pub struct AnimationDriver<R: DebrisRenderer> {
    catalog: DebrisCatalog,
    projector: OrbitProjector,
    renderer: R,
    period: Duration,
    year: i32,
    /// Ids with a marker on the surface, the rendered half of the join.
    rendered: HashSet<usize>,
}

impl<R: DebrisRenderer> AnimationDriver<R> {
    pub fn new(
        catalog: DebrisCatalog,
        projector: OrbitProjector,
        renderer: R,
        period: Duration,
    ) -> Self {
        Self {
            catalog,
            projector,
            renderer,
            period,
            year: EPOCH_YEAR,
            rendered: HashSet::new(),
        }
    }

    /// Draws the static parts once: surface, reference body, initial year.
    pub fn mount(&mut self) {
        self.renderer.init_surface(self.projector.viewport());
        self.renderer
            .draw_reference_body(self.projector.center(), self.projector.body_radius());
        self.renderer.set_year_label(self.year);
        info!("Tracking {} debris objects from {}", self.catalog.len(), self.year);
    }

    /// One animation step: the year advances, the visible subset is
    /// recomputed in full, and records seen for the first time enter.
    pub fn tick(&mut self) {
        self.year += 1;
        self.renderer.set_year_label(self.year);
        for record in self.catalog.visible_in(self.year) {
            if self.rendered.contains(&record.id()) {
                continue;
            }
            let transition = EnterTransition::new(
                self.projector.start_position(record),
                self.projector.end_position(record),
                ENTER_DURATION,
            );
            self.renderer.enter_marker(record.id(), record.rcs_size(), transition);
            self.rendered.insert(record.id());
        }
    }

    /// A marker is hovered: enlarge it and describe its record next to its
    /// orbit position.
    pub fn hover(&mut self, id: usize) {
        let Some(record) = self.catalog.get(id) else { return };
        if !self.rendered.contains(&id) {
            return;
        }
        self.renderer.set_marker_radius(id, MARKER_HOVER_RADIUS);
        let pos = self.projector.end_position(record);
        self.renderer.add_hover_text(
            "hover-text hover-title",
            record.object_name(),
            pos,
            HOVER_TITLE_OFFSET,
        );
        self.renderer.add_hover_text(
            "hover-text",
            &format!("Size: {}", record.rcs_size()),
            pos,
            HOVER_SIZE_OFFSET,
        );
        self.renderer.add_hover_text(
            "hover-text",
            &format!("Launched: {}", record.launch()),
            pos,
            HOVER_LAUNCH_OFFSET,
        );
    }

    /// Hover ends: restore the marker and drop hover text. The clear is
    /// surface-wide, not scoped to this marker.
    pub fn unhover(&mut self, id: usize) {
        if !self.rendered.contains(&id) {
            return;
        }
        self.renderer.set_marker_radius(id, MARKER_RADIUS);
        self.renderer.clear_hover_text();
    }

    pub fn year(&self) -> i32 { self.year }

    pub fn rendered_count(&self) -> usize { self.rendered.len() }

    pub fn renderer(&self) -> &R { &self.renderer }

    /// Runs the animation until the token is cancelled. The first step
    /// happens one full period after start.
    pub async fn run(mut self, token: CancellationToken) {
        let mut tick = interval_at(Instant::now() + self.period, self.period);
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = tick.tick() => self.tick(),
            }
        }
        info!("Debris display stopped at year {}", self.year);
    }
}
