use super::EARTH_RADIUS_KM;
use super::catalog::{DebrisCatalog, DebrisRecord};
use super::vec2d::Vec2D;

/// The drawing surface. Sized from the window, minus the fixed chrome
/// above the chart.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Height reserved for heading and links above the surface.
    const CHROME_HEIGHT: f64 = 200.0;

    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    pub fn from_window(window_width: f64, window_height: f64) -> Self {
        Self::new(window_width, window_height - Self::CHROME_HEIGHT)
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn center(&self) -> Vec2D<f64> { Vec2D::new(self.width / 2.0, self.height / 2.0) }

    /// Largest circle radius that still fits the surface.
    pub fn fit_radius(&self) -> f64 { (self.width / 2.0).min(self.height / 2.0) }
}

/// Linear map from orbit radii (km from the body center) to pixel radii.
#[derive(Debug, Clone, Copy)]
pub struct RadiusScale {
    domain_max: f64,
    range_max: f64,
}

impl RadiusScale {
    /// Fits `[0, domain_max]` onto `[0, viewport.fit_radius()]`.
    pub fn fit(domain_max: f64, viewport: &Viewport) -> Self {
        Self {
            domain_max,
            range_max: viewport.fit_radius(),
        }
    }

    pub fn scale(&self, radius_km: f64) -> f64 {
        if self.domain_max <= 0.0 {
            return 0.0;
        }
        radius_km / self.domain_max * self.range_max
    }
}

/// Point on the perimeter of a circle of `radius` at `angle_degrees`.
pub fn point_on_circle(radius: f64, angle_degrees: f64) -> Vec2D<f64> {
    let angle_radians = angle_degrees.to_radians();
    Vec2D::new(radius * angle_radians.cos(), radius * angle_radians.sin())
}

/// Maps catalog records to positions on the drawing surface.
#[derive(Debug, Clone, Copy)]
pub struct OrbitProjector {
    scale: RadiusScale,
    viewport: Viewport,
}

impl OrbitProjector {
    /// Fits the scale to the catalog's largest orbit so the whole display
    /// fills the surface exactly.
    pub fn new(catalog: &DebrisCatalog, viewport: Viewport) -> Self {
        Self {
            scale: RadiusScale::fit(catalog.max_orbit_radius(), &viewport),
            viewport,
        }
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    pub fn center(&self) -> Vec2D<f64> { self.viewport.center() }

    /// Surface-relative position of a perimeter point: the circle point
    /// translated by the surface center. A zero radius lands on the center,
    /// whatever the angle.
    pub fn project(&self, angle_degrees: f64, scaled_radius: f64) -> Vec2D<f64> {
        self.center() + point_on_circle(scaled_radius, angle_degrees)
    }

    /// Position of a record orbiting `distance_km` above the surface.
    pub fn position_at(&self, record: &DebrisRecord, distance_km: f64) -> Vec2D<f64> {
        let orbit_radius = self.scale.scale(EARTH_RADIUS_KM + distance_km);
        self.project(record.orbit_angle(), orbit_radius)
    }

    /// Entry animation start: the record still sitting on the body.
    pub fn start_position(&self, record: &DebrisRecord) -> Vec2D<f64> {
        self.position_at(record, 0.0)
    }

    /// Entry animation end: the record out at its catalog perigee.
    pub fn end_position(&self, record: &DebrisRecord) -> Vec2D<f64> {
        self.position_at(record, record.perigee_km())
    }

    /// Pixel radius of the reference body under the same scale.
    pub fn body_radius(&self) -> f64 { self.scale.scale(EARTH_RADIUS_KM) }
}
