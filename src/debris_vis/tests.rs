use super::catalog::{DebrisCatalog, DebrisRecord, split_url};
use super::driver::{AnimationDriver, EPOCH_YEAR};
use super::easing::{EnterTransition, back_out};
use super::projector::{OrbitProjector, RadiusScale, Viewport, point_on_circle};
use super::renderer::{DebrisRenderer, MARKER_HOVER_RADIUS, MARKER_RADIUS};
use super::vec2d::Vec2D;
use super::{EARTH_RADIUS_KM, MAX_DISTANCE_KM};
use crate::http_handler::http_response::debris_catalog::CatalogEntry;
use itertools::Itertools;
use std::collections::HashSet;
use std::time::Duration;

const EPS: f64 = 1e-9;

/// Renderer double recording every command it receives.
#[derive(Debug, Default)]
struct RecordingRenderer {
    years: Vec<i32>,
    entered: Vec<(usize, String, EnterTransition)>,
    radii: Vec<(usize, f64)>,
    /// Labels currently on the surface, (text, position incl. offset).
    labels: Vec<(String, Vec2D<f64>)>,
}

impl DebrisRenderer for RecordingRenderer {
    fn init_surface(&mut self, _viewport: &Viewport) {}
    fn draw_reference_body(&mut self, _center: Vec2D<f64>, _radius: f64) {}
    fn set_year_label(&mut self, year: i32) {
        self.years.push(year);
    }
    fn enter_marker(&mut self, id: usize, size_class: &str, transition: EnterTransition) {
        self.entered.push((id, size_class.to_string(), transition));
    }
    fn set_marker_radius(&mut self, id: usize, radius: f64) {
        self.radii.push((id, radius));
    }
    fn add_hover_text(&mut self, _class: &str, text: &str, pos: Vec2D<f64>, y_offset: f64) {
        self.labels.push((text.to_string(), Vec2D::new(pos.x(), pos.y() + y_offset)));
    }
    fn clear_hover_text(&mut self) {
        self.labels.clear();
    }
}

fn scenario_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::test("VANGUARD 1", "SMALL", "01/01/1958", 500.0),
        CatalogEntry::test("HIGH FLYER", "LARGE", "01/01/1960", 8000.0),
    ]
}

fn wide_catalog() -> DebrisCatalog {
    let entries = (0..10)
        .map(|i| {
            CatalogEntry::test(
                &format!("OBJ {i}"),
                "MEDIUM",
                &format!("01/01/{}", 1958 + 2 * i),
                300.0 + 100.0 * f64::from(i),
            )
        })
        .collect_vec();
    DebrisCatalog::from_entries(entries, MAX_DISTANCE_KM).unwrap()
}

#[test]
fn distance_filter_and_visibility_scenario() {
    let catalog = DebrisCatalog::from_entries(scenario_entries(), 6000.0).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().perigee_km(), 500.0);

    assert!(catalog.visible_in(1957).is_empty());
    let visible = catalog.visible_in(1958);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id(), 0);
}

#[test]
fn enrichment_assigns_sequential_ids_and_fixed_angles() {
    let catalog = wide_catalog();
    let ids = catalog.records().iter().map(DebrisRecord::id).collect_vec();
    assert_eq!(ids, (0..10).collect_vec());
    for record in catalog.records() {
        assert!((0.0..360.0).contains(&record.orbit_angle()));
        // The angle is a plain field; reading it twice yields the same value.
        assert_eq!(record.orbit_angle(), record.orbit_angle());
    }
}

#[test]
fn visibility_is_monotone_over_years() {
    let catalog = wide_catalog();
    let mut previous: HashSet<usize> = HashSet::new();
    for year in EPOCH_YEAR..1990 {
        let current: HashSet<usize> =
            catalog.visible_in(year).iter().map(|r| r.id()).collect();
        assert!(previous.is_subset(&current), "visibility shrank at {year}");
        previous = current;
    }
    assert_eq!(previous.len(), catalog.len());
}

#[test]
fn scale_maps_domain_ends_to_range_ends() {
    let viewport = Viewport::new(800.0, 600.0);
    let catalog = wide_catalog();
    let scale = RadiusScale::fit(catalog.max_orbit_radius(), &viewport);
    assert!(scale.scale(0.0).abs() < EPS);
    assert!((scale.scale(catalog.max_orbit_radius()) - 300.0).abs() < EPS);
}

#[test]
fn degenerate_scale_domain_collapses_to_zero() {
    let viewport = Viewport::new(800.0, 600.0);
    let scale = RadiusScale::fit(0.0, &viewport);
    assert_eq!(scale.scale(123.0), 0.0);
}

#[test]
fn zero_radius_projects_to_center_for_any_angle() {
    let viewport = Viewport::new(800.0, 600.0);
    let catalog = wide_catalog();
    let projector = OrbitProjector::new(&catalog, viewport);
    for angle in [0.0, 45.0, 90.0, 187.5, 359.0] {
        let pos = projector.project(angle, 0.0);
        assert!(pos.euclid_distance(&viewport.center()) < EPS);
    }
}

#[test]
fn positions_follow_the_fixed_orbit_angle() {
    let viewport = Viewport::new(800.0, 600.0);
    let catalog = wide_catalog();
    let projector = OrbitProjector::new(&catalog, viewport);
    // A record at the domain's outermost orbit, angle 0 pointing along +x.
    let record = DebrisRecord::test(0, catalog.max_orbit_radius() - EARTH_RADIUS_KM, 1958, 0.0);

    let start = projector.start_position(&record);
    let expected_start = viewport.center() + Vec2D::new(projector.body_radius(), 0.0);
    assert!(start.euclid_distance(&expected_start) < EPS);

    let end = projector.end_position(&record);
    let expected_end = viewport.center() + Vec2D::new(viewport.fit_radius(), 0.0);
    assert!(end.euclid_distance(&expected_end) < EPS);
}

#[test]
fn circle_points_land_on_the_axes() {
    let east = point_on_circle(10.0, 0.0);
    assert!(east.euclid_distance(&Vec2D::new(10.0, 0.0)) < EPS);
    let south = point_on_circle(10.0, 90.0);
    assert!(south.euclid_distance(&Vec2D::new(0.0, 10.0)) < EPS);
}

#[test]
fn back_out_hits_both_ends_and_overshoots() {
    assert!(back_out(0.0).abs() < EPS);
    assert!((back_out(1.0) - 1.0).abs() < EPS);
    assert!(back_out(0.8) > 1.0);
}

#[test]
fn enter_transition_interpolates_between_endpoints() {
    let start = Vec2D::new(400.0, 300.0);
    let end = Vec2D::new(500.0, 300.0);
    let transition = EnterTransition::new(start, end, Duration::from_millis(1000));
    assert!(transition.position_at(0.0).euclid_distance(&start) < EPS);
    assert!(transition.position_at(1.0).euclid_distance(&end) < EPS);
    // The ease overshoots: late in the transition the marker sits past its
    // final x before coming back.
    assert!(transition.position_at(0.8).x() > end.x());
    // Out-of-range progress clamps to the endpoints.
    assert!(transition.position_at(1.5).euclid_distance(&end) < EPS);
}

fn scenario_driver() -> AnimationDriver<RecordingRenderer> {
    let catalog = DebrisCatalog::from_entries(
        vec![
            CatalogEntry::test("VANGUARD 1", "SMALL", "17/03/1958", 650.0),
            CatalogEntry::test("TRANSIT 2A", "MEDIUM", "22/06/1960", 700.0),
        ],
        MAX_DISTANCE_KM,
    )
    .unwrap();
    let projector = OrbitProjector::new(&catalog, Viewport::new(800.0, 600.0));
    let mut driver = AnimationDriver::new(
        catalog,
        projector,
        RecordingRenderer::default(),
        Duration::from_secs(1),
    );
    driver.mount();
    driver
}

#[test]
fn driver_enters_each_record_exactly_once() {
    let mut driver = scenario_driver();
    assert_eq!(driver.year(), EPOCH_YEAR);
    assert_eq!(driver.rendered_count(), 0);

    driver.tick();
    assert_eq!(driver.year(), 1958);
    assert_eq!(driver.rendered_count(), 1);

    for _ in 0..4 {
        driver.tick();
    }
    assert_eq!(driver.year(), 1962);
    assert_eq!(driver.rendered_count(), 2);

    let entered = driver.renderer().entered.iter().map(|(id, ..)| *id).collect_vec();
    assert_eq!(entered, vec![0, 1]);
    assert_eq!(driver.renderer().years, vec![1957, 1958, 1959, 1960, 1961, 1962]);
}

#[test]
fn enter_transitions_run_from_body_to_orbit() {
    let mut driver = scenario_driver();
    driver.tick();
    let (id, class, transition) = driver.renderer().entered[0].clone();
    assert_eq!(id, 0);
    assert_eq!(class, "SMALL");
    // Start sits on the body's rim, end out at the perigee; both on the ray
    // fixed by the record's orbit angle, so the end is strictly farther out.
    let center = Viewport::new(800.0, 600.0).center();
    let start_dist = transition.start().euclid_distance(&center);
    let end_dist = transition.end().euclid_distance(&center);
    assert!(start_dist > 0.0);
    assert!(end_dist > start_dist);
    assert_eq!(transition.duration(), Duration::from_millis(1000));
}

#[test]
fn hover_describes_the_record_at_its_orbit_position() {
    let mut driver = scenario_driver();
    driver.tick();
    driver.hover(0);

    assert_eq!(driver.renderer().radii, vec![(0, MARKER_HOVER_RADIUS)]);
    let labels = &driver.renderer().labels;
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].0, "VANGUARD 1");
    assert_eq!(labels[1].0, "Size: SMALL");
    assert_eq!(labels[2].0, "Launched: 17/03/1958");
    // The three lines stack below the marker at fixed offsets.
    assert_eq!(labels[1].1.y() - labels[0].1.y(), 20.0);
    assert_eq!(labels[2].1.y() - labels[1].1.y(), 15.0);
}

#[test]
fn hover_of_unrendered_record_is_ignored() {
    let mut driver = scenario_driver();
    driver.tick();
    driver.hover(1);
    driver.hover(99);
    assert!(driver.renderer().radii.is_empty());
    assert!(driver.renderer().labels.is_empty());
}

#[test]
fn unhover_clears_every_hover_label() {
    let mut driver = scenario_driver();
    for _ in 0..3 {
        driver.tick();
    }
    driver.hover(0);
    driver.hover(1);
    assert_eq!(driver.renderer().labels.len(), 6);

    // Un-hovering one marker wipes the other marker's labels too; the
    // clear is surface-wide, not per-marker.
    driver.unhover(0);
    assert!(driver.renderer().labels.is_empty());
    assert_eq!(driver.renderer().radii.last(), Some(&(0, MARKER_RADIUS)));
}

#[test]
fn url_splits_into_origin_and_path() {
    assert_eq!(
        split_url("http://localhost:3030/data/us-space-junk.json"),
        ("http://localhost:3030", "/data/us-space-junk.json")
    );
    assert_eq!(split_url("http://localhost:3030"), ("http://localhost:3030", ""));
}

#[test]
fn bundled_catalog_file_loads() {
    let catalog = DebrisCatalog::load("data/us-space-junk.json", MAX_DISTANCE_KM).unwrap();
    assert!(!catalog.is_empty());
    assert!(catalog.max_orbit_radius() > EARTH_RADIUS_KM);
    // Every surviving record respects the load-time distance filter.
    assert!(catalog.records().iter().all(|r| r.perigee_km() <= MAX_DISTANCE_KM));
}
