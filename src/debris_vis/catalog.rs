use super::EARTH_RADIUS_KM;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::catalog_get::CatalogRequest;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::http_response::debris_catalog::CatalogEntry;
use crate::http_handler::http_response::response_common::ResponseError;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::path::Path;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum DebrisLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Date(chrono::ParseError),
    Fetch(ResponseError),
}

impl std::error::Error for DebrisLoadError {}
impl From<std::io::Error> for DebrisLoadError {
    fn from(value: std::io::Error) -> Self { DebrisLoadError::Io(value) }
}
impl From<serde_json::Error> for DebrisLoadError {
    fn from(value: serde_json::Error) -> Self { DebrisLoadError::Json(value) }
}
impl From<chrono::ParseError> for DebrisLoadError {
    fn from(value: chrono::ParseError) -> Self { DebrisLoadError::Date(value) }
}
impl From<ResponseError> for DebrisLoadError {
    fn from(value: ResponseError) -> Self { DebrisLoadError::Fetch(value) }
}

/// One debris object after load-time enrichment.
///
/// `id` is the stable key joining the record to its rendered marker for the
/// life of the process; `orbit_angle` is drawn once at load and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct DebrisRecord {
    id: usize,
    object_name: String,
    rcs_size: String,
    launch: String,
    launch_year: i32,
    perigee_km: f64,
    /// Fixed position on the orbit circle, degrees in [0, 360).
    orbit_angle: f64,
}

impl DebrisRecord {
    pub fn id(&self) -> usize { self.id }
    pub fn object_name(&self) -> &str { &self.object_name }
    pub fn rcs_size(&self) -> &str { &self.rcs_size }
    pub fn launch(&self) -> &str { &self.launch }
    pub fn launch_year(&self) -> i32 { self.launch_year }
    pub fn perigee_km(&self) -> f64 { self.perigee_km }
    pub fn orbit_angle(&self) -> f64 { self.orbit_angle }

    #[cfg(test)]
    pub fn test(id: usize, perigee_km: f64, launch_year: i32, orbit_angle: f64) -> Self {
        Self {
            id,
            object_name: format!("TEST OBJECT {id}"),
            rcs_size: String::from("SMALL"),
            launch: format!("01/01/{launch_year}"),
            launch_year,
            perigee_km,
            orbit_angle,
        }
    }
}

/// The displayable debris records, loaded and enriched once at startup.
#[derive(Debug)]
pub struct DebrisCatalog {
    records: Vec<DebrisRecord>,
}

impl DebrisCatalog {
    /// Loads the catalog from a JSON file on disk.
    ///
    /// # Errors
    /// [`DebrisLoadError`] when the file is missing or malformed. The caller
    /// logs it and skips the display; nothing else is affected.
    pub fn load<P: AsRef<Path>>(path: P, max_distance_km: f64) -> Result<Self, DebrisLoadError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;
        Self::from_entries(entries, max_distance_km)
    }

    /// Fetches the catalog from an HTTP URL, for setups where the data sits
    /// on the dev server next to the page instead of on disk.
    pub async fn fetch(url: &str, max_distance_km: f64) -> Result<Self, DebrisLoadError> {
        let (base, endpoint) = split_url(url);
        let client = HTTPClient::new(base);
        let response = CatalogRequest::new(endpoint).send_request(&client).await?;
        Self::from_entries(response.0, max_distance_km)
    }

    /// Applies the distance filter, then enriches the survivors in sequence
    /// order: `id` is the post-filter index, `orbit_angle` a uniform draw.
    pub fn from_entries(
        entries: Vec<CatalogEntry>,
        max_distance_km: f64,
    ) -> Result<Self, DebrisLoadError> {
        let mut rng = rand::rng();
        let mut records = Vec::new();
        for entry in entries.into_iter().filter(|e| e.perigee_km() <= max_distance_km) {
            let launch_year = parse_launch_year(entry.launch())?;
            records.push(DebrisRecord {
                id: records.len(),
                object_name: entry.object_name().to_string(),
                rcs_size: entry.rcs_size().to_string(),
                launch: entry.launch().to_string(),
                launch_year,
                perigee_km: entry.perigee_km(),
                orbit_angle: rng.random_range(0.0..360.0),
            });
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, id: usize) -> Option<&DebrisRecord> { self.records.get(id) }

    pub fn records(&self) -> &[DebrisRecord] { &self.records }

    /// Largest orbit radius in the catalog, measured from the body center.
    /// Fixed after load; the scale never re-fits while animating.
    pub fn max_orbit_radius(&self) -> f64 {
        self.records
            .iter()
            .map(|r| EARTH_RADIUS_KM + r.perigee_km)
            .fold(0.0, f64::max)
    }

    /// Records already launched by the end of `year`, in id order.
    pub fn visible_in(&self, year: i32) -> Vec<&DebrisRecord> {
        self.records.iter().filter(|r| r.launch_year <= year).collect()
    }
}

fn parse_launch_year(launch: &str) -> Result<i32, chrono::ParseError> {
    Ok(NaiveDate::parse_from_str(launch, "%d/%m/%Y")?.year())
}

/// Splits an absolute URL into origin and path, the shape the request layer
/// expects.
pub(super) fn split_url(url: &str) -> (&str, &str) {
    if let Some(scheme_end) = url.find("://") {
        let host_start = scheme_end + 3;
        if let Some(path_offset) = url[host_start..].find('/') {
            return url.split_at(host_start + path_offset);
        }
    }
    (url, "")
}
